//! Constrained minimization runner for the sizing study.
//!
//! Wraps an external SLSQP solver: box bounds on both variables, inequality
//! constraints feasible at `>= 0`, and a per-iteration trace captured
//! through the solver's observer interface.
//!
//! # Iteration trace
//!
//! The solver emits one event per internal step, and several steps (line
//! search evaluations) can share one major iteration. The trace keeps the
//! first event of each new major iteration and re-evaluates the objective at
//! that iterate. Record indices are 1-based and strictly increasing, and the
//! solution's reported iteration count equals the trace length.
//!
//! # Failure semantics
//!
//! Solver non-convergence is carried in [`Status`] on the returned
//! [`Solution`]; there is no retry and no fallback method.

mod config;
mod solution;
mod trace;

pub use config::{Config, ConfigError};
pub use solution::{Solution, Status};
pub use trace::IterationRecord;

use slsqp_rssl::{Constraint, fmin_slsqp_observed};

use trace::Trace;

/// Minimizes `objective` over the box `bounds` on both variables, subject to
/// every constraint in `constraints` being non-negative, starting from
/// `start`.
///
/// Each call is an independent solve: the iteration trace and counters are
/// freshly scoped and nothing is shared between invocations.
pub fn minimize<F, G>(
    objective: F,
    constraints: &[G],
    start: [f64; 2],
    bounds: (f64, f64),
    config: &Config,
) -> Solution
where
    F: Fn(&[f64]) -> f64,
    G: Fn(&[f64]) -> f64,
{
    let inequalities: Vec<Constraint<'_>> = constraints
        .iter()
        .map(|g| Constraint::Ineq(Box::new(g)))
        .collect();

    let mut trace = Trace::new(&objective);
    let result = fmin_slsqp_observed(
        &objective,
        &start,
        &[bounds, bounds],
        inequalities,
        config.max_iters(),
        config.accuracy(),
        &mut trace,
    );

    Solution::new(result, trace.into_records())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn minimizes_quadratic_with_inequality() {
        // f = x1^2 + x2^2 with x1 + x2 >= 1 has its minimum at (0.5, 0.5).
        let objective = |x: &[f64]| x[0] * x[0] + x[1] * x[1];
        let constraints = [|x: &[f64]| x[0] + x[1] - 1.0];

        let solution = minimize(
            objective,
            &constraints,
            [2.0, 2.0],
            (0.0, 10.0),
            &Config::default(),
        );

        assert!(solution.status.is_converged());
        assert_relative_eq!(solution.x[0], 0.5, epsilon = 1e-4);
        assert_relative_eq!(solution.x[1], 0.5, epsilon = 1e-4);
        assert_relative_eq!(solution.objective, 0.5, epsilon = 1e-4);
    }

    #[test]
    fn trace_matches_reported_iterations() {
        let objective = |x: &[f64]| (x[0] - 3.0).powi(2) + (x[1] + 1.0).powi(2);
        let constraints: [fn(&[f64]) -> f64; 0] = [];

        let solution = minimize(
            objective,
            &constraints,
            [0.0, 0.0],
            (-10.0, 10.0),
            &Config::default(),
        );

        assert!(solution.status.is_converged());
        assert_eq!(solution.trace.len(), solution.iterations);
        for (i, record) in solution.trace.iter().enumerate() {
            assert_eq!(record.iteration, i + 1);
            assert_eq!(record.objective, objective(&record.x));
        }
    }

    #[test]
    fn iteration_cap_is_surfaced_as_status() {
        // A cap of one iteration cannot reach the optimum of this bowl.
        let objective = |x: &[f64]| {
            100.0 * (x[1] - x[0] * x[0]).powi(2) + (1.0 - x[0]).powi(2)
        };
        let constraints: [fn(&[f64]) -> f64; 0] = [];
        let config = Config::new(1, 1e-12).expect("valid config");

        let solution = minimize(objective, &constraints, [-1.2, 1.0], (-2.0, 2.0), &config);

        assert_eq!(solution.status, Status::IterationLimit);
    }

    #[test]
    fn respects_box_bounds() {
        // Unconstrained minimum sits at (-3, -3), outside the box.
        let objective = |x: &[f64]| (x[0] + 3.0).powi(2) + (x[1] + 3.0).powi(2);
        let constraints: [fn(&[f64]) -> f64; 0] = [];

        let solution = minimize(
            objective,
            &constraints,
            [1.0, 1.0],
            (0.0, 5.0),
            &Config::default(),
        );

        assert!(solution.status.is_converged());
        assert_relative_eq!(solution.x[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(solution.x[1], 0.0, epsilon = 1e-6);
    }
}
