use std::time::{Duration, Instant};

use tribar_core::{
    ACTIVE_TOLERANCE, ActiveSet, AreaPair, CONSTRAINT_COUNT, Objective, TrussProblem,
};
use tribar_plot::Levels;
use tribar_solve::{Config as SolveConfig, Solution};

/// Per-variant run settings.
///
/// The contour levels are a presentation concern carried alongside the
/// variant; they play no role in the optimization itself.
#[derive(Debug, Clone, Copy)]
pub struct VariantSettings {
    pub objective: Objective,
    pub start: AreaPair,
    pub contour_levels: Levels,
}

/// The fixed study plan: all three variants from the same starting point.
#[must_use]
pub fn variant_settings() -> [VariantSettings; 3] {
    let start = AreaPair::new(2.0, 2.0);
    [
        VariantSettings {
            objective: Objective::Material,
            start,
            contour_levels: Levels::new(1.0, 18.0, 18),
        },
        VariantSettings {
            objective: Objective::Deflection,
            start,
            contour_levels: Levels::new(2.0, 6.0, 9),
        },
        VariantSettings {
            objective: Objective::Weighted,
            start,
            contour_levels: Levels::new(4.0, 9.5, 12),
        },
    ]
}

/// One row of the cross-run summary.
#[derive(Debug, Clone)]
pub struct SummaryRow {
    pub title: &'static str,
    pub optimum: AreaPair,
    pub objective: f64,
    pub iterations: usize,
    pub active_constraints: String,
    /// Material volume at the optimum, whichever variant was solved.
    pub material: f64,
    /// Deflection at the optimum, whichever variant was solved.
    pub deflection: f64,
    /// Wall-clock time of the solve call only.
    pub runtime: Duration,
    pub converged: bool,
}

/// Solves one variant and aggregates its summary row.
///
/// Only the solve call is timed; trace printing and figure rendering happen
/// outside this function and are excluded from the runtime column.
#[must_use]
pub fn run_variant(
    problem: &TrussProblem,
    settings: &VariantSettings,
    solve_config: &SolveConfig,
) -> (Solution, SummaryRow) {
    let objective = settings.objective;
    let objective_fn = |x: &[f64]| problem.evaluate(objective, AreaPair::from_slice(x));
    let constraint_fns: Vec<_> = (0..CONSTRAINT_COUNT)
        .map(|i| move |x: &[f64]| problem.constraint_values(AreaPair::from_slice(x))[i])
        .collect();

    let timer = Instant::now();
    let solution = tribar_solve::minimize(
        objective_fn,
        &constraint_fns,
        settings.start.to_array(),
        problem.config().area_bounds(),
        solve_config,
    );
    let runtime = timer.elapsed();

    let optimum = AreaPair::from_slice(&solution.x);
    let active = ActiveSet::classify(&problem.constraint_values(optimum), ACTIVE_TOLERANCE);

    let row = SummaryRow {
        title: objective.title(),
        optimum,
        objective: solution.objective,
        iterations: solution.iterations,
        active_constraints: active.to_string(),
        material: problem.material_volume(optimum),
        deflection: problem.deflection(optimum),
        runtime,
        converged: solution.status.is_converged(),
    };

    (solution, row)
}
