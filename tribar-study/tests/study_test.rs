use approx::assert_relative_eq;
use tribar_core::{ACTIVE_TOLERANCE, AreaPair, StudyConfig, TrussProblem};
use tribar_solve::{Config as SolveConfig, Solution};
use tribar_study::{SummaryRow, run_variant, variant_settings};

fn solve_variant(index: usize) -> (Solution, SummaryRow) {
    let problem = TrussProblem::new(StudyConfig::default());
    let settings = variant_settings()[index];
    run_variant(&problem, &settings, &SolveConfig::default())
}

#[test]
fn material_variant_matches_independent_reference() {
    // Reference computed independently of the solver: bisection along the
    // active stress boundary plus golden-section search over it.
    let (solution, row) = solve_variant(0);

    assert!(solution.status.is_converged());
    assert!(row.converged);
    assert_relative_eq!(solution.x[0], 1.577_350_269_2, epsilon = 1e-4);
    assert_relative_eq!(solution.x[1], 0.816_496_580_9, epsilon = 1e-4);
    assert_relative_eq!(solution.objective, 5.277_916_867_5, epsilon = 1e-4);
    assert_eq!(row.active_constraints, "Constraint 1");
}

#[test]
fn deflection_variant_reaches_the_bound_corner() {
    let (solution, row) = solve_variant(1);

    assert!(solution.status.is_converged());
    assert_relative_eq!(solution.x[0], 5.0, epsilon = 1e-4);
    assert_relative_eq!(solution.x[1], 5.0, epsilon = 1e-4);
    assert_relative_eq!(solution.objective, 1.988_225_099_4, epsilon = 1e-4);
    // Only the box binds here; every stress constraint keeps positive slack.
    assert_eq!(row.active_constraints, "None");
}

#[test]
fn weighted_variant_balances_on_the_stress_boundary() {
    let (solution, row) = solve_variant(2);

    assert!(solution.status.is_converged());
    assert_relative_eq!(solution.x[0], 1.192_994_6, epsilon = 1e-3);
    assert_relative_eq!(solution.x[1], 3.527_399_7, epsilon = 1e-3);
    assert_relative_eq!(solution.objective, 5.392_128_219_4, epsilon = 1e-4);
    assert_eq!(row.active_constraints, "Constraint 1");
}

#[test]
fn every_optimum_is_feasible_and_in_bounds() {
    let problem = TrussProblem::new(StudyConfig::default());
    let (lo, hi) = problem.config().area_bounds();

    for index in 0..3 {
        let (solution, _) = solve_variant(index);
        let optimum = AreaPair::from_slice(&solution.x);

        assert!(optimum.within_bounds(lo - 1e-9, hi + 1e-9));
        for value in problem.constraint_values(optimum) {
            assert!(value >= -ACTIVE_TOLERANCE, "constraint violated: {value}");
        }
    }
}

#[test]
fn traces_count_iterations_in_order() {
    for index in 0..3 {
        let (solution, row) = solve_variant(index);

        assert!(!solution.trace.is_empty());
        assert_eq!(solution.trace.len(), solution.iterations);
        assert_eq!(row.iterations, solution.iterations);
        for (i, record) in solution.trace.iter().enumerate() {
            assert_eq!(record.iteration, i + 1);
        }
    }
}

#[test]
fn sub_objectives_are_reported_for_every_variant() {
    let problem = TrussProblem::new(StudyConfig::default());

    for index in 0..3 {
        let (solution, row) = solve_variant(index);
        let optimum = AreaPair::from_slice(&solution.x);

        assert_eq!(row.material, problem.material_volume(optimum));
        assert_eq!(row.deflection, problem.deflection(optimum));
    }
}

#[test]
fn weighted_optimum_trades_material_against_deflection() {
    // Relative to the single-objective optima, the blend gives up material
    // volume to recover deflection.
    let (_, material_row) = solve_variant(0);
    let (_, weighted_row) = solve_variant(2);

    assert!(weighted_row.material > material_row.material);
    assert!(weighted_row.deflection < material_row.deflection);
}
