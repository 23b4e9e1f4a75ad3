use std::error::Error;
use std::path::Path;

use tribar_core::{AreaPair, StudyConfig, TrussProblem};
use tribar_plot::{ContourFigure, ConvergenceFigure, FIGURES_DIR};
use tribar_solve::{Config as SolveConfig, Status};
use tribar_study::{render_summary, render_trace, run_variant, variant_settings};

/// Optional config file consulted before falling back to defaults.
const CONFIG_PATH: &str = "tribar.toml";

fn main() -> Result<(), Box<dyn Error>> {
    let config = if Path::new(CONFIG_PATH).exists() {
        StudyConfig::load_from(CONFIG_PATH)?
    } else {
        StudyConfig::default()
    };

    let problem = TrussProblem::new(config);
    let solve_config = SolveConfig::default();
    let figures_dir = Path::new(FIGURES_DIR);

    let mut rows = Vec::new();
    for settings in variant_settings() {
        let objective = settings.objective;
        let title = objective.title();
        println!("\n{title}:");

        let (solution, row) = run_variant(&problem, &settings, &solve_config);
        print!("{}", render_trace(&solution.trace));

        match &solution.status {
            Status::Converged => {}
            Status::IterationLimit => {
                eprintln!("warning: {title} hit the iteration cap before converging");
            }
            Status::Failed { code, message } => {
                eprintln!("warning: {title} stopped early ({code}): {message}");
            }
        }

        ContourFigure::new(title, config.area_bounds(), settings.contour_levels).render(
            figures_dir,
            |a1, a2| problem.evaluate(objective, AreaPair::new(a1, a2)),
            |a1, a2| problem.constraint_values(AreaPair::new(a1, a2)),
            solution.x,
        )?;

        let series: Vec<[f64; 2]> = solution
            .trace
            .iter()
            .map(|r| [r.iteration as f64, r.objective])
            .collect();
        ConvergenceFigure::new(title).render(figures_dir, &series)?;

        rows.push(row);
    }

    println!("\nOptimal Results Summary:");
    print!("{}", render_summary(&rows));

    Ok(())
}
