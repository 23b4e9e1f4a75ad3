//! PNG figure rendering for the sizing study.
//!
//! Two figures are written per optimization run, into a shared output
//! directory created on demand:
//!
//! - [`ContourFigure`] — objective contours over the area window, the shaded
//!   feasible region, the three constraint boundaries, and the optimum.
//! - [`ConvergenceFigure`] — objective value versus iteration index.
//!
//! Contour and boundary curves are extracted from a sampled grid; this is
//! presentation glue, not part of the study's numerical core.

mod contour;
mod convergence;
mod grid;

pub use contour::{ContourFigure, Levels};
pub use convergence::ConvergenceFigure;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default output directory for rendered figures.
pub const FIGURES_DIR: &str = "figures";

/// Errors that can occur while rendering a figure.
#[derive(Debug, Error)]
pub enum FigureError {
    #[error("failed to create figures directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("figure drawing failed: {message}")]
    Draw { message: String },

    #[error("no iterations to plot")]
    EmptyTrace,
}

fn ensure_dir(dir: &Path) -> Result<(), FigureError> {
    std::fs::create_dir_all(dir).map_err(|source| FigureError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

fn draw_err(error: impl std::fmt::Display) -> FigureError {
    FigureError::Draw {
        message: error.to_string(),
    }
}
