use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::{FigureError, draw_err, ensure_dir};

const TRACE_COLOR: RGBColor = RGBColor(0xd4, 0x4d, 0x5c);

/// Settings for one convergence figure: objective value versus iteration.
pub struct ConvergenceFigure {
    title: String,
    size: (u32, u32),
}

impl ConvergenceFigure {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            size: (900, 600),
        }
    }

    /// Overrides the output size in pixels.
    #[must_use]
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Renders the figure as `<title> - convergence.png` under `dir` from
    /// `(iteration, objective)` pairs, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if `series` is empty, if the output directory cannot
    /// be created, or if drawing or encoding the figure fails.
    pub fn render(&self, dir: &Path, series: &[[f64; 2]]) -> Result<PathBuf, FigureError> {
        if series.is_empty() {
            return Err(FigureError::EmptyTrace);
        }
        ensure_dir(dir)?;
        let path = dir.join(format!("{} - convergence.png", self.title));

        let x_max = series.iter().map(|p| p[0]).fold(1.0, f64::max) + 0.5;
        let y_min = series.iter().map(|p| p[1]).fold(f64::INFINITY, f64::min);
        let y_max = series.iter().map(|p| p[1]).fold(f64::NEG_INFINITY, f64::max);
        let pad = (0.05 * (y_max - y_min)).max(0.05);

        let root = BitMapBackend::new(&path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let caption = format!("b) {} - Convergence", self.title);
        let mut chart = ChartBuilder::on(&root)
            .caption(caption, ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(45)
            .y_label_area_size(55)
            .build_cartesian_2d(0.5..x_max, (y_min - pad)..(y_max + pad))
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc("Iteration")
            .y_desc("Objective Function Value")
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(LineSeries::new(
                series.iter().map(|p| (p[0], p[1])),
                TRACE_COLOR.stroke_width(2),
            ))
            .map_err(draw_err)?;
        chart
            .draw_series(
                series
                    .iter()
                    .map(|p| Circle::new((p[0], p[1]), 3, TRACE_COLOR.filled())),
            )
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
        drop(chart);
        drop(root);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_is_rejected_before_any_io() {
        let figure = ConvergenceFigure::new("Empty");
        let result = figure.render(Path::new("does-not-exist"), &[]);
        assert!(matches!(result, Err(FigureError::EmptyTrace)));
    }
}
