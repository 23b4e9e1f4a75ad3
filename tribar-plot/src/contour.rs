use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::grid::ScalarField;
use crate::{FigureError, draw_err, ensure_dir};

/// Palette stops interpolated across contour levels, low to high.
const PALETTE: [(u8, u8, u8); 9] = [
    (0xff, 0x6b, 0x6b),
    (0xe5, 0x5b, 0x5b),
    (0xb2, 0x3a, 0x48),
    (0xa0, 0x3c, 0x75),
    (0x8f, 0x3e, 0x87),
    (0x76, 0x46, 0xa5),
    (0x4e, 0x4c, 0xa0),
    (0x3a, 0x4e, 0x8c),
    (0x2b, 0x4c, 0x7e),
];

/// One color per constraint boundary, in constraint order.
const BOUNDARY_COLORS: [RGBColor; 3] = [
    RGBColor(0x00, 0x00, 0x00),
    RGBColor(0x2e, 0x7d, 0x32),
    RGBColor(0xef, 0x6c, 0x00),
];

const FEASIBLE_FILL: RGBColor = RGBColor(0x6e, 0x6e, 0x6e);

/// Grid resolution for contour and boundary extraction.
const CURVE_GRID: usize = 400;

/// Coarser grid for the feasible-region fill.
const FILL_GRID: usize = 200;

/// Evenly spaced contour levels, inclusive of both endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Levels {
    pub start: f64,
    pub stop: f64,
    pub count: usize,
}

impl Levels {
    #[must_use]
    pub const fn new(start: f64, stop: f64, count: usize) -> Self {
        Self { start, stop, count }
    }

    /// The level values, low to high.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        if self.count <= 1 {
            return vec![self.start];
        }
        let step = (self.stop - self.start) / (self.count - 1) as f64;
        (0..self.count).map(|k| self.start + step * k as f64).collect()
    }
}

/// Interpolates the palette at `t` in `[0, 1]`.
fn palette_color(t: f64) -> RGBColor {
    let scaled = t.clamp(0.0, 1.0) * (PALETTE.len() - 1) as f64;
    let low = scaled.floor() as usize;
    let high = (low + 1).min(PALETTE.len() - 1);
    let frac = scaled - low as f64;

    let channel = |a: u8, b: u8| (f64::from(a) + frac * (f64::from(b) - f64::from(a))) as u8;
    RGBColor(
        channel(PALETTE[low].0, PALETTE[high].0),
        channel(PALETTE[low].1, PALETTE[high].1),
        channel(PALETTE[low].2, PALETTE[high].2),
    )
}

/// Settings for one contour figure: objective contours over the area window,
/// the shaded feasible region, the constraint boundaries, and the optimum
/// marker.
pub struct ContourFigure {
    title: String,
    window: (f64, f64),
    levels: Levels,
    size: (u32, u32),
}

impl ContourFigure {
    #[must_use]
    pub fn new(title: impl Into<String>, window: (f64, f64), levels: Levels) -> Self {
        Self {
            title: title.into(),
            window,
            levels,
            size: (900, 600),
        }
    }

    /// Overrides the output size in pixels.
    #[must_use]
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Renders the figure as `<title> - contours.png` under `dir`, creating
    /// the directory if needed.
    ///
    /// `objective` and `constraints` are evaluated over the window grid;
    /// constraint boundaries are the zero level curves of each slack value.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created or if
    /// drawing or encoding the figure fails.
    pub fn render<F, C>(
        &self,
        dir: &Path,
        objective: F,
        constraints: C,
        optimum: [f64; 2],
    ) -> Result<PathBuf, FigureError>
    where
        F: Fn(f64, f64) -> f64,
        C: Fn(f64, f64) -> [f64; 3],
    {
        ensure_dir(dir)?;
        let path = dir.join(format!("{} - contours.png", self.title));
        let (lo, hi) = self.window;

        let root = BitMapBackend::new(&path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let caption = format!("a) {} - Objective Contours and Feasible Region", self.title);
        let mut chart = ChartBuilder::on(&root)
            .caption(caption, ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(45)
            .y_label_area_size(55)
            .build_cartesian_2d(lo..hi, lo..hi)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc("Cross-Sectional Area - Outer Members (A1)")
            .y_desc("Cross-Sectional Area - Middle Member (A2)")
            .draw()
            .map_err(draw_err)?;

        // Objective contours, colored across the palette by level.
        let objective_field = ScalarField::sample(self.window, CURVE_GRID, &objective);
        let levels = self.levels.values();
        let level_span = (levels.len() - 1).max(1) as f64;
        for (rank, level) in levels.iter().enumerate() {
            let color = palette_color(rank as f64 / level_span);
            let segments = objective_field.level_segments(*level);
            chart
                .draw_series(segments.into_iter().map(|[a, b]| {
                    PathElement::new(vec![a, b], color.stroke_width(1))
                }))
                .map_err(draw_err)?;
        }

        // Feasible region: cells where the worst constraint slack stays
        // non-negative.
        let slack_field = ScalarField::sample(self.window, FILL_GRID, |x, y| {
            constraints(x, y).into_iter().fold(f64::INFINITY, f64::min)
        });
        chart
            .draw_series(
                slack_field.non_negative_cells().into_iter().map(|[a, b]| {
                    Rectangle::new([a, b], FEASIBLE_FILL.mix(0.3).filled())
                }),
            )
            .map_err(draw_err)?
            .label("Feasible Region")
            .legend(|(x, y)| {
                Rectangle::new([(x, y - 5), (x + 16, y + 5)], FEASIBLE_FILL.mix(0.4).filled())
            });

        // Constraint boundaries: the zero level curve of each slack value.
        for index in 0..3 {
            let color = BOUNDARY_COLORS[index];
            let boundary_field =
                ScalarField::sample(self.window, CURVE_GRID, |x, y| constraints(x, y)[index]);
            chart
                .draw_series(boundary_field.level_segments(0.0).into_iter().map(
                    |[a, b]| PathElement::new(vec![a, b], color.stroke_width(2)),
                ))
                .map_err(draw_err)?
                .label(format!("Constraint {}", index + 1))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2))
                });
        }

        chart
            .draw_series(std::iter::once(Cross::new(
                (optimum[0], optimum[1]),
                7,
                BLACK.stroke_width(2),
            )))
            .map_err(draw_err)?
            .label("Optimal Point")
            .legend(|(x, y)| Cross::new((x + 8, y), 5, BLACK.stroke_width(2)));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK.stroke_width(1))
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
        drop(chart);
        drop(root);
        Ok(path)
    }
}
