/// A scalar field sampled on a uniform square grid over a plot window.
pub(crate) struct ScalarField {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Row-major: `values[j][i]` is the field at `(xs[i], ys[j])`.
    values: Vec<Vec<f64>>,
}

impl ScalarField {
    /// Samples `f` on an `n` by `n` grid spanning `window` on both axes.
    /// `n` must be at least 2.
    pub(crate) fn sample(window: (f64, f64), n: usize, f: impl Fn(f64, f64) -> f64) -> Self {
        let (lo, hi) = window;
        let step = (hi - lo) / (n - 1) as f64;
        let xs: Vec<f64> = (0..n).map(|i| lo + step * i as f64).collect();
        let ys = xs.clone();
        let values = ys
            .iter()
            .map(|&y| xs.iter().map(|&x| f(x, y)).collect())
            .collect();
        Self { xs, ys, values }
    }

    /// Line segments tracing the level curve `f = level`.
    ///
    /// Each grid cell contributes segments whose endpoints are found by
    /// linear interpolation along the cell edges where the field crosses the
    /// level. Cells containing non-finite samples are skipped.
    pub(crate) fn level_segments(&self, level: f64) -> Vec<[(f64, f64); 2]> {
        let mut segments = Vec::new();

        for j in 0..self.ys.len() - 1 {
            for i in 0..self.xs.len() - 1 {
                let corners = [
                    (self.xs[i], self.ys[j], self.values[j][i]),
                    (self.xs[i + 1], self.ys[j], self.values[j][i + 1]),
                    (self.xs[i + 1], self.ys[j + 1], self.values[j + 1][i + 1]),
                    (self.xs[i], self.ys[j + 1], self.values[j + 1][i]),
                ];
                if corners.iter().any(|c| !c.2.is_finite()) {
                    continue;
                }

                let mut crossings = Vec::with_capacity(4);
                for k in 0..4 {
                    let (xa, ya, va) = corners[k];
                    let (xb, yb, vb) = corners[(k + 1) % 4];
                    if (va - level) * (vb - level) < 0.0 {
                        let t = (level - va) / (vb - va);
                        crossings.push((xa + t * (xb - xa), ya + t * (yb - ya)));
                    }
                }

                match crossings.len() {
                    2 => segments.push([crossings[0], crossings[1]]),
                    // Saddle cell: pair the crossings in edge order.
                    4 => {
                        segments.push([crossings[0], crossings[1]]);
                        segments.push([crossings[2], crossings[3]]);
                    }
                    _ => {}
                }
            }
        }

        segments
    }

    /// Rectangles covering the cells whose corners are all non-negative,
    /// with horizontal runs of adjacent cells merged.
    pub(crate) fn non_negative_cells(&self) -> Vec<[(f64, f64); 2]> {
        let mut rects = Vec::new();

        for j in 0..self.ys.len() - 1 {
            let mut run_start: Option<usize> = None;
            for i in 0..self.xs.len() - 1 {
                let keep = [
                    self.values[j][i],
                    self.values[j][i + 1],
                    self.values[j + 1][i],
                    self.values[j + 1][i + 1],
                ]
                .iter()
                .all(|v| v.is_finite() && *v >= 0.0);

                if keep {
                    run_start.get_or_insert(i);
                } else if let Some(start) = run_start.take() {
                    rects.push([(self.xs[start], self.ys[j]), (self.xs[i], self.ys[j + 1])]);
                }
            }
            if let Some(start) = run_start {
                let last = self.xs.len() - 1;
                rects.push([(self.xs[start], self.ys[j]), (self.xs[last], self.ys[j + 1])]);
            }
        }

        rects
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn traces_a_linear_field_exactly() {
        // f = x + y crosses level 0.75 along the line x + y = 0.75. The
        // level sits between grid samples, so every crossing is a strict
        // sign change.
        let field = ScalarField::sample((0.0, 1.0), 11, |x, y| x + y);
        let segments = field.level_segments(0.75);

        assert!(!segments.is_empty());
        for [(xa, ya), (xb, yb)] in segments {
            assert_relative_eq!(xa + ya, 0.75, epsilon = 1e-12);
            assert_relative_eq!(xb + yb, 0.75, epsilon = 1e-12);
        }
    }

    #[test]
    fn level_outside_field_range_has_no_segments() {
        let field = ScalarField::sample((0.0, 1.0), 5, |x, y| x + y);
        assert!(field.level_segments(10.0).is_empty());
    }

    #[test]
    fn merges_feasible_runs_per_row() {
        // Non-negative everywhere: each row collapses to one rectangle.
        let field = ScalarField::sample((0.0, 1.0), 5, |_, _| 1.0);
        let rects = field.non_negative_cells();
        assert_eq!(rects.len(), 4);
        for [(x0, _), (x1, _)] in rects {
            assert_eq!(x0, 0.0);
            assert_eq!(x1, 1.0);
        }
    }

    #[test]
    fn excludes_negative_cells() {
        // Negative for x > 0.5 splits each row.
        let field = ScalarField::sample((0.0, 1.0), 9, |x, _| 0.5 - x);
        for [(x0, _), (x1, _)] in field.non_negative_cells() {
            assert!(x0 >= 0.0);
            assert!(x1 <= 0.5 + 1e-12);
        }
    }
}
