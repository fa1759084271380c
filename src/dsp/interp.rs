/// Piecewise-linear interpolation over strictly increasing knots.
///
/// Points outside the knot range are extrapolated along the first or last
/// segment.
#[derive(Debug, Clone, Copy)]
pub struct LinearSpline<'a> {
    xs: &'a [f64],
    ys: &'a [f64],
}

impl<'a> LinearSpline<'a> {
    /// `xs` must be strictly increasing and as long as `ys`.
    pub fn new(xs: &'a [f64], ys: &'a [f64]) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        debug_assert!(xs.windows(2).all(|w| w[0] < w[1]));
        Self { xs, ys }
    }

    pub fn evaluate(&self, t: f64) -> f64 {
        match self.xs.len() {
            0 => 0.0,
            1 => self.ys[0],
            n => {
                // Index of the segment [xs[k], xs[k + 1]] used for `t`
                let k = self.xs.partition_point(|&x| x <= t).clamp(1, n - 1) - 1;
                let (x0, x1) = (self.xs[k], self.xs[k + 1]);
                let (y0, y1) = (self.ys[k], self.ys[k + 1]);
                y0 + (y1 - y0) * (t - x0) / (x1 - x0)
            }
        }
    }

    pub fn evaluate_all(&self, targets: &[f64]) -> Vec<f64> {
        targets.iter().map(|&t| self.evaluate(t)).collect()
    }
}

/// Resample `(xs, ys)` onto `targets`.
pub fn interpolate(xs: &[f64], ys: &[f64], targets: &[f64]) -> Vec<f64> {
    LinearSpline::new(xs, ys).evaluate_all(targets)
}
