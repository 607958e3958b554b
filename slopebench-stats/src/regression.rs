//! Overhead-Cancelling Regression
//!
//! Every timed window carries a fixed cost that does not scale with the
//! number of sampled repetitions: timer straddling, workload construction,
//! loop setup. Averaging cannot separate that additive bias from the signal.
//! Fitting a least-squares line over (repetition count, total sampled time)
//! pairs can: the fixed cost lands in the intercept and the slope is the
//! marginal cost alone.

/// Errors from a slope fit.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegressionError {
    /// Fewer than two points define no line.
    #[error("regression needs at least 2 points, got {0}")]
    TooFewPoints(usize),
    /// The denominator of the slope formula vanished (identical x values).
    #[error("degenerate regression: x values carry no spread")]
    Degenerate,
}

/// Fit an ordinary least-squares line and return its slope.
///
/// Uses the closed form `(n·Σxy − Σx·Σy) / (n·Σxx − (Σx)²)`. The intercept
/// is deliberately discarded; it absorbs the fixed per-window overhead.
pub fn fit_slope(points: &[(f64, f64)]) -> Result<f64, RegressionError> {
    let n = points.len();
    if n < 2 {
        return Err(RegressionError::TooFewPoints(n));
    }

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_xy = 0.0;

    for &(x, y) in points {
        sum_x += x;
        sum_y += y;
        sum_xx += x * x;
        sum_xy += x * y;
    }

    let n = n as f64;
    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator.abs() < f64::EPSILON * n * sum_xx.max(1.0) {
        return Err(RegressionError::Degenerate);
    }

    Ok((n * sum_xy - sum_x * sum_y) / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line_recovers_slope() {
        // y = 3x + 7
        let points: Vec<(f64, f64)> = (1..=10).map(|i| (i as f64, 3.0 * i as f64 + 7.0)).collect();
        let slope = fit_slope(&points).unwrap();
        assert!((slope - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_intercept_does_not_leak_into_slope() {
        // Same slope, enormous intercept.
        let points: Vec<(f64, f64)> = (1..=20)
            .map(|i| (i as f64, 0.5 * i as f64 + 1e9))
            .collect();
        let slope = fit_slope(&points).unwrap();
        assert!((slope - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_too_few_points() {
        assert_eq!(
            fit_slope(&[(1.0, 2.0)]),
            Err(RegressionError::TooFewPoints(1))
        );
        assert_eq!(fit_slope(&[]), Err(RegressionError::TooFewPoints(0)));
    }

    #[test]
    fn test_identical_x_values_are_degenerate() {
        let points = [(2.0, 1.0), (2.0, 5.0), (2.0, 9.0)];
        assert_eq!(fit_slope(&points), Err(RegressionError::Degenerate));
    }

    #[test]
    fn test_noisy_line_slope_within_tolerance() {
        // Alternating +-1 noise around y = 2x.
        let points: Vec<(f64, f64)> = (1..=40)
            .map(|i| {
                let noise = if i % 2 == 0 { 1.0 } else { -1.0 };
                (i as f64, 2.0 * i as f64 + noise)
            })
            .collect();
        let slope = fit_slope(&points).unwrap();
        assert!((slope - 2.0).abs() < 0.05);
    }
}
