//! Ordinary least-squares linear regression.
//!
//! Used by the decay slope estimator to fit a line through a segment of a
//! decibel decay curve. The fit reports both the slope (dB/s for decay
//! analysis) and the coefficient of determination R² as a goodness-of-fit
//! measure per ISO 3382-1.

/// Result of a least-squares line fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Intercept of the fitted line.
    pub intercept: f64,
    /// Coefficient of determination, clamped to `[0, 1]`.
    pub r_squared: f64,
}

/// Fit a line `y = slope·x + intercept` by ordinary least squares.
///
/// Returns `None` when fewer than two points are supplied, when the slices
/// differ in length, or when the x values are degenerate (zero variance).
pub fn linear_regression(x: &[f64], y: &[f64]) -> Option<LinearFit> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();
    let sum_xx: f64 = x.iter().map(|a| a * a).sum();

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator.abs() < f64::EPSILON {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    // R² = 1 - SS_res / SS_tot, guarding against a constant y series
    let mean_y = sum_y / n;
    let ss_total: f64 = y.iter().map(|b| (b - mean_y) * (b - mean_y)).sum();
    let ss_residual: f64 = x
        .iter()
        .zip(y)
        .map(|(a, b)| {
            let predicted = slope * a + intercept;
            (predicted - b) * (predicted - b)
        })
        .sum();
    let r_squared = (1.0 - ss_residual / ss_total.max(1e-10)).clamp(0.0, 1.0);

    Some(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_line_has_unit_r_squared() {
        let x: Vec<f64> = (0..100).map(|i| i as f64 * 0.01).collect();
        let y: Vec<f64> = x.iter().map(|t| -60.0 * t + 5.0).collect();

        let fit = linear_regression(&x, &y).unwrap();
        assert!((fit.slope + 60.0).abs() < 1e-6);
        assert!((fit.intercept - 5.0).abs() < 1e-6);
        assert!(fit.r_squared > 0.999999);
    }

    #[test]
    fn noisy_line_recovers_slope() {
        let x: Vec<f64> = (0..200).map(|i| i as f64 * 0.005).collect();
        // Deterministic zig-zag noise around the line
        let y: Vec<f64> = x
            .iter()
            .enumerate()
            .map(|(i, t)| -30.0 * t + if i % 2 == 0 { 0.1 } else { -0.1 })
            .collect();

        let fit = linear_regression(&x, &y).unwrap();
        assert!((fit.slope + 30.0).abs() < 0.5);
        assert!(fit.r_squared > 0.95);
    }

    #[test]
    fn too_few_points_is_none() {
        assert!(linear_regression(&[1.0], &[2.0]).is_none());
        assert!(linear_regression(&[], &[]).is_none());
    }

    #[test]
    fn mismatched_lengths_is_none() {
        assert!(linear_regression(&[1.0, 2.0], &[1.0]).is_none());
    }

    #[test]
    fn degenerate_x_is_none() {
        assert!(linear_regression(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn constant_y_has_zero_slope() {
        let fit = linear_regression(&[0.0, 1.0, 2.0], &[4.0, 4.0, 4.0]).unwrap();
        assert!(fit.slope.abs() < 1e-12);
    }
}
