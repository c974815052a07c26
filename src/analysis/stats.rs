//! Descriptive statistics over small score sequences.
//!
//! Degenerate input (empty, mismatched or constant sequences) yields `0.0`
//! instead of an error so that sparse data never aborts a pass.

/// Arithmetic mean; `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance; `0.0` for an empty slice.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Pearson product-moment correlation coefficient.
///
/// Computed as `Σ(x-x̄)(y-ȳ) / (√Σ(x-x̄)² · √Σ(y-ȳ)²)`. Returns `0.0` when the
/// lengths differ, the input is empty, or either side is constant.
pub fn correlation(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() || xs.is_empty() {
        return 0.0;
    }

    let mean_x = mean(xs);
    let mean_y = mean(ys);

    let numerator: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    let denom_x = xs.iter().map(|x| (x - mean_x).powi(2)).sum::<f64>().sqrt();
    let denom_y = ys.iter().map(|y| (y - mean_y).powi(2)).sum::<f64>().sqrt();

    if denom_x == 0.0 || denom_y == 0.0 {
        return 0.0;
    }

    numerator / (denom_x * denom_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn test_variance_is_population() {
        assert_eq!(variance(&[]), 0.0);
        assert_eq!(variance(&[2.0, 2.0, 2.0]), 0.0);
        assert!((variance(&[1.0, 2.0, 3.0]) - 2.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_correlation_perfect_linear() {
        let r = correlation(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]);
        assert!((r - 1.0).abs() < EPS);
    }

    #[test]
    fn test_correlation_perfect_inverse() {
        let r = correlation(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]);
        assert!((r + 1.0).abs() < EPS);
    }

    #[test]
    fn test_correlation_symmetric() {
        let xs = [1.0, 4.0, 2.0, 5.0, 3.0];
        let ys = [2.0, 3.0, 1.0, 5.0, 5.0];
        assert_eq!(correlation(&xs, &ys), correlation(&ys, &xs));
    }

    #[test]
    fn test_correlation_degenerate_inputs() {
        assert_eq!(correlation(&[], &[]), 0.0);
        assert_eq!(correlation(&[1.0, 2.0], &[1.0, 2.0, 3.0]), 0.0);
        assert_eq!(correlation(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]), 0.0);
        assert_eq!(correlation(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]), 0.0);
    }

    #[test]
    fn test_correlation_bounded() {
        let xs = [1.0, 3.0, 2.0, 5.0, 4.0, 2.0];
        let ys = [5.0, 1.0, 4.0, 2.0, 2.0, 3.0];
        let r = correlation(&xs, &ys);
        assert!((-1.0..=1.0).contains(&r));
        assert!(r < 0.0);
    }
}
