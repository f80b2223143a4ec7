//! Descriptive statistics over plain value vectors.
//!
//! Empty input yields NaN rather than an error; callers that need a hard
//! failure check for emptiness first.

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median (average of the two middle values for even lengths).
pub fn median(values: &[f64]) -> f64 {
    quantile(values, 0.5)
}

/// Sample quantile with linear interpolation between closest ranks (R-7).
///
/// `p` is clamped to `[0, 1]`.
pub fn quantile(values: &[f64], p: f64) -> f64 {
    quantile_sorted(&sorted(values), p)
}

/// First and third quartiles `(Q1, Q3)`.
pub fn quartiles(values: &[f64]) -> (f64, f64) {
    let sorted = sorted(values);
    (quantile_sorted(&sorted, 0.25), quantile_sorted(&sorted, 0.75))
}

/// Coefficient of quartile variation, `(Q3 - Q1) / (Q3 + Q1)`.
///
/// Plain IEEE division: `Q1 = Q3 = 0` gives NaN.
pub fn cqv(q1: f64, q3: f64) -> f64 {
    (q3 - q1) / (q3 + q1)
}

/// Smallest value.
pub fn min(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Largest value.
pub fn max(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Quantile of pre-sorted data.
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted[0];
    }

    let h = (n - 1) as f64 * p.clamp(0.0, 1.0);
    let j = h.floor() as usize;
    let g = h - h.floor();

    if j + 1 >= n {
        sorted[n - 1]
    } else {
        sorted[j] + g * (sorted[j + 1] - sorted[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_and_median() {
        let values = [1.0, 1.0, 2.0, 5.0, 10.0];
        assert_relative_eq!(mean(&values), 3.8);
        assert_relative_eq!(median(&values), 2.0);
        assert_relative_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn test_quantile_linear_interpolation() {
        // R: quantile(c(1, 1, 2, 5, 10), c(0.25, 0.75)) -> 1, 5
        let (q1, q3) = quartiles(&[10.0, 1.0, 5.0, 2.0, 1.0]);
        assert_relative_eq!(q1, 1.0);
        assert_relative_eq!(q3, 5.0);

        // R: quantile(1:4, c(0.25, 0.75)) -> 1.75, 3.25
        let (q1, q3) = quartiles(&[1.0, 2.0, 3.0, 4.0]);
        assert_relative_eq!(q1, 1.75);
        assert_relative_eq!(q3, 3.25);
    }

    #[test]
    fn test_quantile_extremes() {
        let values = [3.0, 7.0, 1.0];
        assert_relative_eq!(quantile(&values, 0.0), 1.0);
        assert_relative_eq!(quantile(&values, 1.0), 7.0);
        assert_relative_eq!(quantile(&[42.0], 0.25), 42.0);
    }

    #[test]
    fn test_cqv() {
        assert_relative_eq!(cqv(1.0, 3.0), 0.5);
        assert_eq!(cqv(7.0, 7.0), 0.0);
        assert!(cqv(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_empty_input_is_nan() {
        assert!(mean(&[]).is_nan());
        assert!(median(&[]).is_nan());
        assert!(min(&[]).is_nan());
        assert!(max(&[]).is_nan());
    }

    #[test]
    fn test_min_max() {
        let values = [3.0, -1.0, 8.5];
        assert_eq!(min(&values), -1.0);
        assert_eq!(max(&values), 8.5);
    }
}
