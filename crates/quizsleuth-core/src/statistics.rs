//! Small descriptive statistics used by the store and the confidence engine.

/// Arithmetic mean, 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divide by n), 0 for an empty slice.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64
}

/// Sample variance (divide by n - 1) around a caller-supplied reference
/// value rather than the arithmetic mean. 0 when there are fewer than two
/// values.
pub fn sample_variance_around(values: &[f64], reference: f64) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let sum_sq: f64 = values
        .iter()
        .map(|v| (v - reference) * (v - reference))
        .sum();
    sum_sq / (values.len() - 1) as f64
}
