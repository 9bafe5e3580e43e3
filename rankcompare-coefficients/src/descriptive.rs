//! Mean, variance and Pearson correlation over plain `f64` slices.
//!
//! These return `None` where the statistic is undefined (too few values, mismatched lengths,
//! zero variance) and leave it to the caller to turn that into a typed error.

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance, with Bessel's correction.
pub fn variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let sum_of_squares: f64 = values.iter().map(|value| (value - mean).powi(2)).sum();
    Some(sum_of_squares / (values.len() - 1) as f64)
}

pub fn std_dev(values: &[f64]) -> Option<f64> {
    variance(values).map(f64::sqrt)
}

/// Sample covariance, with Bessel's correction.
pub fn covariance(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let mean_x = mean(x)?;
    let mean_y = mean(y)?;
    let product_sum: f64 = x
        .iter()
        .zip(y)
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum();
    Some(product_sum / (x.len() - 1) as f64)
}

/// Pearson's product-moment correlation, clamped to [-1, 1] against rounding.
pub fn pearson_r(x: &[f64], y: &[f64]) -> Option<f64> {
    let (std_x, std_y) = (std_dev(x)?, std_dev(y)?);
    if std_x <= f64::EPSILON || std_y <= f64::EPSILON {
        return None;
    }
    let r = covariance(x, y)? / (std_x * std_y);
    r.is_finite().then(|| r.clamp(-1.0, 1.0))
}
