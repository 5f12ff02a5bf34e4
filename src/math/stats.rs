//! Masked statistical primitives.
//!
//! Missing samples are encoded as NaN and skipped by every reduction.

pub fn nan_count(values: &[f64]) -> usize {
    values.iter().filter(|v| !v.is_nan()).count()
}

/// Arithmetic mean over the valid samples; NaN when none are valid.
pub fn nan_mean(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in values {
        if v.is_nan() {
            continue;
        }
        sum += v;
        n += 1;
    }
    if n == 0 { f64::NAN } else { sum / n as f64 }
}

/// Standard error of the mean over the valid samples, with one delta degree
/// of freedom. NaN when fewer than two samples are valid.
pub fn nan_sem(values: &[f64]) -> f64 {
    let n = nan_count(values);
    if n < 2 {
        return f64::NAN;
    }
    let mean = nan_mean(values);
    let mut ss = 0.0;
    for v in values {
        if v.is_nan() {
            continue;
        }
        let d = v - mean;
        ss += d * d;
    }
    let var = ss / (n - 1) as f64;
    (var / n as f64).sqrt()
}

/// Geometric mean over the valid samples, computed through logs. A zero
/// sample collapses the mean to zero; a negative sample makes it NaN.
pub fn geometric_mean(values: &[f64]) -> f64 {
    let logs: Vec<f64> = values
        .iter()
        .filter(|v| !v.is_nan())
        .map(|v| v.ln())
        .collect();
    nan_mean(&logs).exp()
}
