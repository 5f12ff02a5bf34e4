use kira_trajmsd::math::stats::{geometric_mean, nan_count, nan_mean, nan_sem};

#[test]
fn nan_mean_skips_missing_samples() {
    let v = vec![1.0, 2.0, f64::NAN, 3.0];
    assert_eq!(nan_mean(&v), 2.0);
    assert_eq!(nan_count(&v), 3);
}

#[test]
fn nan_mean_of_nothing_is_nan() {
    assert!(nan_mean(&[]).is_nan());
    assert!(nan_mean(&[f64::NAN, f64::NAN]).is_nan());
}

#[test]
fn nan_sem_matches_hand_computation() {
    // mean 2.5, sum of squared deviations 5, variance 5/3
    let v = vec![1.0, 2.0, 3.0, 4.0];
    let expected = (5.0f64 / 3.0 / 4.0).sqrt();
    assert!((nan_sem(&v) - expected).abs() < 1e-12);
}

#[test]
fn nan_sem_ignores_missing_samples() {
    let v = vec![1.0, f64::NAN, 3.0];
    // two valid samples: std 2/sqrt(2) scaled by sqrt(n)
    let expected = (2.0f64 / 2.0).sqrt();
    assert!((nan_sem(&v) - expected).abs() < 1e-12);
}

#[test]
fn nan_sem_needs_two_samples() {
    assert!(nan_sem(&[1.0]).is_nan());
    assert!(nan_sem(&[1.0, f64::NAN]).is_nan());
    assert!(nan_sem(&[]).is_nan());
}

#[test]
fn geometric_mean_basics() {
    assert!((geometric_mean(&[1.0, 4.0]) - 2.0).abs() < 1e-12);
    assert!((geometric_mean(&[2.0, f64::NAN, 8.0]) - 4.0).abs() < 1e-12);
    // a zero collapses the product
    assert_eq!(geometric_mean(&[0.0, 4.0]), 0.0);
    assert!(geometric_mean(&[]).is_nan());
    assert!(geometric_mean(&[-1.0, 4.0]).is_nan());
}
