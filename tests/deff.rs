use kira_trajmsd::math::deff::{self, deff_from_msd};
use kira_trajmsd::math::msd::LagStatistics;

fn lag_stat(lag: usize, msd_sum: f64) -> LagStatistics {
    LagStatistics {
        lag,
        msd_x: msd_sum / 2.0,
        msd_y: msd_sum / 2.0,
        msd_sum,
        log_msd_mean: msd_sum.ln(),
        log_msd_sem: 0.1,
    }
}

#[test]
fn deff_is_msd_over_four_tau() {
    assert!((deff_from_msd(8.0, 2.0) - 1.0).abs() < 1e-12);
    assert!((deff_from_msd(4.0, 1.0) - 1.0).abs() < 1e-12);
    assert!(deff_from_msd(4.0, 0.0).is_nan());
    assert!(deff_from_msd(4.0, -1.0).is_nan());
}

#[test]
fn per_lag_deff_aligns_with_lag_stats() {
    let stats = vec![lag_stat(1, 4.0), lag_stat(2, 8.0), lag_stat(3, 12.0)];
    let summary = deff::compute(&stats, 1.0, 0.5, 10.0).unwrap();
    assert_eq!(summary.per_lag.len(), 3);
    // constant MSD/tau ratio means a constant Deff of 1
    for d in &summary.per_lag {
        assert!((d - 1.0).abs() < 1e-12);
    }
    assert!((summary.window_gmean - 1.0).abs() < 1e-12);
}

#[test]
fn window_filters_by_lag_time() {
    // fps 2 puts lags at 0.5, 1.0, 1.5 seconds
    let stats = vec![lag_stat(1, 2.0), lag_stat(2, 16.0), lag_stat(3, 6.0)];
    let summary = deff::compute(&stats, 2.0, 0.75, 1.25).unwrap();
    // only lag 2 falls in the window: Deff = 16 / (4 * 1.0) = 4
    assert!((summary.window_gmean - 4.0).abs() < 1e-12);
}

#[test]
fn zero_tmin_is_nudged_not_rejected() {
    let stats = vec![lag_stat(1, 4.0)];
    let summary = deff::compute(&stats, 1.0, 0.0, 5.0).unwrap();
    assert!((summary.tmin - 0.01).abs() < 1e-12);
    assert!((summary.window_gmean - 1.0).abs() < 1e-12);
}

#[test]
fn invalid_inputs_are_rejected() {
    let stats = vec![lag_stat(1, 4.0)];
    assert!(deff::compute(&stats, 0.0, 0.1, 1.0).is_err());
    assert!(deff::compute(&stats, -1.0, 0.1, 1.0).is_err());
    assert!(deff::compute(&stats, 1.0, 2.0, 1.0).is_err());
    assert!(deff::compute(&stats, 1.0, -0.5, 1.0).is_err());
}

#[test]
fn empty_window_is_nan_not_an_error() {
    let stats = vec![lag_stat(1, 4.0)];
    let summary = deff::compute(&stats, 1.0, 5.0, 10.0).unwrap();
    assert!(summary.window_gmean.is_nan());
}
