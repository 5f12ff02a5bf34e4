use anyhow::{Result, bail};
use tracing::warn;

use crate::math::msd::LagStatistics;
use crate::math::stats::geometric_mean;

/// Anomalous-diffusion exponent. 1 = normal diffusion.
pub const ALPHA: f64 = 1.0;

/// Effective diffusion coefficient from a 2D MSD at lag `tau_s` seconds.
pub fn deff_from_msd(msd: f64, tau_s: f64) -> f64 {
    if !(tau_s > 0.0) {
        return f64::NAN;
    }
    msd / (4.0 * tau_s.powf(ALPHA))
}

#[derive(Debug, Clone)]
pub struct DeffSummary {
    /// One Deff per lag entry, aligned with the lag statistics.
    pub per_lag: Vec<f64>,
    /// Geometric mean of the Deffs whose lag time falls in [tmin, tmax].
    pub window_gmean: f64,
    pub tmin: f64,
    pub tmax: f64,
}

/// Derives per-lag Deff values from the combined MSD column and summarises
/// the `[tmin, tmax]` second window by geometric mean. A `tmin` of zero is
/// nudged to 0.01 s since the ratio is undefined at lag time zero.
pub fn compute(stats: &[LagStatistics], fps: f64, tmin: f64, tmax: f64) -> Result<DeffSummary> {
    if !(fps > 0.0) {
        bail!("fps must be positive, got {}", fps);
    }
    if tmin < 0.0 || tmax < tmin {
        bail!("invalid time window: tmin={} tmax={}", tmin, tmax);
    }
    let tmin = if tmin == 0.0 {
        warn!("tmin of 0 is undefined for Deff; using 0.01 s");
        0.01
    } else {
        tmin
    };

    let per_lag: Vec<f64> = stats
        .iter()
        .map(|s| deff_from_msd(s.msd_sum, s.lag as f64 / fps))
        .collect();

    let windowed: Vec<f64> = stats
        .iter()
        .zip(per_lag.iter())
        .filter(|(s, _)| {
            let tau_s = s.lag as f64 / fps;
            tau_s >= tmin && tau_s <= tmax
        })
        .map(|(_, d)| *d)
        .collect();

    Ok(DeffSummary {
        per_lag,
        window_gmean: geometric_mean(&windowed),
        tmin,
        tmax,
    })
}
