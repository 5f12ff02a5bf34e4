use anyhow::{Result, bail};

use crate::math::stats::{nan_mean, nan_sem};
use crate::traj::PositionMatrix;

/// Ensemble statistics for one time lag.
///
/// `msd_x`/`msd_y`/`msd_sum` are means over particles of each particle's
/// time-averaged squared displacement. `log_msd_mean` is the mean over
/// particles of the log of the combined displacement (the geometric-mean
/// summary) and `log_msd_sem` its standard error. Undefined values are NaN.
#[derive(Debug, Clone, Copy)]
pub struct LagStatistics {
    pub lag: usize,
    pub msd_x: f64,
    pub msd_y: f64,
    pub msd_sum: f64,
    pub log_msd_mean: f64,
    pub log_msd_sem: f64,
}

/// Computes per-lag ensemble MSD statistics over start-aligned position
/// matrices. Cells holding the 0.0 sentinel are masked out of every
/// reduction; a lag where every particle is masked yields NaN statistics
/// rather than an error.
pub fn compute(
    rel_x: &PositionMatrix,
    rel_y: &PositionMatrix,
    frame_count: usize,
    particle_count: usize,
    max_lag: usize,
) -> Result<Vec<LagStatistics>> {
    if rel_x.rows() != rel_y.rows() || rel_x.cols() != rel_y.cols() {
        bail!(
            "x and y matrices disagree: {}x{} vs {}x{}",
            rel_x.rows(),
            rel_x.cols(),
            rel_y.rows(),
            rel_y.cols()
        );
    }
    if frame_count > rel_x.rows() {
        bail!(
            "frame count {} exceeds matrix rows {}",
            frame_count,
            rel_x.rows()
        );
    }
    if particle_count != rel_x.cols() {
        bail!(
            "particle count {} does not match matrix columns {}",
            particle_count,
            rel_x.cols()
        );
    }
    if max_lag > frame_count {
        bail!(
            "max lag {} exceeds frame count {}",
            max_lag,
            frame_count
        );
    }

    let mut out = Vec::with_capacity(max_lag.saturating_sub(1));
    let mut mx = vec![f64::NAN; particle_count];
    let mut my = vec![f64::NAN; particle_count];
    let mut combined = vec![f64::NAN; particle_count];
    let mut logs = vec![f64::NAN; particle_count];

    for lag in 1..max_lag {
        for p in 0..particle_count {
            mx[p] = axis_mean_sq_disp(&rel_x.column(p)[..frame_count], lag);
            my[p] = axis_mean_sq_disp(&rel_y.column(p)[..frame_count], lag);
            // NaN in either axis masks the particle out of the combined
            // statistics at this lag.
            combined[p] = mx[p] + my[p];
            logs[p] = if combined[p] > 0.0 {
                combined[p].ln()
            } else {
                f64::NAN
            };
        }
        out.push(LagStatistics {
            lag,
            msd_x: nan_mean(&mx),
            msd_y: nan_mean(&my),
            msd_sum: nan_mean(&combined),
            log_msd_mean: nan_mean(&logs),
            log_msd_sem: nan_sem(&logs),
        });
    }
    Ok(out)
}

// Time-averaged squared displacement along one axis for one particle.
// A pair contributes only when both endpoint cells are real observations.
fn axis_mean_sq_disp(column: &[f64], lag: usize) -> f64 {
    let mut sum = 0.0;
    let mut n = 0usize;
    for t in 0..column.len().saturating_sub(lag) {
        let a = column[t];
        let b = column[t + lag];
        if a == 0.0 || b == 0.0 {
            continue;
        }
        let d = b - a;
        sum += d * d;
        n += 1;
    }
    if n == 0 { f64::NAN } else { sum / n as f64 }
}
