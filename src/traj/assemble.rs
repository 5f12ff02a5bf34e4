use std::collections::BTreeMap;

use anyhow::{Result, bail};
use tracing::info;

use crate::traj::fill::fill;
use crate::traj::{PositionMatrix, Session, TrajPoint};

/// Spatial scale factors applied to raw coordinates before filling.
/// The time scale (frames per second) is applied downstream, not here.
#[derive(Debug, Clone, Copy)]
pub struct UnitConversion {
    pub xy_scale: f64,
    pub z_scale: f64,
}

impl Default for UnitConversion {
    fn default() -> Self {
        Self {
            xy_scale: 1.0,
            z_scale: 1.0,
        }
    }
}

/// Merged per-frame position matrices across all sessions.
///
/// `rel_*` matrices shift every trajectory to start at row 0; `abs_*`
/// matrices keep true frame numbers as rows. Columns are the surviving
/// particles, compacted to a dense 0-based index.
#[derive(Debug)]
pub struct Assembly {
    pub surviving: usize,
    pub dropped: usize,
    pub frames: usize,
    pub rel_x: PositionMatrix,
    pub rel_y: PositionMatrix,
    pub abs_x: PositionMatrix,
    pub abs_y: PositionMatrix,
}

pub struct Assembler {
    pub cutoff: usize,
    pub conversion: UnitConversion,
    pub threads: usize,
}

impl Assembler {
    pub fn new(cutoff: usize, conversion: UnitConversion, threads: usize) -> Self {
        Self {
            cutoff,
            conversion,
            threads,
        }
    }

    /// Merges the sessions into global position matrices.
    ///
    /// Local particle ids are remapped to a global id space in session order,
    /// ascending local id within a session. Particles whose observed frame
    /// span is below the cutoff are dropped and later columns compact down.
    /// Any malformed session aborts the whole call.
    pub fn assemble(&self, sessions: &[Session]) -> Result<Assembly> {
        if sessions.is_empty() {
            bail!("no sessions to assemble");
        }

        let mut groups: Vec<Vec<TrajPoint>> = Vec::new();
        let mut max_frame = 0usize;
        for (num, session) in sessions.iter().enumerate() {
            if session.records.is_empty() {
                bail!("session {} ({}) contains no records", num + 1, session.label);
            }
            // Explicit grouping: record order inside a particle is preserved,
            // but nothing is assumed about how particles interleave.
            let mut by_id: BTreeMap<usize, Vec<TrajPoint>> = BTreeMap::new();
            for point in &session.records {
                if point.frame > max_frame {
                    max_frame = point.frame;
                }
                by_id.entry(point.particle).or_default().push(*point);
            }
            info!(
                session = %session.label,
                particles = by_id.len(),
                records = session.records.len(),
                "session_grouped"
            );
            groups.extend(by_id.into_values());
        }

        let total = groups.len();
        let rows = max_frame + 1;

        let mut dropped = 0usize;
        let mut jobs: Vec<Vec<TrajPoint>> = Vec::new();
        for points in groups {
            let lo = points.iter().map(|p| p.frame).min().unwrap_or(0);
            let hi = points.iter().map(|p| p.frame).max().unwrap_or(0);
            if hi - lo < self.cutoff {
                dropped += 1;
                continue;
            }
            jobs.push(self.scale(points));
        }
        let surviving = jobs.len();

        let filled = self.fill_all(jobs)?;

        let mut rel_x = PositionMatrix::zeros(rows, surviving);
        let mut rel_y = PositionMatrix::zeros(rows, surviving);
        let mut abs_x = PositionMatrix::zeros(rows, surviving);
        let mut abs_y = PositionMatrix::zeros(rows, surviving);
        for (col, dense) in filled.iter().enumerate() {
            let start = dense[0].frame;
            for (offset, point) in dense.iter().enumerate() {
                abs_x.set(start + offset, col, point.x);
                abs_y.set(start + offset, col, point.y);
                rel_x.set(offset, col, point.x);
                rel_y.set(offset, col, point.y);
            }
        }

        info!(
            total,
            surviving,
            dropped,
            frames = rows,
            "assembly_complete"
        );

        Ok(Assembly {
            surviving,
            dropped,
            frames: rows,
            rel_x,
            rel_y,
            abs_x,
            abs_y,
        })
    }

    fn scale(&self, points: Vec<TrajPoint>) -> Vec<TrajPoint> {
        points
            .into_iter()
            .map(|p| TrajPoint {
                x: p.x * self.conversion.xy_scale,
                y: p.y * self.conversion.xy_scale,
                z: p.z * self.conversion.z_scale,
                ..p
            })
            .collect()
    }

    // Each particle fills independently and lands in its own column, so the
    // threaded path needs no coordination beyond collecting results in order.
    #[cfg(feature = "mt")]
    fn fill_all(&self, jobs: Vec<Vec<TrajPoint>>) -> Result<Vec<Vec<TrajPoint>>> {
        use rayon::prelude::*;

        if self.threads <= 1 {
            return jobs.iter().map(|points| fill(points)).collect();
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build thread pool: {}", e))?;
        pool.install(|| jobs.par_iter().map(|points| fill(points)).collect())
    }

    #[cfg(not(feature = "mt"))]
    fn fill_all(&self, jobs: Vec<Vec<TrajPoint>>) -> Result<Vec<Vec<TrajPoint>>> {
        jobs.iter().map(|points| fill(points)).collect()
    }
}
