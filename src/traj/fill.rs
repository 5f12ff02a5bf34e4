use anyhow::{Result, bail};

use crate::traj::TrajPoint;

/// Fills frame gaps in one particle's trajectory by carrying the last
/// observation forward. No interpolation: a missed frame repeats the most
/// recent real position with only the frame number advancing.
///
/// The input must be non-empty, hold a single particle id, and have strictly
/// increasing frames. Equal or decreasing frames are rejected rather than
/// reordered.
pub fn fill(points: &[TrajPoint]) -> Result<Vec<TrajPoint>> {
    let Some(first) = points.first() else {
        bail!("cannot fill an empty trajectory");
    };
    for pair in points.windows(2) {
        if pair[1].particle != first.particle {
            bail!(
                "trajectory mixes particle ids {} and {}",
                first.particle,
                pair[1].particle
            );
        }
        if pair[1].frame <= pair[0].frame {
            bail!(
                "trajectory frames must strictly increase: frame {} followed by {}",
                pair[0].frame,
                pair[1].frame
            );
        }
    }

    let start = first.frame;
    let len = points[points.len() - 1].frame - start + 1;
    let mut dense = Vec::with_capacity(len);
    let mut cursor = 0usize;
    for offset in 0..len {
        let frame = start + offset;
        if cursor + 1 < points.len() && points[cursor + 1].frame == frame {
            cursor += 1;
        }
        dense.push(TrajPoint {
            frame,
            ..points[cursor]
        });
    }
    Ok(dense)
}
