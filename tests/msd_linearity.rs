use kira_trajmsd::math::msd;
use kira_trajmsd::traj::PositionMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Unit-step 2D random walk: the ensemble MSD should grow linearly in the
// lag with slope 2 (one squared unit per axis per frame).
#[test]
fn random_walk_msd_grows_linearly_with_lag() {
    let frames = 200;
    let particles = 50;
    let mut rng = StdRng::seed_from_u64(20240811);
    let mut rel_x = PositionMatrix::zeros(frames, particles);
    let mut rel_y = PositionMatrix::zeros(frames, particles);
    for p in 0..particles {
        // start far from the origin so no coordinate hits the 0 sentinel
        let mut x = 1000.0;
        let mut y = 1000.0;
        for t in 0..frames {
            rel_x.set(t, p, x);
            rel_y.set(t, p, y);
            x += if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            y += if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        }
    }

    let stats = msd::compute(&rel_x, &rel_y, frames, particles, 21).unwrap();
    assert_eq!(stats.len(), 20);

    let n = stats.len() as f64;
    let sx: f64 = stats.iter().map(|s| s.lag as f64).sum();
    let sy: f64 = stats.iter().map(|s| s.msd_sum).sum();
    let sxx: f64 = stats.iter().map(|s| (s.lag as f64).powi(2)).sum();
    let sxy: f64 = stats.iter().map(|s| s.lag as f64 * s.msd_sum).sum();
    let slope = (n * sxy - sx * sy) / (n * sxx - sx * sx);
    let intercept = (sy - slope * sx) / n;

    let mean_y = sy / n;
    let ss_res: f64 = stats
        .iter()
        .map(|s| (s.msd_sum - (slope * s.lag as f64 + intercept)).powi(2))
        .sum();
    let ss_tot: f64 = stats.iter().map(|s| (s.msd_sum - mean_y).powi(2)).sum();
    let r2 = 1.0 - ss_res / ss_tot;

    assert!(r2 > 0.9, "R^2 = {}", r2);
    assert!((slope - 2.0).abs() < 0.4, "slope = {}", slope);
}
