use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Resolves numbered session files in a folder. Recordings follow the
/// `Traj_{name}_{num}` convention with `num` starting at 1; both the
/// `.tif.csv` export suffix and plain `.csv` are accepted, optionally
/// gzipped. A missing session number fails the whole resolution.
pub fn resolve_session_files(folder: &Path, name: &str, videos: usize) -> Result<Vec<PathBuf>> {
    if videos == 0 {
        bail!("session count must be at least 1");
    }
    let mut files = Vec::with_capacity(videos);
    for num in 1..=videos {
        match candidates(folder, name, num).into_iter().find(|p| p.exists()) {
            Some(path) => files.push(path),
            None => bail!(
                "no trajectory file for session {} in {} (expected Traj_{}_{}.tif.csv, \
                 Traj_{}_{}.csv, or a .gz variant)",
                num,
                folder.display(),
                name,
                num,
                name,
                num
            ),
        }
    }
    Ok(files)
}

fn candidates(folder: &Path, name: &str, num: usize) -> [PathBuf; 4] {
    [
        folder.join(format!("Traj_{}_{}.tif.csv", name, num)),
        folder.join(format!("Traj_{}_{}.tif.csv.gz", name, num)),
        folder.join(format!("Traj_{}_{}.csv", name, num)),
        folder.join(format!("Traj_{}_{}.csv.gz", name, num)),
    ]
}
