use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::io::open_maybe_gz;
use crate::traj::{Session, TrajPoint};

/// Reads one session's trajectory records from a comma-separated file.
///
/// Rows carry particle id, frame, x, y, z. Tracking exports prepend a row
/// index column; rows with six or more fields have their first field dropped.
/// Trailing extra columns are ignored. A header line is skipped when its
/// first field is not numeric. Empty files and short rows are rejected.
pub fn read_session(path: &Path) -> Result<Session> {
    let reader = open_maybe_gz(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut reader = BufReader::new(reader);

    let label = session_label(path);
    let mut records = Vec::new();
    let mut line = String::new();
    let mut lineno = 0usize;
    while reader.read_line(&mut line)? > 0 {
        lineno += 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            line.clear();
            continue;
        }
        let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if records.is_empty() && fields[0].parse::<f64>().is_err() {
            // header line
            line.clear();
            continue;
        }
        if fields.len() < 5 {
            bail!(
                "{} line {}: expected at least 5 columns, found {}",
                path.display(),
                lineno,
                fields.len()
            );
        }
        let fields = if fields.len() >= 6 { &fields[1..] } else { &fields[..] };

        let particle = parse_index(fields[0], path, lineno, "particle id")?;
        let frame = parse_index(fields[1], path, lineno, "frame")?;
        let x = parse_coord(fields[2], path, lineno, "x")?;
        let y = parse_coord(fields[3], path, lineno, "y")?;
        let z = parse_coord(fields[4], path, lineno, "z")?;
        records.push(TrajPoint {
            particle,
            frame,
            x,
            y,
            z,
        });
        line.clear();
    }

    if records.is_empty() {
        bail!("{} contains no trajectory records", path.display());
    }
    Ok(Session { label, records })
}

fn session_label(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("session")
        .to_string()
}

// Ids and frames arrive as floats in tracking exports ("3.0"); accept them
// but reject fractional or negative values.
fn parse_index(field: &str, path: &Path, lineno: usize, what: &str) -> Result<usize> {
    let value: f64 = field
        .parse()
        .with_context(|| format!("{} line {}: invalid {}", path.display(), lineno, what))?;
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        bail!(
            "{} line {}: {} must be a non-negative integer, got {}",
            path.display(),
            lineno,
            what,
            field
        );
    }
    Ok(value as usize)
}

fn parse_coord(field: &str, path: &Path, lineno: usize, what: &str) -> Result<f64> {
    let value: f64 = field
        .parse()
        .with_context(|| format!("{} line {}: invalid {}", path.display(), lineno, what))?;
    if !value.is_finite() {
        bail!(
            "{} line {}: non-finite {} coordinate",
            path.display(),
            lineno,
            what
        );
    }
    Ok(value)
}
