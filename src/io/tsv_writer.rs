use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ctx::Ctx;

pub fn write_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    if let Some(deff) = &ctx.deff {
        ensure_len(deff.per_lag.len(), ctx.lag_stats.len(), "deff")?;
    }

    writeln!(
        w,
        "lag\ttau_s\tmsd_x\tmsd_y\tmsd_sum\tlog_msd_mean\tlog_msd_sem\tdeff"
    )?;
    for (i, s) in ctx.lag_stats.iter().enumerate() {
        let tau_s = ctx.fps.map(|fps| s.lag as f64 / fps).unwrap_or(f64::NAN);
        let deff = ctx
            .deff
            .as_ref()
            .map(|d| d.per_lag[i])
            .unwrap_or(f64::NAN);
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            s.lag,
            cell(tau_s),
            cell(s.msd_x),
            cell(s.msd_y),
            cell(s.msd_sum),
            cell(s.log_msd_mean),
            cell(s.log_msd_sem),
            cell(deff)
        )?;
    }

    Ok(())
}

fn ensure_len(got: usize, expected: usize, name: &str) -> Result<()> {
    if got != expected {
        bail!("{} length mismatch: {} != {}", name, got, expected);
    }
    Ok(())
}

// Undefined statistics render as empty cells, not "NaN".
fn cell(value: f64) -> String {
    if value.is_finite() {
        format!("{:.6}", value)
    } else {
        String::new()
    }
}
