use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let sessions = ctx.input_meta.sessions.unwrap_or(0);
    let records = ctx.input_meta.records.unwrap_or(0);
    let assembly = ctx.assembly.as_ref().context("assembly missing")?;

    let mut out = String::new();
    out.push_str(&format!("kira-trajmsd v{}\n", version));
    out.push_str(&format!(
        "Input: {} sessions, {} records\n",
        sessions, records
    ));
    out.push_str(&format!(
        "Particles: {} surviving, {} dropped (cutoff {})\n",
        assembly.surviving, assembly.dropped, ctx.cutoff
    ));
    out.push_str(&format!(
        "Frames: {}, lags: {}\n",
        assembly.frames,
        ctx.lag_stats.len()
    ));

    if let Some(deff) = &ctx.deff {
        if deff.window_gmean.is_finite() {
            out.push_str(&format!(
                "Deff (geometric mean, {:.2}-{:.2} s): {:.6}\n",
                deff.tmin, deff.tmax, deff.window_gmean
            ));
        }
    }

    Ok(out)
}
