use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ctx::Ctx;
use crate::schema::v1::{Conversion, DeffSummary, InputMeta, LagRow, TrajMsdV1};

pub fn build_report(ctx: &Ctx) -> Result<TrajMsdV1> {
    let assembly = ctx.assembly.as_ref().context("assembly missing")?;

    let input_meta = InputMeta {
        sessions: ctx.input_meta.sessions,
        records: ctx.input_meta.records,
        particles: Some((assembly.surviving + assembly.dropped) as u64),
        surviving: Some(assembly.surviving as u64),
        dropped: Some(assembly.dropped as u64),
        frames: Some(assembly.frames as u64),
        cutoff: ctx.cutoff as u64,
        max_lag: Some(ctx.effective_max_lag() as u64),
        conversion: Conversion {
            xy_scale: ctx.conversion.xy_scale,
            z_scale: ctx.conversion.z_scale,
            fps: ctx.fps,
        },
    };

    if let Some(deff) = &ctx.deff {
        if deff.per_lag.len() != ctx.lag_stats.len() {
            bail!(
                "deff rows ({}) do not match lag rows ({})",
                deff.per_lag.len(),
                ctx.lag_stats.len()
            );
        }
    }

    let lags = ctx
        .lag_stats
        .iter()
        .enumerate()
        .map(|(i, s)| LagRow {
            lag: s.lag as u64,
            tau_s: ctx.fps.map(|fps| s.lag as f64 / fps),
            msd_x: finite(s.msd_x),
            msd_y: finite(s.msd_y),
            msd_sum: finite(s.msd_sum),
            log_msd_mean: finite(s.log_msd_mean),
            log_msd_sem: finite(s.log_msd_sem),
            deff: ctx.deff.as_ref().and_then(|d| finite(d.per_lag[i])),
        })
        .collect();

    let deff = ctx.deff.as_ref().map(|d| DeffSummary {
        window_gmean: finite(d.window_gmean),
        tmin: d.tmin,
        tmax: d.tmax,
    });

    Ok(TrajMsdV1 {
        tool: "kira-trajmsd".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        input_meta,
        lags,
        deff,
    })
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ctx.report)?;
    Ok(())
}

fn finite(value: f64) -> Option<f64> {
    if value.is_finite() { Some(value) } else { None }
}
