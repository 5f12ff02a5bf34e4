use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::math::msd;
use crate::pipeline::Stage;

pub struct Stage3Msd;

impl Stage3Msd {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Msd {
    fn name(&self) -> &'static str {
        "stage3_msd"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let max_lag = ctx.effective_max_lag();
        let assembly = ctx.assembly.as_ref().context("assembly missing")?;

        ctx.lag_stats = msd::compute(
            &assembly.rel_x,
            &assembly.rel_y,
            assembly.frames,
            assembly.surviving,
            max_lag,
        )?;

        info!(
            lags = ctx.lag_stats.len(),
            particles = assembly.surviving,
            "msd_computed"
        );
        Ok(())
    }
}
