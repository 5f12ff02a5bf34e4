use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::math::deff;
use crate::pipeline::Stage;

pub struct Stage4Deff;

impl Stage4Deff {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Deff {
    fn name(&self) -> &'static str {
        "stage4_deff"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let Some(fps) = ctx.fps else {
            info!("fps not provided; skipping Deff derivation");
            return Ok(());
        };

        let summary = deff::compute(&ctx.lag_stats, fps, ctx.tmin, ctx.tmax)?;
        info!(
            window_gmean = summary.window_gmean,
            tmin = summary.tmin,
            tmax = summary.tmax,
            "deff_computed"
        );
        ctx.deff = Some(summary);
        Ok(())
    }
}
