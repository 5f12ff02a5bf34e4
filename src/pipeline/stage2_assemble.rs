use anyhow::Result;
use tracing::warn;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::traj::Assembler;

pub struct Stage2Assemble;

impl Stage2Assemble {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Assemble {
    fn name(&self) -> &'static str {
        "stage2_assemble"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let assembler = Assembler::new(ctx.cutoff, ctx.conversion, ctx.threads);
        let assembly = assembler.assemble(&ctx.sessions)?;

        if assembly.surviving == 0 {
            warn!(cutoff = ctx.cutoff, "no particles survived the cutoff");
            ctx.warnings.push(format!(
                "no particles survived the cutoff of {} frames",
                ctx.cutoff
            ));
        }

        ctx.assembly = Some(assembly);
        Ok(())
    }
}
