use anyhow::{Context, Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::input;
use crate::io::traj_csv;
use crate::pipeline::Stage;

pub struct Stage1Sessions;

impl Stage1Sessions {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Sessions {
    fn name(&self) -> &'static str {
        "stage1_sessions"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        ctx.session_files = resolve_inputs(ctx)?;

        let mut sessions = Vec::with_capacity(ctx.session_files.len());
        let mut records = 0usize;
        for path in &ctx.session_files {
            let session = traj_csv::read_session(path)
                .with_context(|| format!("failed to load session {}", path.display()))?;
            records += session.records.len();
            sessions.push(session);
        }

        info!(
            sessions = sessions.len(),
            records,
            "sessions_loaded"
        );

        ctx.input_meta.sessions = Some(sessions.len() as u64);
        ctx.input_meta.records = Some(records as u64);
        ctx.sessions = sessions;
        Ok(())
    }
}

fn resolve_inputs(ctx: &Ctx) -> Result<Vec<std::path::PathBuf>> {
    if ctx.inputs.is_empty() {
        bail!("at least one --input is required");
    }
    if ctx.inputs.len() == 1 && ctx.inputs[0].is_dir() {
        let name = ctx
            .name
            .as_deref()
            .context("directory input requires --name")?;
        return input::resolve_session_files(&ctx.inputs[0], name, ctx.videos);
    }
    for path in &ctx.inputs {
        if path.is_dir() {
            bail!(
                "{} is a directory; pass one directory with --name or individual files",
                path.display()
            );
        }
    }
    Ok(ctx.inputs.clone())
}
