use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use kira_trajmsd::cli::{Cli, Commands};
use kira_trajmsd::ctx::Ctx;
use kira_trajmsd::io;
use kira_trajmsd::pipeline::Pipeline;
use kira_trajmsd::pipeline::stage0_scaffold::Stage0Scaffold;
use kira_trajmsd::pipeline::stage1_sessions::Stage1Sessions;
use kira_trajmsd::pipeline::stage2_assemble::Stage2Assemble;
use kira_trajmsd::pipeline::stage3_msd::Stage3Msd;
use kira_trajmsd::pipeline::stage4_deff::Stage4Deff;
use kira_trajmsd::pipeline::stage5_output::Stage5Output;
use kira_trajmsd::traj::UnitConversion;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let conversion = UnitConversion {
                xy_scale: args.xy_scale,
                z_scale: args.z_scale,
            };
            let mut ctx = Ctx::new(
                args.input,
                args.out,
                args.cutoff,
                conversion,
                env!("CARGO_PKG_VERSION"),
            );
            ctx.name = args.name;
            ctx.videos = args.videos;
            ctx.fps = args.fps;
            ctx.max_lag = args.max_lag;
            ctx.tmin = args.tmin;
            ctx.tmax = args.tmax;
            ctx.write_json = args.json;
            ctx.write_tsv = args.tsv;
            ctx.threads = args.threads;

            let pipeline = Pipeline::new(vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage1Sessions::new()),
                Box::new(Stage2Assemble::new()),
                Box::new(Stage3Msd::new()),
                Box::new(Stage4Deff::new()),
                Box::new(Stage5Output::new()),
            ]);
            pipeline.run(&mut ctx)?;

            print_summary(&ctx)?;
        }
        Commands::Validate(args) => {
            let mut ctx = Ctx::new(
                args.input,
                PathBuf::from("."),
                args.cutoff,
                UnitConversion::default(),
                env!("CARGO_PKG_VERSION"),
            );
            ctx.name = args.name;
            ctx.videos = args.videos;

            let pipeline = Pipeline::new(vec![
                Box::new(Stage1Sessions::new()),
                Box::new(Stage2Assemble::new()),
            ]);
            pipeline.run(&mut ctx)?;

            print_validate_summary(&ctx);
        }
    }

    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) {
    println!("kira-trajmsd validate ok");
    println!("sessions: {}", ctx.input_meta.sessions.unwrap_or(0));
    println!("records: {}", ctx.input_meta.records.unwrap_or(0));
    if let Some(assembly) = &ctx.assembly {
        println!("particles: {}", assembly.surviving + assembly.dropped);
        println!("surviving: {}", assembly.surviving);
        println!("frames: {}", assembly.frames);
    }
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
