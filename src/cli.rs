use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "kira-trajmsd", version, about = "Trajectory MSD statistics CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(
        long,
        num_args = 1..,
        help = "Session trajectory CSV in recording order (repeatable), or a single directory combined with --name"
    )]
    pub input: Vec<PathBuf>,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, help = "Base name for Traj_{name}_{num} discovery in a directory input")]
    pub name: Option<String>,

    #[arg(long, default_value_t = 1, help = "Number of numbered session files to load")]
    pub videos: usize,

    #[arg(
        long,
        default_value_t = 1,
        help = "Minimum observed frame span for a particle to be kept"
    )]
    pub cutoff: usize,

    #[arg(long, default_value_t = 1.0, help = "Scale applied to x/y coordinates")]
    pub xy_scale: f64,

    #[arg(long, default_value_t = 1.0, help = "Scale applied to z coordinates")]
    pub z_scale: f64,

    #[arg(long, help = "Frames per second; enables Deff derivation")]
    pub fps: Option<f64>,

    #[arg(
        long,
        default_value_t = 0,
        help = "Number of time lags to compute (0 = full frame range)"
    )]
    pub max_lag: usize,

    #[arg(long, default_value_t = 0.0, help = "Deff window start in seconds")]
    pub tmin: f64,

    #[arg(long, default_value_t = f64::INFINITY, help = "Deff window end in seconds")]
    pub tmax: f64,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, default_value_t = 0, help = "Number of threads (0 = auto)")]
    pub threads: usize,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(
        long,
        num_args = 1..,
        help = "Session trajectory CSV (repeatable), or a single directory combined with --name"
    )]
    pub input: Vec<PathBuf>,

    #[arg(long, help = "Base name for Traj_{name}_{num} discovery in a directory input")]
    pub name: Option<String>,

    #[arg(long, default_value_t = 1, help = "Number of numbered session files to load")]
    pub videos: usize,

    #[arg(
        long,
        default_value_t = 1,
        help = "Minimum observed frame span for a particle to be kept"
    )]
    pub cutoff: usize,
}
