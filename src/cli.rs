use clap::{Parser, Subcommand};
use rigscore::application::dto::OutputFormat;
use std::path::PathBuf;

/// Estimate how well a PC build runs your games
#[derive(Parser, Debug)]
#[command(name = "rigscore")]
#[command(version)]
#[command(
    about = "Estimate whether a PC build can run your games, at what quality and frame rate, and spot CPU/GPU/RAM bottlenecks",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (defaults to ./rigscore.config.yml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Full system report: score, bottleneck and per-game estimates
    Analyze(CatalogArgs),
    /// Check every catalog game against every rig component (exits 1 when incompatible)
    Compat(CatalogArgs),
    /// Bottleneck report for the rig alone
    Bottleneck(RigArgs),
}

#[derive(clap::Args, Debug)]
pub struct RigArgs {
    /// Rig description (YAML, JSON or TOML)
    #[arg(short, long, value_name = "FILE")]
    pub rig: PathBuf,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(clap::Args, Debug)]
pub struct CatalogArgs {
    /// Rig description (YAML, JSON or TOML)
    #[arg(short, long, value_name = "FILE")]
    pub rig: PathBuf,

    /// Game catalog (YAML, JSON or TOML)
    #[arg(short, long, value_name = "FILE")]
    pub catalog: PathBuf,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// Output format: json or markdown [default: markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Parses the command line; clap exits with code 2 on usage errors
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
