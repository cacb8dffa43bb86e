use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "judging",
    version,
    about = "Hackathon judging score validation and ranking CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate, weight and rank every score sheet in a folder
    Rank(RankCommand),
    /// Report rejected cells and review shortfalls without ranking
    Check(CheckCommand),
    /// Write a default judging.toml into a folder
    Init(InitCommand),
}

#[derive(Args)]
pub struct RankCommand {
    /// Folder containing one CSV sheet per judge
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: ReportFormat,
    /// Number of teams to display (0 shows all)
    #[arg(short, long)]
    pub top: Option<usize>,
    /// Minimum number of valid reviews expected per team
    #[arg(short, long)]
    pub min_reviews: Option<u32>,
    /// Save the full ranking as CSV
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Config file used instead of <PATH>/judging.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckCommand {
    pub path: PathBuf,
    #[arg(short, long)]
    pub min_reviews: Option<u32>,
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct InitCommand {
    pub path: PathBuf,
    /// Overwrite an existing judging.toml
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Table,
    Md,
    Json,
}
