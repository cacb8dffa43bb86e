mod cli;
mod config;
mod engine;
mod error;
mod generator;
mod report;
mod scan;
mod types;

use crate::engine::RunSettings;
use crate::error::JudgingError;
use crate::types::config::JudgingConfig;
use crate::types::report::JudgingReport;
use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

struct Evaluation {
    report: JudgingReport,
    top: usize,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn evaluate(
    folder: &Path,
    config_path: Option<&Path>,
    min_reviews: Option<u32>,
) -> Result<Evaluation, JudgingError> {
    if !folder.exists() {
        return Err(JudgingError::PathNotFound(folder.display().to_string()));
    }

    let loaded = config::load_config(folder, config_path)?;
    if loaded.is_none() {
        info!(
            "no {} found in {}; using default weights",
            config::DEFAULT_CONFIG_FILE,
            folder.display()
        );
    }
    let cfg = loaded.unwrap_or_default();

    let settings = RunSettings {
        weights: cfg.weights(),
        roster: cfg.roster(),
        min_reviews: min_reviews.unwrap_or_else(|| cfg.min_reviews()),
    };
    let loaded_sheets = scan::discover(folder, &cfg.sheet_layout(), &settings.weights)?;
    let tally = engine::tally(&loaded_sheets.sheets, &settings);

    Ok(Evaluation {
        report: JudgingReport::new(
            settings.weights,
            loaded_sheets.sources,
            loaded_sheets.skipped,
            tally,
        ),
        top: cfg.top(),
    })
}

fn exit_code_for(report: &JudgingReport) -> i32 {
    if report.scored_teams() == 0 {
        exit_code::BLOCKING
    } else if report.has_issues() {
        exit_code::WARNINGS
    } else {
        exit_code::SUCCESS
    }
}

fn run(cli: cli::Cli) -> Result<i32, JudgingError> {
    match cli.command {
        cli::Commands::Rank(cmd) => {
            let evaluation = evaluate(&cmd.path, cmd.config.as_deref(), cmd.min_reviews)?;
            let top = cmd.top.unwrap_or(evaluation.top);
            let output_format = match cmd.format {
                cli::ReportFormat::Table => report::OutputFormat::Table,
                cli::ReportFormat::Md => report::OutputFormat::Md,
                cli::ReportFormat::Json => report::OutputFormat::Json,
            };
            let rendered = report::render(&evaluation.report, output_format, top)?;
            println!("{rendered}");

            if let Some(output) = &cmd.output {
                report::export::write_csv(output, &evaluation.report)?;
                eprintln!("detailed results saved to {}", output.display());
            }

            Ok(exit_code_for(&evaluation.report))
        }
        cli::Commands::Check(cmd) => {
            let evaluation = evaluate(&cmd.path, cmd.config.as_deref(), cmd.min_reviews)?;
            let report = &evaluation.report;

            if report.scored_teams() == 0 {
                println!("[BLOCKING] no team received a valid score");
            }
            for skipped in &report.skipped_sheets {
                println!("[SKIPPED] {skipped}");
            }
            for warning in &report.warnings {
                println!("[WARN] {warning}");
            }
            for shortfall in &report.review_shortfalls {
                println!("[REVIEWS] {shortfall}");
            }
            if report.scored_teams() > 0 && !report.has_issues() {
                println!(
                    "check: no issues ({} sheet(s), {} team(s))",
                    report.sheets.len(),
                    report.ranking.len()
                );
            }

            Ok(exit_code_for(report))
        }
        cli::Commands::Init(cmd) => {
            let path = generator::config_file::write_default_config(&cmd.path, cmd.force)?;
            println!("wrote {}", path.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
