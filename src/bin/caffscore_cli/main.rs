// ABOUTME: CaffScore CLI - computes focus and crash-risk scores from a JSON snapshot
// ABOUTME: Prints the full result or just the widget payload as pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Focus score for the user in snapshot.json, right now
//! caffscore-cli focus --input snapshot.json
//!
//! # Crash risk at a fixed instant, widget payload only
//! caffscore-cli crash --input snapshot.json --now 2025-03-01T15:30:00Z --widget
//!
//! # Show the effective scoring configuration
//! caffscore-cli config
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use caffscore::config::EngineConfig;
use caffscore_intelligence::ScoreKind;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "caffscore-cli",
    about = "CaffScore focus and crash-risk calculator",
    long_about = "Computes personalized caffeine focus and crash-risk scores from a JSON snapshot of a user's profile, intakes, and sleep."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute the focus (CaffScore) score
    Focus(ScoreArgs),

    /// Compute the crash-risk score
    Crash(ScoreArgs),

    /// Print the effective scoring configuration
    Config,
}

#[derive(Args)]
struct ScoreArgs {
    /// Snapshot file with `profile`, `intakes`, and `sleep`
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Evaluation instant (RFC 3339), defaults to now
    #[arg(long)]
    now: Option<DateTime<Utc>>,

    /// Print only the widget payload
    #[arg(long)]
    widget: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = EngineConfig::from_env()?;
    if cli.verbose {
        "debug".clone_into(&mut config.logging.level);
    }
    config.logging.init()?;
    config.log_summary();

    match cli.command {
        Command::Focus(args) => run_score(&config, ScoreKind::Focus, &args).await,
        Command::Crash(args) => run_score(&config, ScoreKind::CrashRisk, &args).await,
        Command::Config => helpers::display::print_json(&config.scoring),
    }
}

async fn run_score(config: &EngineConfig, kind: ScoreKind, args: &ScoreArgs) -> Result<()> {
    debug!(input = %args.input.display(), score.kind = %kind, "Scoring snapshot");
    commands::score::run(config, kind, &args.input, args.now, args.widget).await
}
