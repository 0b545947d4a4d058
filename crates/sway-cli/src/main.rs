//! swayctl - motion trace tooling
//!
//! Replays recorded or synthetic sensor traces through the sway motion
//! pipeline and reports how the character would have been driven.

#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod config;
mod error;
mod output;
mod replay;
mod trace;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ConfigFormat;
use crate::error::CliError;
use crate::trace::GenerateOptions;

#[derive(Parser)]
#[command(name = "swayctl")]
#[command(about = "Replay and generate motion sensor traces for the sway pipeline")]
#[command(version)]
#[command(long_about = "
swayctl feeds JSON-lines sensor traces (acceleration, orientation and shake
events) through the same motion classifier and force synthesis a host app
runs live, and summarizes transitions, excitations and forces.

Use --json for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON-lines trace and summarize the result
    Replay {
        /// Trace file, one event per line
        trace: PathBuf,

        /// Config overrides (.json, .yaml or .yml)
        #[arg(short, long, env = "SWAYCTL_CONFIG")]
        config: Option<PathBuf>,

        /// Seed for excitation jitter
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Include every force change in the output
        #[arg(long)]
        timeline: bool,
    },

    /// Write a synthetic parked, driving, parked trace
    Generate {
        /// Parked time before and after the drive
        #[arg(long, default_value_t = 2000)]
        idle_ms: u64,

        /// Driving time
        #[arg(long, default_value_t = 5000)]
        drive_ms: u64,

        /// Acceleration sample rate
        #[arg(long, default_value_t = 20)]
        rate_hz: u32,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config {
        /// Config overrides (.json, .yaml or .yml)
        #[arg(short, long, env = "SWAYCTL_CONFIG")]
        config: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = ConfigFormat::Json)]
        format: ConfigFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("swayctl={log_level},sway_motion={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            std::process::exit(exit_code);
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Replay {
            trace,
            config,
            seed,
            timeline,
        } => commands::replay::execute(trace, config.as_deref(), *seed, *timeline, cli.json),
        Commands::Generate {
            idle_ms,
            drive_ms,
            rate_hz,
            seed,
            output,
        } => {
            let options = GenerateOptions {
                idle_ms: *idle_ms,
                drive_ms: *drive_ms,
                rate_hz: *rate_hz,
                seed: *seed,
            };
            commands::generate::execute(&options, output.as_deref(), cli.json)
        }
        Commands::Config { config, format } => {
            let format = if cli.json { ConfigFormat::Json } else { *format };
            commands::config::execute(config.as_deref(), format)
        }
    }
}
