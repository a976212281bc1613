//! ddd-lint CLI tool.
//!
//! Usage:
//! ```bash
//! ddd-lint check [OPTIONS] [PATH]
//! ddd-lint taboos
//! ddd-lint init
//! ```
//!
//! Exit status: 0 when the layering holds, 1 when violations were found,
//! 2 when the run could not start.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod settings_file;

/// DDD layer isolation checker for PHP projects
#[derive(Parser)]
#[command(name = "ddd-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the project for taboo layer dependencies
    Check {
        /// Project root holding composer.json (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Exclude patterns, relative to the source directory (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// Print the table of forbidden layer dependencies
    Taboos,

    /// Initialize settings file
    Init {
        /// Overwrite existing settings
        #[arg(long)]
        force: bool,
    },
}

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-import compact format.
    Compact,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::new(if cli.verbose { "debug" } else { "warn" });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::from(2)
        }
    }
}

/// Dispatches the subcommand; `Ok(false)` means violations were found.
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Check {
            path,
            format,
            exclude,
        } => {
            let settings = settings_file::locate(&path, cli.config.as_deref());
            commands::check::run(&path, format, exclude, settings.as_deref())
        }
        Commands::Taboos => {
            commands::taboos::run();
            Ok(true)
        }
        Commands::Init { force } => commands::init::run(force).map(|()| true),
    }
}
