//! ESLint bridge CLI
//!
//! Runs ESLint on files, finds the config governing a file, or serves the
//! bridge over LSP.

mod cli;
mod commands;
mod output;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::{run_lint, run_locate, run_lsp};
use crate::utils::load_settings;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries LSP traffic or lint output.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match &cli.command {
        Commands::Lint { files, format, fix } => {
            run_lint(load_settings(&cli.settings)?, files, *format, *fix)
        }
        Commands::Locate { file } => run_locate(load_settings(&cli.settings)?, file),
        Commands::Lsp => run_lsp().map(|_| false),
    }
}
