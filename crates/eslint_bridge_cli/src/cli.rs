//! CLI argument definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// ESLint bridge - run ESLint for editors and scripts
#[derive(Parser)]
#[command(name = "eslint-bridge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Flags describing how ESLint is found and run.
#[derive(Args, Debug, Default)]
pub struct SettingsArgs {
    /// Settings file (JSON or JSONC)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// ESLint executable [default: eslint]
    #[arg(long, global = true)]
    pub eslint_path: Option<PathBuf>,

    /// Shell used to launch ESLint [default: /bin/sh]
    #[arg(long, global = true)]
    pub shell_path: Option<PathBuf>,

    /// Extra config file name to search for (repeatable)
    #[arg(long = "config-name", global = true)]
    pub config_names: Vec<String>,

    /// ESLint timeout in milliseconds
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Maximum number of parent directories searched for a config
    #[arg(long, global = true)]
    pub max_depth: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint files
    Lint {
        /// Files to lint
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write ESLint's fixes back to the files
        #[arg(long)]
        fix: bool,
    },

    /// Print the ESLint config governing a file
    Locate {
        /// File whose config to find
        file: PathBuf,
    },

    /// Start the LSP server
    Lsp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
