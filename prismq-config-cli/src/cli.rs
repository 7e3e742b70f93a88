//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    ApiKeyCommand, CompletionsCommand, GetCommand, InitCommand, ShowCommand, ShowWorkingDirCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for PrismQ module configuration.
#[derive(Parser)]
#[command(name = "prismq-config")]
#[command(version, about = "Inspect and initialize PrismQ module configuration", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Use an explicit settings file instead of discovery
    #[arg(long, value_name = "PATH", global = true, env = "PRISMQ_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// Never prompt for missing values; use defaults instead
    #[arg(long, global = true)]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the working directory and settings store
    Init(InitCommand),

    /// Show the resolved configuration
    Show(ShowCommand),

    /// Print a single resolved setting
    Get(GetCommand),

    /// Print the API key for a service
    ApiKey(ApiKeyCommand),

    /// Show the working directory discovery would select
    ShowWorkingDir(ShowWorkingDirCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
