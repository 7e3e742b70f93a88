//! Main entry point for the prismq-config CLI.
//!
//! This is the command-line interface for PrismQ module configuration.
//! It provides commands for inspecting and initializing the shared
//! settings store:
//! - `init`: Initialize the working directory and settings store
//! - `show`: Show the resolved configuration
//! - `get`: Print a single resolved setting
//! - `api-key`: Print the API key for a service

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = prismq_config::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        env_file: cli.env_file,
        non_interactive: cli.non_interactive,
    };

    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Get(cmd) => cmd.execute(&global),
        cli::Command::ApiKey(cmd) => cmd.execute(&global),
        cli::Command::ShowWorkingDir(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
