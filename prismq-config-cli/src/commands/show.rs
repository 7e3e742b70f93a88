//! Show command implementation.
//!
//! This module implements the `show` command which resolves the
//! configuration and prints it in the requested output format.

use crate::error::CliError;
use crate::utils::{resolve_settings, GlobalOptions};
use clap::Parser;
use prismq_config::OutputFormat;

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

/// Show the resolved configuration.
#[derive(Parser)]
#[command(about = "Show the resolved configuration")]
pub struct ShowCommand {
    /// Output format (human, json, or dotenv)
    #[arg(long, value_name = "FORMAT", default_value = "human", value_parser = parse_format)]
    format: OutputFormat,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = resolve_settings(global)?;

        let formatter = self.format.create_formatter();
        let output = formatter.format(&settings).map_err(CliError::from)?;
        println!("{output}");

        Ok(())
    }
}
