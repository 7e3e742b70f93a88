//! Get command implementation.
//!
//! This module implements the `get` command which prints a single
//! resolved setting by key, suitable for use in shell scripts.

use crate::error::CliError;
use crate::utils::{resolve_settings, GlobalOptions};
use clap::Parser;

/// Print a single resolved setting.
#[derive(Parser)]
#[command(about = "Print a single resolved setting")]
pub struct GetCommand {
    /// Setting key to look up (e.g. APP_NAME, LOG_LEVEL, OUTPUT_DIR)
    #[arg(value_name = "KEY")]
    key: String,
}

impl GetCommand {
    /// Execute the get command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = resolve_settings(global)?;

        match settings.get(&self.key) {
            Some(value) => {
                println!("{value}");
                Ok(())
            }
            None => Err(CliError::InvalidArguments(format!(
                "unknown setting key: {}",
                self.key
            ))),
        }
    }
}
