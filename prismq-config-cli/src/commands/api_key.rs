//! API key command implementation.
//!
//! This module implements the `api-key` command which prints the API key
//! for a named service. The lookup is read-only: a missing key is reported
//! as a semantic failure without touching the settings store.

use crate::error::CliError;
use crate::utils::{resolve_settings, GlobalOptions};
use clap::Parser;

/// Print the API key for a service.
#[derive(Parser)]
#[command(about = "Print the API key for a service")]
pub struct ApiKeyCommand {
    /// Service name (e.g. openai; looked up as OPENAI_API_KEY)
    #[arg(value_name = "SERVICE")]
    service: String,
}

impl ApiKeyCommand {
    /// Execute the api-key command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = resolve_settings(global)?;

        match settings.api_key(&self.service) {
            Some(key) => {
                println!("{key}");
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "no API key configured for service '{}'",
                self.service
            ))),
        }
    }
}
