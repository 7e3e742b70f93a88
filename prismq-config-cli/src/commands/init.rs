//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the working directory and settings store. Resolution performs the same
//! initialization implicitly; this command exists to do it up front and
//! report what was created.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::Parser;
use std::path::PathBuf;

/// Initialize the working directory and settings store.
#[derive(Parser)]
#[command(about = "Initialize the working directory and settings store")]
pub struct InitCommand {
    /// Directory to start discovery from (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    start_dir: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut resolver = build_resolver(global);
        if let Some(start_dir) = self.start_dir {
            resolver = resolver.with_start_dir(start_dir);
        }

        let settings = resolver.resolve()?;

        println!(
            "Initialized PrismQ configuration in: {}",
            settings.working_directory.display()
        );
        println!("  - Settings store: {}", settings.settings_path.display());
        println!("  - Input directory: {}", settings.input_dir.display());
        println!("  - Output directory: {}", settings.output_dir.display());
        println!("  - Cache directory: {}", settings.cache_dir.display());

        Ok(())
    }
}
