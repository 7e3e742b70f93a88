//! Command to show the working directory discovery would select.
//!
//! Unlike `init` and `show`, this command has no side effects: it runs
//! the discovery algorithm and prints the result without creating the
//! working directory or the settings store.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use prismq_config::discovery::discover;
use std::env;
use std::path::PathBuf;

/// Show the working directory discovery would select.
#[derive(Args)]
pub struct ShowWorkingDirCommand {
    /// Directory to start discovery from (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    start_dir: Option<PathBuf>,
}

impl ShowWorkingDirCommand {
    /// Execute the show-working-dir command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // An explicit settings file pins the working directory to its parent.
        if let Some(ref env_file) = global.env_file {
            let parent = env_file
                .parent()
                .map_or_else(|| PathBuf::from("/"), std::path::Path::to_path_buf);
            println!("{}", parent.display());
            return Ok(());
        }

        let start = match self.start_dir {
            Some(dir) => dir,
            None => env::current_dir()?,
        };

        let discovery = discover(&start);
        println!("{}", discovery.working_directory().display());

        Ok(())
    }
}
