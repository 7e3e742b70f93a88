//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Initialize the working directory and settings store
//! - `show`: Show the resolved configuration
//! - `get`: Print a single resolved setting
//! - `api_key`: Print the API key for a service
//! - `show_working_dir`: Show the working directory discovery would select
//! - `completions`: Generate shell completion scripts

pub mod api_key;
pub mod completions;
pub mod get;
pub mod init;
pub mod show;
pub mod show_working_dir;

pub use api_key::ApiKeyCommand;
pub use completions::CompletionsCommand;
pub use get::GetCommand;
pub use init::InitCommand;
pub use show::ShowCommand;
pub use show_working_dir::ShowWorkingDirCommand;
