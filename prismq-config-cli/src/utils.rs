//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands:
//! global option handling and configuration resolution.

use crate::error::CliError;
use prismq_config::{ConfigResolver, Settings};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Use an explicit settings file instead of discovery.
    pub env_file: Option<PathBuf>,

    /// Never prompt for missing values; use defaults instead.
    pub non_interactive: bool,
}

/// Build a resolver honoring the global options.
pub fn build_resolver(global: &GlobalOptions) -> ConfigResolver {
    let mut resolver = ConfigResolver::new();

    if let Some(ref env_file) = global.env_file {
        resolver = resolver.with_settings_file(env_file);
    }
    if global.non_interactive {
        resolver = resolver.non_interactive();
    }

    resolver
}

/// Resolve the configuration with the global options applied.
pub fn resolve_settings(global: &GlobalOptions) -> Result<Settings, CliError> {
    build_resolver(global).resolve().map_err(CliError::from)
}
