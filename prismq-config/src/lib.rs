#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # prismq-config
//!
//! Shared configuration resolution for PrismQ module workspaces.
//!
//! Families of related modules checked out under an umbrella directory
//! named `PrismQ` share a single `.env` settings store, kept in a
//! `PrismQ_WD` sibling of the umbrella. This library discovers that store
//! (or falls back to the current directory), merges its values with
//! process environment variables, optionally prompts for missing required
//! values, and returns an immutable [`Settings`] snapshot with the
//! module's data directories already created.
//!
//! ## Core Types
//!
//! - [`ConfigResolver`]: builder-style entry point for resolution
//! - [`Settings`] and [`AppEnv`]: the resolved configuration snapshot
//! - [`store::SettingsStore`] and [`prompt::Prompter`]: injectable seams
//!   for the store backend and interactive prompting
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use prismq_config::ConfigResolver;
//!
//! let settings = ConfigResolver::new().non_interactive().resolve().unwrap();
//! println!(
//!     "{} running in {} (store: {})",
//!     settings.app_name,
//!     settings.app_env,
//!     settings.settings_path.display(),
//! );
//! ```

pub mod discovery;
pub mod error;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod resolver;
pub mod settings;
pub mod store;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, SettingsFormatter};
pub use resolver::ConfigResolver;
pub use settings::{AppEnv, Settings};
