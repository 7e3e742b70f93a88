//! Logging infrastructure for PrismQ modules.
//!
//! This module provides a simple stderr-based logging system driven by the
//! `LOG_LEVEL` setting.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Logging level for controlling output verbosity.
///
/// Levels are ordered from most verbose (Debug) to least verbose
/// (Critical); a logger configured at a level shows messages at that
/// level and above.
///
/// # Examples
///
/// ```
/// use prismq_config::LogLevel;
///
/// assert!(LogLevel::Debug < LogLevel::Info);
/// assert!(LogLevel::Warning < LogLevel::Critical);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Detailed diagnostics for development.
    Debug,
    /// Routine progress messages.
    Info,
    /// Something unexpected that did not stop the operation.
    Warning,
    /// An operation failed.
    Error,
    /// A failure the process cannot recover from.
    Critical,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Info
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"
    /// (case-insensitive). "WARN" is accepted as an alias for "WARNING".
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use prismq_config::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("INFO").unwrap(), LogLevel::Info);
    /// assert_eq!(LogLevel::parse("warning").unwrap(), LogLevel::Warning);
    /// assert!(LogLevel::parse("chatty").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" | "WARN" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A simple stderr-based logger.
///
/// The logger shows messages at or above its configured level.
///
/// # Examples
///
/// ```
/// use prismq_config::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Warning);
/// logger.error("shown");
/// logger.info("suppressed");
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    fn emit(&self, level: LogLevel, message: &str) {
        if level >= self.level {
            eprintln!("{level}: {message}");
        }
    }

    /// Logs a debug message.
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Debug, message);
    }

    /// Logs an informational message.
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Info, message);
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Warning, message);
    }

    /// Logs an error message.
    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Error, message);
    }

    /// Logs a critical message.
    pub fn critical(&self, message: &str) {
        self.emit(LogLevel::Critical, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

/// Initializes a logger from CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (`verbose` forces Debug, `quiet` forces Error)
/// 2. The `LOG_LEVEL` environment variable
/// 3. Default (Info)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use prismq_config::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Debug);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Debug);
    }
    if quiet {
        return Logger::new(LogLevel::Error);
    }

    if let Ok(env_value) = env::var("LOG_LEVEL") {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Info)
}
