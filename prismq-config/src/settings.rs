//! Settings schema for PrismQ modules.
//!
//! This module defines the recognized settings, their defaults, and the
//! immutable [`Settings`] snapshot produced by resolution.

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Key under which the resolver records the owning directory in the store.
pub const WORKING_DIRECTORY_KEY: &str = "WORKING_DIRECTORY";

/// The application environment a module runs in.
///
/// # Examples
///
/// ```
/// use prismq_config::AppEnv;
///
/// assert_eq!(AppEnv::parse("production").unwrap(), AppEnv::Production);
/// assert_eq!(AppEnv::default(), AppEnv::Development);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    /// Local development (the default).
    Development,
    /// Production deployment.
    Production,
    /// Automated test runs.
    Testing,
}

impl Default for AppEnv {
    fn default() -> Self {
        Self::Development
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

impl AppEnv {
    /// Parses an application environment from a string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not one of
    /// `development`/`production`/`testing`.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            "testing" => Ok(Self::Testing),
            _ => Err(format!("invalid application environment: {s}")),
        }
    }
}

/// Parse a truthy string value.
///
/// `true`, `1`, and `yes` (case-insensitive) parse to true; anything else,
/// including the empty string, parses to false.
///
/// # Examples
///
/// ```
/// use prismq_config::settings::parse_bool;
///
/// assert!(parse_bool("TRUE"));
/// assert!(parse_bool("1"));
/// assert!(!parse_bool("off"));
/// assert!(!parse_bool(""));
/// ```
#[must_use]
pub fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "1" | "yes")
}

/// Description of one recognized setting.
///
/// The resolver walks [`KNOWN_SETTINGS`] and resolves each entry with the
/// documented precedence; prompt-eligible entries may additionally be asked
/// for interactively when missing everywhere.
#[derive(Debug, Clone, Copy)]
pub struct SettingSpec {
    /// Environment/store key, e.g. `APP_NAME`.
    pub key: &'static str,
    /// Human-readable description used when prompting.
    pub description: &'static str,
    /// Built-in default, used when the key is set nowhere.
    pub default: &'static str,
    /// Whether the resolver may prompt for this setting interactively.
    pub prompt: bool,
}

/// All settings the resolver recognizes, with their defaults.
pub const KNOWN_SETTINGS: &[SettingSpec] = &[
    SettingSpec {
        key: "APP_NAME",
        description: "Application name for this module",
        default: "PrismQ.ModuleName",
        prompt: true,
    },
    SettingSpec {
        key: "APP_ENV",
        description: "Application environment (development/production/testing)",
        default: "development",
        prompt: false,
    },
    SettingSpec {
        key: "DEBUG",
        description: "Enable debug mode",
        default: "true",
        prompt: false,
    },
    SettingSpec {
        key: "LOG_LEVEL",
        description: "Log level (DEBUG/INFO/WARNING/ERROR/CRITICAL)",
        default: "INFO",
        prompt: false,
    },
    SettingSpec {
        key: "PYTHON_EXECUTABLE",
        description: "Python executable used to run module scripts",
        default: "python",
        prompt: true,
    },
    SettingSpec {
        key: "INPUT_DIR",
        description: "Directory for module input data",
        default: "./input",
        prompt: false,
    },
    SettingSpec {
        key: "OUTPUT_DIR",
        description: "Directory for module output data",
        default: "./output",
        prompt: false,
    },
    SettingSpec {
        key: "CACHE_DIR",
        description: "Directory for cached intermediate data",
        default: "./cache",
        prompt: false,
    },
];

/// Look up the spec for a recognized key.
#[must_use]
pub fn spec_for(key: &str) -> Option<&'static SettingSpec> {
    KNOWN_SETTINGS.iter().find(|s| s.key == key)
}

/// An immutable snapshot of resolved configuration.
///
/// Produced by [`ConfigResolver::resolve`](crate::ConfigResolver::resolve).
/// All path-valued fields are absolute and their directories exist by the
/// time the snapshot is returned.
///
/// # Examples
///
/// ```no_run
/// use prismq_config::ConfigResolver;
///
/// let settings = ConfigResolver::new().non_interactive().resolve().unwrap();
/// println!("{} ({})", settings.app_name, settings.app_env);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    /// Directory that owns the settings store.
    pub working_directory: PathBuf,
    /// Absolute path to the settings store file.
    pub settings_path: PathBuf,
    /// Application name.
    pub app_name: String,
    /// Application environment.
    pub app_env: AppEnv,
    /// Debug mode flag.
    pub debug: bool,
    /// Log level for module output.
    pub log_level: LogLevel,
    /// Python executable used to run module scripts.
    pub python_executable: String,
    /// Directory for module input data.
    pub input_dir: PathBuf,
    /// Directory for module output data.
    pub output_dir: PathBuf,
    /// Directory for cached intermediate data.
    pub cache_dir: PathBuf,
    /// Merged key/value view of the settings store at resolution time.
    #[serde(skip)]
    pub(crate) values: HashMap<String, String>,
}

impl Settings {
    /// Look up the API key for a named service.
    ///
    /// The key is formed by uppercasing the service name and appending
    /// `_API_KEY` (e.g. `openai` becomes `OPENAI_API_KEY`). The process
    /// environment takes precedence over the settings store. Returns
    /// `None` when the key is set nowhere; this never prompts and never
    /// writes to the store.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use prismq_config::ConfigResolver;
    ///
    /// let settings = ConfigResolver::new().non_interactive().resolve().unwrap();
    /// if settings.api_key("openai").is_none() {
    ///     eprintln!("OPENAI_API_KEY is not configured");
    /// }
    /// ```
    #[must_use]
    pub fn api_key(&self, service: &str) -> Option<String> {
        let key = format!("{}_API_KEY", service.to_uppercase());
        if let Ok(value) = env::var(&key) {
            return Some(value);
        }
        self.values.get(&key).cloned()
    }

    /// Look up a resolved value by its setting key.
    ///
    /// Recognizes the keys in [`KNOWN_SETTINGS`] plus
    /// [`WORKING_DIRECTORY_KEY`]. Returns `None` for unrecognized keys.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "APP_NAME" => Some(self.app_name.clone()),
            "APP_ENV" => Some(self.app_env.to_string()),
            "DEBUG" => Some(self.debug.to_string()),
            "LOG_LEVEL" => Some(self.log_level.to_string()),
            "PYTHON_EXECUTABLE" => Some(self.python_executable.clone()),
            "INPUT_DIR" => Some(self.input_dir.display().to_string()),
            "OUTPUT_DIR" => Some(self.output_dir.display().to_string()),
            "CACHE_DIR" => Some(self.cache_dir.display().to_string()),
            WORKING_DIRECTORY_KEY => Some(self.working_directory.display().to_string()),
            _ => None,
        }
    }
}
