//! Output formatting for resolved settings.
//!
//! This module renders a [`Settings`] snapshot in the formats the CLI
//! exposes: human-readable, JSON, and dotenv (`KEY=VALUE` lines suitable
//! for sourcing or for seeding another store).

use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::settings::{Settings, KNOWN_SETTINGS, WORKING_DIRECTORY_KEY};

/// Trait for formatting a resolved settings snapshot.
pub trait SettingsFormatter {
    /// Format the snapshot into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be serialized.
    fn format(&self, settings: &Settings) -> Result<String>;
}

/// Available output formats for resolved settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable format (the default).
    #[default]
    Human,
    /// JSON object.
    Json,
    /// Dotenv `KEY=VALUE` lines.
    Dotenv,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn SettingsFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Dotenv => Box::new(DotenvFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Dotenv => write!(f, "dotenv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "dotenv" => Ok(Self::Dotenv),
            _ => Err(format!("invalid output format: {s} (expected human/json/dotenv)")),
        }
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl SettingsFormatter for HumanFormatter {
    fn format(&self, settings: &Settings) -> Result<String> {
        let lines = vec![
            format!("Working directory: {}", settings.working_directory.display()),
            format!("Settings store:    {}", settings.settings_path.display()),
            format!("Application:       {} ({})", settings.app_name, settings.app_env),
            format!("Debug:             {}", settings.debug),
            format!("Log level:         {}", settings.log_level),
            format!("Python executable: {}", settings.python_executable),
            format!("Input directory:   {}", settings.input_dir.display()),
            format!("Output directory:  {}", settings.output_dir.display()),
            format!("Cache directory:   {}", settings.cache_dir.display()),
        ];
        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl SettingsFormatter for JsonFormatter {
    fn format(&self, settings: &Settings) -> Result<String> {
        Ok(serde_json::to_string_pretty(settings)?)
    }
}

/// Formatter for dotenv output.
///
/// Emits one `KEY=VALUE` line per recognized setting, preceded by the
/// working directory, in the table's order.
pub struct DotenvFormatter;

impl SettingsFormatter for DotenvFormatter {
    fn format(&self, settings: &Settings) -> Result<String> {
        let mut lines = Vec::with_capacity(KNOWN_SETTINGS.len() + 1);

        if let Some(value) = settings.get(WORKING_DIRECTORY_KEY) {
            lines.push(format!("{WORKING_DIRECTORY_KEY}={value}"));
        }

        for spec in KNOWN_SETTINGS {
            if let Some(value) = settings.get(spec.key) {
                lines.push(format!("{}={}", spec.key, value));
            }
        }

        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use crate::settings::AppEnv;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn sample_settings() -> Settings {
        Settings {
            working_directory: PathBuf::from("/wd"),
            settings_path: PathBuf::from("/wd/.env"),
            app_name: "PrismQ.Demo".to_string(),
            app_env: AppEnv::Testing,
            debug: true,
            log_level: LogLevel::Warning,
            python_executable: "python3".to_string(),
            input_dir: PathBuf::from("/wd/input"),
            output_dir: PathBuf::from("/wd/output"),
            cache_dir: PathBuf::from("/wd/cache"),
            values: HashMap::new(),
        }
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("human".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("dotenv".parse::<OutputFormat>().unwrap(), OutputFormat::Dotenv);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_human_formatter() {
        let output = HumanFormatter.format(&sample_settings()).unwrap();
        assert!(output.contains("Working directory: /wd"));
        assert!(output.contains("PrismQ.Demo"));
        assert!(output.contains("testing"));
        assert!(output.contains("WARNING"));
    }

    #[test]
    fn test_json_formatter_is_valid_json() {
        let output = JsonFormatter.format(&sample_settings()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["app_name"], "PrismQ.Demo");
        assert_eq!(parsed["app_env"], "testing");
        assert_eq!(parsed["log_level"], "WARNING");
        assert_eq!(parsed["debug"], true);
    }

    #[test]
    fn test_dotenv_formatter() {
        let output = DotenvFormatter.format(&sample_settings()).unwrap();
        assert!(output.contains("WORKING_DIRECTORY=/wd"));
        assert!(output.contains("APP_NAME=PrismQ.Demo"));
        assert!(output.contains("APP_ENV=testing"));
        assert!(output.contains("DEBUG=true"));
        assert!(output.contains("LOG_LEVEL=WARNING"));
        assert!(output.contains("INPUT_DIR=/wd/input"));
    }

    #[test]
    fn test_dotenv_output_reparses() {
        let output = DotenvFormatter.format(&sample_settings()).unwrap();
        let values = crate::store::parse_env_format(&output);
        assert_eq!(values["APP_NAME"], "PrismQ.Demo");
        assert_eq!(values["CACHE_DIR"], "/wd/cache");
    }
}
