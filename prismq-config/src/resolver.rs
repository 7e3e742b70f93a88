//! Configuration resolution.
//!
//! This module ties the pieces together: working-directory discovery,
//! settings-store loading, environment overrides, interactive prompting,
//! and the directory side effects, producing an immutable [`Settings`]
//! snapshot.
//!
//! # Resolution Precedence
//!
//! Each recognized setting is resolved with the following precedence
//! (highest to lowest):
//!
//! 1. Process environment variable under the exact key
//! 2. Value in the settings store file
//! 3. Interactive prompt (prompt-eligible keys only, answer persisted)
//! 4. Built-in default
//!
//! # Examples
//!
//! Resolution with discovery and defaults:
//!
//! ```no_run
//! use prismq_config::ConfigResolver;
//!
//! let settings = ConfigResolver::new().resolve().unwrap();
//! println!("input data lives in {}", settings.input_dir.display());
//! ```
//!
//! Resolution against an explicit settings file, without prompting:
//!
//! ```no_run
//! use prismq_config::ConfigResolver;
//! use std::path::Path;
//!
//! let settings = ConfigResolver::new()
//!     .with_settings_file(Path::new("/workspace/.env"))
//!     .non_interactive()
//!     .resolve()
//!     .unwrap();
//! assert_eq!(settings.working_directory, Path::new("/workspace"));
//! ```

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::discovery::{self, Discovery};
use crate::error::{Error, Result};
use crate::logging::LogLevel;
use crate::prompt::{NoPrompt, Prompter, StdinPrompter};
use crate::settings::{
    parse_bool, AppEnv, Settings, KNOWN_SETTINGS, WORKING_DIRECTORY_KEY,
};
use crate::store::{EnvFileStore, SettingsStore, SETTINGS_FILE_NAME};

/// Builder-style resolver producing a [`Settings`] snapshot.
///
/// By default the working directory is discovered from the process current
/// directory, the settings store is the `.env` file it owns, and missing
/// prompt-eligible values are asked for on the controlling terminal.
pub struct ConfigResolver {
    settings_file: Option<PathBuf>,
    start_dir: Option<PathBuf>,
    interactive: bool,
    prompter: Box<dyn Prompter>,
    store: Option<Box<dyn SettingsStore>>,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver {
    /// Creates a resolver with default behaviour (discovery from the
    /// current directory, interactive prompting enabled).
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings_file: None,
            start_dir: None,
            interactive: true,
            prompter: Box::new(StdinPrompter::new()),
            store: None,
        }
    }

    /// Use an explicit settings file instead of running discovery.
    ///
    /// The file's parent directory becomes the working directory
    /// unconditionally.
    #[must_use]
    pub fn with_settings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_file = Some(path.into());
        self
    }

    /// Start discovery from `dir` instead of the process current directory.
    #[must_use]
    pub fn with_start_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }

    /// Disable interactive prompting; missing values fall back to their
    /// defaults.
    #[must_use]
    pub fn non_interactive(mut self) -> Self {
        self.interactive = false;
        self.prompter = Box::new(NoPrompt);
        self
    }

    /// Replace the prompter used for missing prompt-eligible values.
    #[must_use]
    pub fn with_prompter(mut self, prompter: impl Prompter + 'static) -> Self {
        self.prompter = Box::new(prompter);
        self
    }

    /// Replace the settings store backend.
    ///
    /// Intended for tests and embedders; the injected store is used as-is
    /// and no store file is created on disk.
    #[must_use]
    pub fn with_store(mut self, store: impl SettingsStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Resolve the configuration.
    ///
    /// Side effects: ensures the working directory and settings store file
    /// exist (seeding a new file with `WORKING_DIRECTORY`), persists
    /// prompted answers, and creates the input/output/cache directories.
    /// All side effects are idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Workspace`] if the working directory, store file,
    /// or a managed data directory cannot be created, and [`Error::Store`]
    /// if the store cannot be read or appended. Absent values are never an
    /// error.
    pub fn resolve(self) -> Result<Settings> {
        let located = self.locate()?;
        let working_directory = located.working_directory;
        let settings_path = located.settings_path;

        let mut store: Box<dyn SettingsStore> = match self.store {
            Some(store) => store,
            None => {
                // The shared sibling and explicit-file cases may point at a
                // directory that does not exist yet.
                fs::create_dir_all(&working_directory).map_err(|source| Error::Workspace {
                    path: working_directory.clone(),
                    source,
                })?;

                let file_store = EnvFileStore::new(&settings_path);
                file_store.create_if_missing(Some((
                    WORKING_DIRECTORY_KEY,
                    &working_directory.display().to_string(),
                )))?;
                Box::new(file_store)
            }
        };

        let mut values = store.load()?;

        // Keep the recorded owner current; appended entries win over
        // earlier occurrences when the file is next parsed.
        let wd_string = working_directory.display().to_string();
        if values.get(WORKING_DIRECTORY_KEY) != Some(&wd_string) {
            store.append(WORKING_DIRECTORY_KEY, &wd_string)?;
            values.insert(WORKING_DIRECTORY_KEY.to_string(), wd_string);
        }

        let mut resolved: HashMap<&'static str, String> = HashMap::new();
        for spec in KNOWN_SETTINGS {
            let value = if let Ok(from_env) = env::var(spec.key) {
                from_env
            } else if let Some(from_store) = values.get(spec.key) {
                from_store.clone()
            } else if spec.prompt && self.interactive {
                match self.prompter.ask(spec.description, spec.default) {
                    Some(answer) => {
                        store.append(spec.key, &answer)?;
                        values.insert(spec.key.to_string(), answer.clone());
                        answer
                    }
                    None => spec.default.to_string(),
                }
            } else {
                spec.default.to_string()
            };
            resolved.insert(spec.key, value);
        }

        let app_env = AppEnv::parse(&resolved["APP_ENV"]).unwrap_or_else(|reason| {
            log::warn!("{reason}; falling back to {}", AppEnv::default());
            AppEnv::default()
        });
        let log_level = LogLevel::parse(&resolved["LOG_LEVEL"]).unwrap_or_else(|reason| {
            log::warn!("{reason}; falling back to {}", LogLevel::default());
            LogLevel::default()
        });

        let input_dir = Self::ensure_data_dir(&working_directory, &resolved["INPUT_DIR"])?;
        let output_dir = Self::ensure_data_dir(&working_directory, &resolved["OUTPUT_DIR"])?;
        let cache_dir = Self::ensure_data_dir(&working_directory, &resolved["CACHE_DIR"])?;

        log::debug!(
            "configuration resolved from {} (working directory {})",
            settings_path.display(),
            working_directory.display()
        );

        Ok(Settings {
            working_directory,
            settings_path,
            app_name: resolved.remove("APP_NAME").unwrap_or_default(),
            app_env,
            debug: parse_bool(&resolved["DEBUG"]),
            log_level,
            python_executable: resolved.remove("PYTHON_EXECUTABLE").unwrap_or_default(),
            input_dir,
            output_dir,
            cache_dir,
            values,
        })
    }

    /// Determine the working directory and settings path.
    fn locate(&self) -> Result<Located> {
        if let Some(ref file) = self.settings_file {
            let settings_path = absolutize(file)?;
            let working_directory = settings_path
                .parent()
                .map_or_else(|| PathBuf::from("/"), Path::to_path_buf);
            return Ok(Located {
                working_directory,
                settings_path,
            });
        }

        let start = match self.start_dir {
            Some(ref dir) => absolutize(dir)?,
            None => env::current_dir()?,
        };

        let working_directory = match discovery::discover(&start) {
            Discovery::Shared {
                working_directory, ..
            } => working_directory,
            Discovery::Local { working_directory } => working_directory,
        };

        let settings_path = working_directory.join(SETTINGS_FILE_NAME);
        Ok(Located {
            working_directory,
            settings_path,
        })
    }

    /// Resolve a path-valued setting against the working directory and
    /// create the directory (idempotently).
    fn ensure_data_dir(working_directory: &Path, value: &str) -> Result<PathBuf> {
        let raw = PathBuf::from(value);
        let path = if raw.is_absolute() {
            raw
        } else {
            working_directory.join(raw)
        };

        fs::create_dir_all(&path).map_err(|source| Error::Workspace {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}

struct Located {
    working_directory: PathBuf,
    settings_path: PathBuf,
}

/// Make a path absolute against the process current directory without
/// touching the filesystem.
fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}
