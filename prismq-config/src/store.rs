//! Settings store backends.
//!
//! The settings store is a shared dotenv-format text file: one `KEY=VALUE`
//! pair per line, `#` comments, later duplicate keys overriding earlier
//! ones. This module provides the [`SettingsStore`] abstraction over it so
//! the resolver can be tested against an in-memory fake.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File name of the settings store inside the working directory.
pub const SETTINGS_FILE_NAME: &str = ".env";

/// Abstraction over the persisted key/value settings store.
///
/// Implementations are expected to be append-oriented: updating a key means
/// appending a new `KEY=VALUE` entry, which wins over earlier occurrences
/// under the parsing rules of [`parse_env_format`].
pub trait SettingsStore {
    /// Load the store into a key/value mapping.
    ///
    /// Later occurrences of a key override earlier ones; malformed lines
    /// are skipped rather than failing.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load(&self) -> Result<HashMap<String, String>>;

    /// Append a `KEY=VALUE` entry to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn append(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Parse dotenv-format text into a key/value mapping.
///
/// Blank lines and `#` comments are ignored. Lines without a `=` are
/// skipped. Keys and values are trimmed, and one pair of matching
/// surrounding quotes (single or double) is stripped from values. Later
/// occurrences of a key win.
///
/// # Examples
///
/// ```
/// use prismq_config::store::parse_env_format;
///
/// let values = parse_env_format("# comment\nAPP_ENV=production\nDEBUG=\"true\"\n");
/// assert_eq!(values["APP_ENV"], "production");
/// assert_eq!(values["DEBUG"], "true");
/// ```
#[must_use]
pub fn parse_env_format(contents: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            // Malformed line, tolerated per the store format contract.
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        values.insert(key.to_string(), unquote(value.trim()).to_string());
    }

    values
}

/// Strip one pair of matching surrounding quotes, if present.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Settings store backed by a dotenv-format file on disk.
///
/// The file is treated as an external shared resource: it may be read and
/// appended by multiple independent processes without coordination, so a
/// concurrent prompt-and-append from two processes can lose an update.
///
/// # Examples
///
/// ```no_run
/// use prismq_config::store::{EnvFileStore, SettingsStore};
/// use std::path::Path;
///
/// let mut store = EnvFileStore::new(Path::new("/workspace/.env"));
/// store.create_if_missing(None).unwrap();
/// store.append("APP_NAME", "PrismQ.Demo").unwrap();
/// let values = store.load().unwrap();
/// assert_eq!(values["APP_NAME"], "PrismQ.Demo");
/// ```
#[derive(Debug, Clone)]
pub struct EnvFileStore {
    path: PathBuf,
}

impl EnvFileStore {
    /// Creates a store handle for the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the backing file if it does not exist yet.
    ///
    /// Intermediate directories are created as needed. If `seed` is given,
    /// a newly created file starts with that single `KEY=VALUE` entry;
    /// otherwise it is created empty. Existing files are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Workspace`] if the directory or file cannot be
    /// created.
    pub fn create_if_missing(&self, seed: Option<(&str, &str)>) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Workspace {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = match seed {
            Some((key, value)) => format!("{key}={value}\n"),
            None => String::new(),
        };

        fs::write(&self.path, contents).map_err(|source| Error::Workspace {
            path: self.path.clone(),
            source,
        })
    }
}

impl SettingsStore for EnvFileStore {
    fn load(&self) -> Result<HashMap<String, String>> {
        let contents = fs::read_to_string(&self.path).map_err(|source| Error::Store {
            path: self.path.clone(),
            source,
        })?;
        Ok(parse_env_format(&contents))
    }

    fn append(&mut self, key: &str, value: &str) -> Result<()> {
        let missing_newline = fs::read_to_string(&self.path)
            .map(|c| !c.is_empty() && !c.ends_with('\n'))
            .unwrap_or(false);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| Error::Store {
                path: self.path.clone(),
                source,
            })?;

        let entry = if missing_newline {
            format!("\n{key}={value}\n")
        } else {
            format!("{key}={value}\n")
        };

        file.write_all(entry.as_bytes())
            .map_err(|source| Error::Store {
                path: self.path.clone(),
                source,
            })
    }
}

/// In-memory settings store for tests and embedders.
///
/// Preserves append order so that later entries win, matching the file
/// store's semantics.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<(String, String)>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of appended entries, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<HashMap<String, String>> {
        let mut values = HashMap::new();
        for (key, value) in &self.entries {
            values.insert(key.clone(), value.clone());
        }
        Ok(values)
    }

    fn append(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.push((key.to_string(), value.to_string()));
        Ok(())
    }
}
