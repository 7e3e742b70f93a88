//! Working-directory discovery.
//!
//! Related PrismQ modules are checked out under (or alongside) an umbrella
//! directory literally named `PrismQ`. They all share one settings store,
//! kept in a `PrismQ_WD` sibling of the umbrella so the umbrella itself
//! stays free of generated files. Discovery walks the parent chain of the
//! starting directory looking for that umbrella.

use std::path::{Path, PathBuf};

/// Exact name of the umbrella directory that anchors shared configuration.
pub const UMBRELLA_DIR_NAME: &str = "PrismQ";

/// Name of the shared working directory created next to the umbrella.
pub const SHARED_DIR_NAME: &str = "PrismQ_WD";

/// Outcome of working-directory discovery.
///
/// # Examples
///
/// ```
/// use prismq_config::discovery::{discover, Discovery};
/// use std::path::Path;
///
/// let discovery = discover(Path::new("/srv/modules/collector"));
/// assert!(matches!(discovery, Discovery::Local { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    /// An umbrella directory was found; configuration is shared through
    /// its `PrismQ_WD` sibling.
    Shared {
        /// The umbrella directory that anchored the match.
        umbrella: PathBuf,
        /// The shared working directory (may not exist yet).
        working_directory: PathBuf,
    },
    /// No umbrella on the parent chain; the starting directory owns its
    /// own settings store.
    Local {
        /// The starting directory, unchanged.
        working_directory: PathBuf,
    },
}

impl Discovery {
    /// The chosen working directory.
    #[must_use]
    pub fn working_directory(&self) -> &Path {
        match self {
            Self::Shared {
                working_directory, ..
            }
            | Self::Local { working_directory } => working_directory,
        }
    }

    /// Whether the shared (umbrella) case applies.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        matches!(self, Self::Shared { .. })
    }
}

/// Find the topmost ancestor of `start` (inclusive) named exactly
/// [`UMBRELLA_DIR_NAME`].
///
/// The match is a case-sensitive whole-name comparison: `PrismQMonorepo`
/// and `prismq` do not match. When umbrella directories are nested, the
/// one closest to the filesystem root wins, so every module below the
/// outermost umbrella shares a single store.
///
/// # Examples
///
/// ```
/// use prismq_config::discovery::find_umbrella;
/// use std::path::{Path, PathBuf};
///
/// let found = find_umbrella(Path::new("/a/PrismQ/modules/collector"));
/// assert_eq!(found, Some(PathBuf::from("/a/PrismQ")));
///
/// assert!(find_umbrella(Path::new("/a/PrismQMonorepo/b")).is_none());
/// ```
#[must_use]
pub fn find_umbrella(start: &Path) -> Option<PathBuf> {
    let mut topmost = None;

    for ancestor in start.ancestors() {
        if ancestor
            .file_name()
            .is_some_and(|name| name == UMBRELLA_DIR_NAME)
        {
            // Keep scanning; a higher ancestor overrides a lower one.
            topmost = Some(ancestor.to_path_buf());
        }
    }

    topmost
}

/// Run the directory discovery algorithm from `start`.
///
/// Pure with respect to the filesystem: nothing is created here. The
/// resolver is responsible for materializing the shared directory when
/// the [`Discovery::Shared`] case applies.
#[must_use]
pub fn discover(start: &Path) -> Discovery {
    match find_umbrella(start) {
        Some(umbrella) => {
            let working_directory = match umbrella.parent() {
                Some(parent) => parent.join(SHARED_DIR_NAME),
                // Umbrella sits at the filesystem root; its sibling lives
                // directly under the root as well.
                None => PathBuf::from(SHARED_DIR_NAME),
            };
            log::debug!(
                "umbrella directory {} found, sharing configuration via {}",
                umbrella.display(),
                working_directory.display()
            );
            Discovery::Shared {
                umbrella,
                working_directory,
            }
        }
        None => Discovery::Local {
            working_directory: start.to_path_buf(),
        },
    }
}
