//! Recursive document directory walker.

use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use globset::{GlobBuilder, GlobMatcher};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum WalkerError {
    #[error("document root does not exist: {0}")]
    MissingRoot(String),

    #[error("document root is not a directory: {0}")]
    NotADirectory(String),

    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

/// Information about a discovered document file.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    /// Absolute path to the file.
    pub absolute_path: PathBuf,
    /// Path relative to the document root.
    pub relative_path: PathBuf,
    /// File modification time, when the filesystem reports one.
    pub modified: Option<SystemTime>,
}

/// Files found by a walk, plus the number of entries that could not be read.
#[derive(Debug, Clone, Default)]
pub struct WalkOutcome {
    /// Matching files, sorted by relative path.
    pub files: Vec<WalkedFile>,
    /// Directory entries skipped because they could not be read.
    pub unreadable: usize,
}

/// Walker for discovering documents under a root directory.
#[derive(Debug)]
pub struct DocumentWalker {
    root: PathBuf,
    matcher: GlobMatcher,
    /// Folders to exclude from walking (relative paths from the root).
    excluded_folders: Vec<PathBuf>,
}

impl DocumentWalker {
    /// Create a new walker for the given root and glob pattern.
    pub fn new(root: &Path, pattern: &str) -> Result<Self, WalkerError> {
        Self::with_exclusions(root, pattern, Vec::new())
    }

    /// Create a new walker with folder exclusions.
    ///
    /// Excluded folders can be specified as:
    /// - Relative paths from the root (e.g., "archive/2019")
    /// - Absolute paths (will be converted to relative)
    ///
    /// `.` segments are ignored, so `./drafts` excludes `drafts`. An entry
    /// that names the root itself is dropped.
    pub fn with_exclusions(
        root: &Path,
        pattern: &str,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, WalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| WalkerError::MissingRoot(root.display().to_string()))?;

        if !root.is_dir() {
            return Err(WalkerError::NotADirectory(root.display().to_string()));
        }

        // `*` stays within one path segment; `**` crosses directories.
        let matcher = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|source| WalkerError::InvalidGlob { pattern: pattern.to_string(), source })?
            .compile_matcher();

        // Normalize exclusions to be relative to root
        let excluded_folders = excluded_folders
            .into_iter()
            .filter_map(|p| {
                let relative = match p.strip_prefix(&root) {
                    Ok(inside) => inside,
                    // Absolute paths outside the root never match
                    Err(_) if p.is_absolute() => return Some(p),
                    Err(_) => &p,
                };
                let normalized: PathBuf = relative
                    .components()
                    .filter(|c| matches!(c, Component::Normal(_)))
                    .collect();
                if normalized.as_os_str().is_empty() {
                    tracing::warn!("ignoring folder exclusion '{}': it names the root", p.display());
                    None
                } else {
                    Some(normalized)
                }
            })
            .collect();

        Ok(Self { root, matcher, excluded_folders })
    }

    /// Walk the root and return every file matching the pattern.
    ///
    /// Hidden entries, common tooling directories and configured exclusions
    /// are skipped. Entries that cannot be read are counted, not fatal.
    pub fn walk(&self) -> WalkOutcome {
        let mut outcome = WalkOutcome::default();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("skipping unreadable entry under {}: {}", self.root.display(), e);
                    outcome.unreadable += 1;
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative_path = path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();
            if !self.matcher.is_match(&relative_path) {
                continue;
            }

            let metadata = match path.metadata() {
                Ok(metadata) => metadata,
                Err(e) => {
                    tracing::warn!("skipping {}: {}", relative_path.display(), e);
                    outcome.unreadable += 1;
                    continue;
                }
            };

            outcome.files.push(WalkedFile {
                absolute_path: path.to_path_buf(),
                relative_path,
                modified: metadata.modified().ok(),
            });
        }

        outcome.files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        outcome
    }

    /// Check if an entry should be excluded from walking.
    fn is_excluded(&self, entry: &walkdir::DirEntry) -> bool {
        // Never filter the root directory (depth 0)
        if entry.depth() == 0 {
            return false;
        }

        let name = entry.file_name().to_string_lossy();

        // Skip hidden files and directories
        if name.starts_with('.') {
            return true;
        }

        // Skip common non-document directories
        if entry.file_type().is_dir()
            && matches!(name.as_ref(), "node_modules" | "target" | "__pycache__" | "venv")
        {
            return true;
        }

        if !self.excluded_folders.is_empty()
            && let Ok(relative) = entry.path().strip_prefix(&self.root)
        {
            return self.excluded_folders.iter().any(|excluded| relative.starts_with(excluded));
        }

        false
    }

    /// Get the canonical root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
