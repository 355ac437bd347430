// crates/rename_content/src/config.rs

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use find_candidate_files::CandidateWalker;
use rename_defaults::{
    DEFAULT_EXCLUDED_DIRS, DEFAULT_MARKER_TOKEN, DEFAULT_REPLACEMENT_TOKEN, DEFAULT_ROOT_DIR,
    DEFAULT_TARGET_EXTENSIONS,
};

/// How a rewritten file is put back on disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate and overwrite the original. A failure mid-write can leave
    /// the file partially written.
    #[default]
    InPlace,
    /// Write a temporary file next to the original, then rename it over the
    /// original. A failure leaves the original untouched.
    Atomic,
}

/// Everything a single rename run needs.
#[derive(Clone, Debug)]
pub struct RenameConfig {
    /// Directory the scan starts from.
    pub root_dir: PathBuf,
    /// Extensions eligible for inspection, with or without a leading dot.
    pub target_extensions: BTreeSet<String>,
    /// Literal substring to search for.
    pub marker_token: String,
    /// Literal substring put in place of every marker occurrence.
    pub replacement_token: String,
    /// Directory names whose subtrees are never entered.
    pub excluded_dirs: Vec<String>,
    pub write_mode: WriteMode,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from(DEFAULT_ROOT_DIR),
            target_extensions: DEFAULT_TARGET_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            marker_token: DEFAULT_MARKER_TOKEN.to_string(),
            replacement_token: DEFAULT_REPLACEMENT_TOKEN.to_string(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
            write_mode: WriteMode::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("marker token must not be empty")]
    EmptyMarker,
    #[error("at least one target extension is required")]
    NoExtensions,
    #[error("root directory {} does not exist", .0.display())]
    RootNotFound(PathBuf),
    #[error("root {} is not a directory", .0.display())]
    RootNotDirectory(PathBuf),
}

impl RenameConfig {
    /// Default configuration rooted at `root_dir`.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_tokens(mut self, marker: &str, replacement: &str) -> Self {
        self.marker_token = marker.to_string();
        self.replacement_token = replacement.to_string();
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.target_extensions = extensions.into_iter().map(|e| e.as_ref().to_string()).collect();
        self
    }

    pub fn with_excluded_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_dirs = names.into_iter().map(|n| n.as_ref().to_string()).collect();
        self
    }

    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    /// Checks the configuration before any file is touched.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.marker_token.is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        if self.target_extensions.is_empty() {
            return Err(ConfigError::NoExtensions);
        }
        check_root(&self.root_dir)
    }

    /// Builds the candidate walker for this configuration.
    pub fn walker(&self) -> CandidateWalker {
        CandidateWalker::new(&self.root_dir)
            .extensions(&self.target_extensions)
            .exclude_dirs(&self.excluded_dirs)
    }
}

fn check_root(root: &Path) -> Result<(), ConfigError> {
    if !root.exists() {
        return Err(ConfigError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ConfigError::RootNotDirectory(root.to_path_buf()));
    }
    Ok(())
}
