// crates/rename_content/src/rewriter.rs

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

use replace_literal::{contains_marker, replace_all};

use crate::config::WriteMode;

/// What happened to a file that was read successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The marker was absent; the file was never opened for writing.
    Unchanged,
    /// The file was rewritten with `replacements` substitutions.
    Modified { replacements: usize },
}

/// A per-file failure. Never fatal to the scan.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// The file could not be opened or is not valid UTF-8. Nothing was written.
    #[error("{source}")]
    Read { path: PathBuf, source: io::Error },
    /// The new contents could not be written back.
    #[error("{source}")]
    Write { path: PathBuf, source: io::Error },
}

impl RewriteError {
    pub fn path(&self) -> &Path {
        match self {
            RewriteError::Read { path, .. } | RewriteError::Write { path, .. } => path,
        }
    }

    pub fn is_read(&self) -> bool {
        matches!(self, RewriteError::Read { .. })
    }
}

/// Replaces every occurrence of `marker` in the file at `path` with `replacement`.
///
/// The file is read fully as UTF-8 and its handle released before any write.
/// It is only reopened for writing when the marker was found.
///
/// # Arguments
///
/// * `path` - File to rewrite.
/// * `marker` - Literal substring to search for.
/// * `replacement` - Literal substring to substitute.
/// * `mode` - Whether to overwrite in place or via a temporary file and rename.
///
/// # Returns
///
/// The `FileOutcome` on success, or a `RewriteError` naming the path and the
/// step (read or write) that failed.
pub fn rewrite_file(
    path: &Path,
    marker: &str,
    replacement: &str,
    mode: WriteMode,
) -> Result<FileOutcome, RewriteError> {
    let content = fs::read_to_string(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if !contains_marker(&content, marker) {
        return Ok(FileOutcome::Unchanged);
    }
    let replaced = replace_all(&content, marker, replacement);

    let written = match mode {
        WriteMode::InPlace => fs::write(path, replaced.text.as_bytes()),
        WriteMode::Atomic => write_atomic(path, &replaced.text),
    };
    written.map_err(|source| RewriteError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(FileOutcome::Modified {
        replacements: replaced.count,
    })
}

/// Writes `text` to a sibling temporary file and renames it over the real target.
///
/// Symlinks are resolved first so the link itself survives and its target is replaced.
fn write_atomic(path: &Path, text: &str) -> io::Result<()> {
    let target = fs::canonicalize(path)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(&target)?.permissions();

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.as_file().sync_all()?;
    fs::set_permissions(tmp.path(), permissions)?;
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}
