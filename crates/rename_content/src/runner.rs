// crates/rename_content/src/runner.rs

use crate::config::{ConfigError, RenameConfig};
use crate::progress::ProgressSink;
use crate::rewriter::{rewrite_file, FileOutcome};

/// Counters for one pass over the tree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Files with a target extension that were looked at.
    pub inspected: usize,
    pub modified: usize,
    pub unchanged: usize,
    pub failed: usize,
    /// Total marker occurrences replaced across all modified files.
    pub replacements: usize,
    /// Directory entries the walker could not read.
    pub walk_errors: usize,
}

/// Scans the configured tree once and rewrites every candidate that contains the marker.
///
/// The configuration is validated first; nothing is touched if it is invalid.
/// After that no per-file or traversal failure stops the scan: each is reported
/// and the walk moves on to the next entry.
pub fn run(config: &RenameConfig, progress: &mut dyn ProgressSink) -> Result<RunSummary, ConfigError> {
    config.validate()?;

    let mut summary = RunSummary::default();
    progress.started(&config.root_dir);
    log::debug!(
        "Replacing '{}' with '{}' in {:?}, skipping {:?}",
        config.marker_token,
        config.replacement_token,
        config.target_extensions,
        config.excluded_dirs
    );

    let walker = config.walker();
    for entry in walker.walk() {
        let candidate = match entry {
            Ok(candidate) => candidate,
            Err(err) => {
                summary.walk_errors += 1;
                log::warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        summary.inspected += 1;
        match rewrite_file(
            &candidate.path,
            &config.marker_token,
            &config.replacement_token,
            config.write_mode,
        ) {
            Ok(FileOutcome::Modified { replacements }) => {
                summary.modified += 1;
                summary.replacements += replacements;
                progress.modified(&candidate.path);
                log::debug!("{}: {} replacement(s)", candidate.path.display(), replacements);
            }
            Ok(FileOutcome::Unchanged) => {
                summary.unchanged += 1;
            }
            Err(err) => {
                summary.failed += 1;
                progress.failed(&err);
            }
        }
    }

    progress.finished(&summary);
    log::info!(
        "Inspected {} file(s): {} modified, {} unchanged, {} failed",
        summary.inspected,
        summary.modified,
        summary.unchanged,
        summary.failed
    );
    Ok(summary)
}
