// crates/rename_content/src/lib.rs

//! Renames a project identifier inside every matching file of a directory tree.
//!
//! The walk, the per-file rewrite and the progress output are separate pieces:
//! [`rewriter::rewrite_file`] returns a result for one file, and
//! [`runner::run`] reports it and moves on.

pub mod config;
pub mod logging;
pub mod progress;
pub mod rewriter;
pub mod runner;

pub use config::{ConfigError, RenameConfig, WriteMode};
pub use progress::{ProgressSink, StdoutProgress, WriterProgress};
pub use rewriter::{rewrite_file, FileOutcome, RewriteError};
pub use runner::{run, RunSummary};
