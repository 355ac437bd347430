// crates/rename_content/src/progress.rs

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use crate::rewriter::RewriteError;
use crate::runner::RunSummary;

/// Receives the user-facing progress lines of a run.
pub trait ProgressSink {
    fn started(&mut self, root: &Path);
    fn modified(&mut self, path: &Path);
    fn failed(&mut self, error: &RewriteError);
    fn finished(&mut self, summary: &RunSummary);
}

/// Writes progress lines to any `io::Write`.
pub struct WriterProgress<W: Write> {
    out: W,
}

/// Progress printed to standard output.
pub type StdoutProgress = WriterProgress<io::Stdout>;

impl WriterProgress<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WriterProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", args) {
            log::debug!("Failed to write progress line: {}", e);
        }
    }
}

impl<W: Write> ProgressSink for WriterProgress<W> {
    fn started(&mut self, root: &Path) {
        self.line(format_args!("Scanning {}", root.display()));
    }

    fn modified(&mut self, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.line(format_args!("Modifying {}...", name));
    }

    fn failed(&mut self, error: &RewriteError) {
        self.line(format_args!(
            "Error processing {}: {}",
            error.path().display(),
            error
        ));
    }

    fn finished(&mut self, _summary: &RunSummary) {
        self.line(format_args!("Done."));
        if let Err(e) = self.out.flush() {
            log::debug!("Failed to flush progress output: {}", e);
        }
    }
}
