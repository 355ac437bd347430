use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use rename_content::logging::init_logging;
use rename_content::{run, RenameConfig, StdoutProgress, WriteMode};
use rename_defaults::{DEFAULT_MARKER_TOKEN, DEFAULT_REPLACEMENT_TOKEN, DEFAULT_ROOT_DIR};

/// Renames a project identifier inside every matching file under a directory.
///
/// With no arguments the compiled-in run is performed: every `.cs`, `.axaml`,
/// `.csproj`, `.sln`, `.iss`, `.json` and `.xaml` file below the current
/// directory has `MyMangaApp` replaced by `Yomic`.
#[derive(Parser, Debug)]
#[command(name = "rename_content", version)]
struct Cli {
    /// Directory to scan. A missing or non-directory root is an error: nothing
    /// is scanned and the exit status is non-zero.
    #[arg(default_value = DEFAULT_ROOT_DIR)]
    root: PathBuf,

    /// Literal text to search for.
    #[arg(long = "from", value_name = "TOKEN", default_value = DEFAULT_MARKER_TOKEN)]
    from: String,

    /// Literal text to put in its place.
    #[arg(long = "to", value_name = "TOKEN", default_value = DEFAULT_REPLACEMENT_TOKEN)]
    to: String,

    /// Target extension (repeatable). Replaces the default set when given.
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Directory name never descended into (repeatable). Replaces `.git` when given.
    #[arg(long = "exclude-dir", value_name = "NAME")]
    exclude_dirs: Vec<String>,

    /// Write through a temporary file and rename it over the original.
    #[arg(long)]
    atomic: bool,

    /// Enable verbose logging.
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> RenameConfig {
        let mut config = RenameConfig::new(self.root).with_tokens(&self.from, &self.to);
        if !self.extensions.is_empty() {
            config = config.with_extensions(&self.extensions);
        }
        if !self.exclude_dirs.is_empty() {
            config = config.with_excluded_dirs(&self.exclude_dirs);
        }
        if self.atomic {
            config = config.with_write_mode(WriteMode::Atomic);
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.into_config();
    log::debug!("{:?}", config);

    let mut progress = StdoutProgress::stdout();
    run(&config, &mut progress).context("Refusing to scan")?;
    Ok(())
}
