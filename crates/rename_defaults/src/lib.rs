// crates/rename_defaults/src/lib.rs

//! Compiled-in defaults for a rename run, shared by the walker and the CLI.

/// Directory the scan starts from when no root is given.
pub const DEFAULT_ROOT_DIR: &str = ".";

/// Extensions eligible for inspection, written the way they appear
/// on disk (leading dot included).
pub const DEFAULT_TARGET_EXTENSIONS: &[&str] = &[
    ".cs", ".axaml", ".csproj", ".sln", ".iss", ".json", ".xaml",
];

/// The old project identifier.
pub const DEFAULT_MARKER_TOKEN: &str = "MyMangaApp";

/// The new project identifier.
pub const DEFAULT_REPLACEMENT_TOKEN: &str = "Yomic";

/// Version-control metadata directories that are never descended into.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git"];
