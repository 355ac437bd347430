// crates/find_candidate_files/src/lib.rs

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use rename_defaults::{DEFAULT_EXCLUDED_DIRS, DEFAULT_TARGET_EXTENSIONS};

/// A file whose extension is in the target set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub path: PathBuf,
    /// Extension without the leading dot, exactly as it appears on disk.
    pub extension: String,
}

/// Walks a directory tree and yields the files eligible for rewriting.
///
/// Excluded directories are pruned before they are entered, so nothing below
/// them is ever read. The root itself is always walked.
#[derive(Debug, Clone)]
pub struct CandidateWalker {
    root: PathBuf,
    extensions: BTreeSet<String>,
    excluded_dirs: BTreeSet<String>,
}

impl CandidateWalker {
    /// Creates a walker over `root` using the default extension and exclusion sets.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: DEFAULT_TARGET_EXTENSIONS
                .iter()
                .map(|e| normalize_extension(e))
                .collect(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Replaces the extension set. Entries may be given with or without a leading dot.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }

    /// Replaces the set of directory names that are never descended into.
    pub fn exclude_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_dirs = names.into_iter().map(|n| n.as_ref().to_string()).collect();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily walks the tree, depth first, in file-name order.
    ///
    /// Traversal errors (an unreadable directory, an entry that vanished) are
    /// passed through so the caller can decide how to report them.
    pub fn walk(&self) -> impl Iterator<Item = Result<FileCandidate, walkdir::Error>> + '_ {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !self.is_excluded_dir(entry))
            .filter_map(move |entry| match entry {
                Ok(entry) => self.candidate_from(&entry).map(Ok),
                Err(err) => Some(Err(err)),
            })
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .map(|name| self.excluded_dirs.contains(name))
                .unwrap_or(false)
    }

    fn candidate_from(&self, entry: &DirEntry) -> Option<FileCandidate> {
        let file_type = entry.file_type();
        // Symlinked files are rewritten through the link; symlinked directories are not followed.
        // A dangling link is still a candidate so its read failure gets reported.
        let is_file = file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir());
        if !is_file || !has_target_extension(entry.path(), &self.extensions) {
            return None;
        }
        let extension = entry.path().extension().and_then(|s| s.to_str())?;
        Some(FileCandidate {
            path: entry.path().to_path_buf(),
            extension: extension.to_string(),
        })
    }
}

/// Strips a single leading dot so `.cs` and `cs` name the same extension.
pub fn normalize_extension(ext: &str) -> String {
    ext.strip_prefix('.').unwrap_or(ext).to_string()
}

/// Returns `true` if the path's extension is in `extensions` (given without leading dots).
///
/// Matching is case-sensitive. A dotfile such as `.gitignore` has no extension.
pub fn has_target_extension(path: &Path, extensions: &BTreeSet<String>) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| extensions.contains(ext))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn collect(root: &Path, extensions: &[&str], excluded: &[&str]) -> Vec<FileCandidate> {
        CandidateWalker::new(root)
            .extensions(extensions)
            .exclude_dirs(excluded)
            .walk()
            .filter_map(Result::ok)
            .collect()
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension(".cs"), "cs");
        assert_eq!(normalize_extension("cs"), "cs");
        assert_eq!(normalize_extension("..cs"), ".cs");
    }

    #[test]
    fn test_has_target_extension() {
        let exts: BTreeSet<String> = ["cs", "json"].iter().map(|s| s.to_string()).collect();
        assert!(has_target_extension(Path::new("src/App.cs"), &exts));
        assert!(has_target_extension(Path::new("appsettings.json"), &exts));
        assert!(!has_target_extension(Path::new("App.CS"), &exts));
        assert!(!has_target_extension(Path::new("readme.md"), &exts));
        assert!(!has_target_extension(Path::new("Makefile"), &exts));
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        let exts: BTreeSet<String> = ["gitignore"].iter().map(|s| s.to_string()).collect();
        assert!(!has_target_extension(Path::new(".gitignore"), &exts));
    }

    #[test]
    fn test_default_walker_uses_default_sets() {
        let walker = CandidateWalker::new("/tmp");
        assert!(walker.extensions.contains("csproj"));
        assert!(walker.excluded_dirs.contains(".git"));
        assert_eq!(walker.root(), Path::new("/tmp"));
    }

    #[test]
    fn test_walk_sorted_by_file_name() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("b.cs"), "b").unwrap();
        fs::write(root.join("a.cs"), "a").unwrap();
        fs::create_dir_all(root.join("c")).unwrap();
        fs::write(root.join("c/d.cs"), "d").unwrap();

        let found = collect(root, &[".cs"], &[".git"]);
        let names: Vec<_> = found
            .iter()
            .map(|c| c.path.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![PathBuf::from("a.cs"), PathBuf::from("b.cs"), PathBuf::from("c/d.cs")]
        );
        assert!(found.iter().all(|c| c.extension == "cs"));
    }

    #[test]
    fn test_root_named_like_excluded_dir_is_still_walked() {
        let dir = tempdir().unwrap();
        let root = dir.path().join(".git");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("config.json"), "{}").unwrap();

        let found = collect(&root, &["json"], &[".git"]);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_excluded_name_on_a_file_does_not_hide_it() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        // Only directories are pruned.
        fs::write(root.join("build.cs"), "x").unwrap();
        let found = collect(root, &["cs"], &["build.cs"]);
        assert_eq!(found.len(), 1);
    }
}
