// crates/replace_literal/src/lib.rs

/// Result of substituting a marker token in a block of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// The rewritten text. Identical to the input when `count` is zero.
    pub text: String,
    /// Number of non-overlapping occurrences that were replaced.
    pub count: usize,
}

impl Replacement {
    /// Returns `true` if at least one occurrence was replaced.
    pub fn changed(&self) -> bool {
        self.count > 0
    }
}

/// Returns `true` if `text` contains `marker` as a literal substring.
///
/// An empty marker never matches.
pub fn contains_marker(text: &str, marker: &str) -> bool {
    !marker.is_empty() && text.contains(marker)
}

/// Counts the non-overlapping occurrences of `marker` in `text`, scanning left to right.
pub fn count_occurrences(text: &str, marker: &str) -> usize {
    if marker.is_empty() {
        return 0;
    }
    text.matches(marker).count()
}

/// Replaces every non-overlapping occurrence of `marker` in `text` with `replacement`.
///
/// Everything outside the matched occurrences is copied through untouched, so the
/// output differs from the input only where the marker appeared.
///
/// # Arguments
///
/// * `text` - The text to rewrite.
/// * `marker` - The literal substring to search for.
/// * `replacement` - The literal substring to put in its place.
///
/// # Returns
///
/// A `Replacement` holding the new text and the number of substitutions made.
pub fn replace_all(text: &str, marker: &str, replacement: &str) -> Replacement {
    let count = count_occurrences(text, marker);
    if count == 0 {
        return Replacement {
            text: text.to_string(),
            count,
        };
    }
    Replacement {
        text: text.replace(marker, replacement),
        count,
    }
}
