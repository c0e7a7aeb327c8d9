//! Suffix-based selection of a static placeholder.

/// The three static placeholder categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// Wide (2:1) banner placeholder, for `*-ar21.svg` requests
    Wide,
    /// Square icon placeholder, for `*-icon.svg` requests
    Icon,
    /// Full-size placeholder, for everything else
    Full,
}

/// Classify a request path by its literal suffix.
///
/// Checked in order, first match wins; every path yields exactly one
/// category. Matching is on the raw path string, case-sensitive.
pub fn classify(path: &str) -> PlaceholderKind {
    if path.ends_with("-ar21.svg") {
        PlaceholderKind::Wide
    } else if path.ends_with("-icon.svg") {
        PlaceholderKind::Icon
    } else {
        PlaceholderKind::Full
    }
}
