//! Dynamic logo request matching.
//!
//! A dynamic logo request is a path of the form `/logos/.../<NAME>-ar21.svg`
//! where `<NAME>` is 3 to 10 characters from `[A-Za-z0-9_-]`. The name is
//! captured and a display font size is derived from its length.

use regex::Regex;

/// Floor for the derived font size, in `vw` units. Unreachable while the
/// pattern caps names at 10 characters, but longer names must still clamp.
const MIN_FONT_SIZE: f64 = 0.1;

/// Name extracted from a dynamic logo request, plus its derived size.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoToken {
    pub name: String,
    pub font_size: f64,
}

impl LogoToken {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let font_size = font_size_for_len(name.len());
        Self { name, font_size }
    }

    /// The size with the viewport-width unit attached, e.g. `1.5vw`.
    pub fn font_size_with_unit(&self) -> String {
        format!("{}vw", self.font_size)
    }
}

/// Anchored matcher for the dynamic logo path pattern.
pub struct LogoMatcher {
    pattern: Regex,
}

impl LogoMatcher {
    pub fn new() -> Self {
        Self {
            // Any number of intermediate segments, then the name segment.
            // The whole path must match; only the first capture is used.
            pattern: Regex::new(r"^/logos/(?:[^/]+/)*([-_A-Za-z0-9]{3,10})-ar21\.svg$")
                .expect("logo path pattern is valid"),
        }
    }

    /// Extract the logo name from a request path, or `None` when the path
    /// is not a dynamic logo request and the caller should fall through to
    /// static classification.
    pub fn capture(&self, path: &str) -> Option<LogoToken> {
        let captures = self.pattern.captures(path)?;
        Some(LogoToken::new(captures.get(1)?.as_str()))
    }
}

impl Default for LogoMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// `(20 - len) / 10`, floored at [`MIN_FONT_SIZE`]. Longer names shrink
/// the rendered text so it keeps fitting the placeholder box.
fn font_size_for_len(name_len: usize) -> f64 {
    ((20.0 - name_len as f64) / 10.0).max(MIN_FONT_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(path: &str) -> Option<LogoToken> {
        LogoMatcher::new().capture(path)
    }

    #[test]
    fn test_captures_name_from_logo_path() {
        let token = capture("/logos/acme/ABCDE-ar21.svg").unwrap();
        assert_eq!(token.name, "ABCDE");
    }

    #[test]
    fn test_matches_without_intermediate_segments() {
        let token = capture("/logos/abc-ar21.svg").unwrap();
        assert_eq!(token.name, "abc");
    }

    #[test]
    fn test_matches_deeply_nested_segments() {
        let token = capture("/logos/a/b/c/some_name-ar21.svg").unwrap();
        assert_eq!(token.name, "some_name");
    }

    #[test]
    fn test_name_keeps_raw_case() {
        let token = capture("/logos/MiXeD-ar21.svg").unwrap();
        assert_eq!(token.name, "MiXeD");
    }

    #[test]
    fn test_name_allows_hyphen_and_underscore() {
        assert_eq!(capture("/logos/a-b_c-ar21.svg").unwrap().name, "a-b_c");
    }

    #[test]
    fn test_name_length_bounds() {
        assert_eq!(capture("/logos/abc-ar21.svg").unwrap().name, "abc");
        assert_eq!(
            capture("/logos/abcdefghij-ar21.svg").unwrap().name,
            "abcdefghij"
        );
        // Too short and too long never match.
        assert!(capture("/logos/ab-ar21.svg").is_none());
        assert!(capture("/logos/abcdefghijk-ar21.svg").is_none());
    }

    #[test]
    fn test_rejects_paths_outside_logos_prefix() {
        assert!(capture("/assets/abc-ar21.svg").is_none());
        assert!(capture("/abc-ar21.svg").is_none());
        assert!(capture("logos/abc-ar21.svg").is_none());
    }

    #[test]
    fn test_match_is_anchored() {
        assert!(capture("/logos/abc-ar21.svg/extra").is_none());
        assert!(capture("/logos/abc-ar21.svg.bak").is_none());
        assert!(capture("/prefix/logos/abc-ar21.svg").is_none());
    }

    #[test]
    fn test_rejects_disallowed_characters() {
        assert!(capture("/logos/a.b.c-ar21.svg").is_none());
        assert!(capture("/logos/a%20b-ar21.svg").is_none());
    }

    #[test]
    fn test_font_size_from_name_length() {
        assert_eq!(capture("/logos/abc-ar21.svg").unwrap().font_size, 1.7);
        assert_eq!(
            capture("/logos/abcdefghij-ar21.svg").unwrap().font_size,
            1.0
        );
        assert_eq!(capture("/logos/ABCDE-ar21.svg").unwrap().font_size, 1.5);
    }

    #[test]
    fn test_font_size_unit_formatting() {
        assert_eq!(LogoToken::new("ABCDE").font_size_with_unit(), "1.5vw");
        // Whole sizes render without a trailing fraction.
        assert_eq!(LogoToken::new("abcdefghij").font_size_with_unit(), "1vw");
    }

    #[test]
    fn test_font_size_clamps_for_long_names() {
        // Not producible through the matcher, which caps names at 10
        // characters, but the clamp must hold anyway.
        assert_eq!(font_size_for_len(19), 0.1);
        assert_eq!(font_size_for_len(25), 0.1);
        assert_eq!(LogoToken::new("a".repeat(30)).font_size_with_unit(), "0.1vw");
    }
}
