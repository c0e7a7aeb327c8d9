//! Literal token substitution into the logo template.

/// Token replaced by the raw matched name.
pub const NAME_TOKEN: &str = "{{name}}";
/// Token replaced by the formatted font size, e.g. `1.5vw`.
pub const FONT_SIZE_TOKEN: &str = "{{fontSize}}";

/// Replace every occurrence of the two tokens in the template.
///
/// No escaping is performed: the matcher's character class cannot produce
/// markup-breaking characters, so the name is inserted verbatim. The
/// template itself is never mutated, so rendering is safe to repeat and to
/// run concurrently.
pub fn render(template: &str, name: &str, font_size_with_unit: &str) -> String {
    template
        .replace(NAME_TOKEN, name)
        .replace(FONT_SIZE_TOKEN, font_size_with_unit)
}
