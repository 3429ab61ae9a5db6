//! Line filtering shared by the text readers.

/// Non-blank lines that do not start with `#`, paired with their 1-based
/// line number and trimmed of surrounding whitespace.
pub(crate) fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}
