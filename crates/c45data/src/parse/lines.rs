//! Line cleaning and value splitting shared by both file readers.

/// Markers that start a comment running to the end of the line.
const COMMENT_MARKERS: [&str; 2] = ["//", "|"];

/// Strip comments, surrounding whitespace and one trailing period.
///
/// Returns an empty string for blank and comment-only lines.
pub(crate) fn clean_line(line: &str) -> &str {
    let end = COMMENT_MARKERS
        .iter()
        .filter_map(|marker| line.find(marker))
        .min()
        .unwrap_or(line.len());
    let line = line[..end].trim();
    match line.strip_suffix('.') {
        Some(rest) => rest.trim_end(),
        None => line,
    }
}

/// Split a comma-separated list into trimmed tokens.
///
/// A token wrapped in double quotes has the quotes removed and is trimmed
/// again. Empty tokens are kept so that callers can count fields.
pub(crate) fn split_values(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(|raw| unquote(raw.trim()))
}

fn unquote(token: &str) -> &str {
    match token
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => inner.trim(),
        None => token,
    }
}

/// Non-blank cleaned lines paired with their 1-based physical line number.
pub(crate) fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, clean_line(line)))
        .filter(|(_, line)| !line.is_empty())
}
