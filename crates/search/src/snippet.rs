//! Snippet extraction
//!
//! A snippet is the source line holding a byte offset, emitted with a
//! trailing newline.

/// The line of `content` containing byte `offset`, newline-terminated
///
/// The line runs from just after the nearest `\n` before `offset` (or the
/// start of the text) up to the nearest `\n` at or after `offset` (or the
/// end of the text). Returns None if `offset` is past the end of `content`
/// or not on a character boundary.
///
/// # Example
///
/// ```
/// use docfinder_search::snippet::line_at;
///
/// assert_eq!(line_at("cat sat\ndog ran", 8).as_deref(), Some("dog ran\n"));
/// ```
pub fn line_at(content: &str, offset: usize) -> Option<String> {
    let before = content.get(..offset)?;
    let start = before.rfind('\n').map_or(0, |i| i + 1);
    let end = content[offset..]
        .find('\n')
        .map_or(content.len(), |i| offset + i);

    let mut line = String::with_capacity(end - start + 1);
    line.push_str(&content[start..end]);
    line.push('\n');
    Some(line)
}
