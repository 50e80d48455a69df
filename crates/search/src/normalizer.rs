//! Word normalization for indexing and search
//!
//! Raw text is split into maximal runs of non-whitespace characters.
//! Each token is normalized by:
//! - Lowercasing
//! - Stripping a single trailing `'s` (placeholder for real stemming)
//! - Removing every character outside `[a-z]`
//!
//! Normalization may yield the empty string; it is kept unless the empty
//! string is itself a noise word.

use crate::noise::NoiseWords;

/// Split `content` into whitespace-delimited tokens with their byte offsets
///
/// # Example
///
/// ```
/// use docfinder_search::normalizer::tokenize;
///
/// let tokens = tokenize("Hello,  World!");
/// assert_eq!(tokens, vec![("Hello,", 0), ("World!", 8)]);
/// ```
pub fn tokenize(content: &str) -> Vec<(&str, usize)> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in content.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push((&content[s..i], s));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push((&content[s..], s));
    }

    tokens
}

/// Placeholder stemmer: drops a trailing `'s`
pub fn stem(word: &str) -> &str {
    word.strip_suffix("'s").unwrap_or(word)
}

/// Normalize a raw token
///
/// # Example
///
/// ```
/// use docfinder_search::normalizer::normalize;
///
/// assert_eq!(normalize("Dog's"), "dog");
/// assert_eq!(normalize("e-mail!"), "email");
/// assert_eq!(normalize("1984"), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let lower = raw.to_lowercase();
    stem(&lower)
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Normalized, non-noise words of `content` with the byte offset of the
/// token each came from, in document order
pub fn words(content: &str, noise: &NoiseWords) -> Vec<(String, usize)> {
    tokenize(content)
        .into_iter()
        .map(|(raw, offset)| (normalize(raw), offset))
        .filter(|(word, _)| !noise.contains(word))
        .collect()
}

/// The trailing token of `text` when it can be completed
///
/// Returns None if `text` is empty or its last character is not
/// alphabetic; completing after a space or punctuation yields nothing.
pub fn completion_fragment(text: &str) -> Option<&str> {
    match text.chars().last() {
        Some(c) if c.is_alphabetic() => tokenize(text).last().map(|(raw, _)| *raw),
        _ => None,
    }
}
