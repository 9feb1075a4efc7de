//! Text normalization and stop-word filtering.
//!
//! Both the user's message and every stored question go through the same
//! pipeline, so a keyword on one side can be compared by plain string equality
//! with a keyword on the other.

/// Characters removed before tokenizing. Everything else (including digits and
/// non-ASCII letters) is kept.
pub const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`',
    '~', '(', ')', '?', '\'', '"',
];

/// Low-information words dropped from keyword lists.
pub const STOP_WORDS: &[&str] = &[
    "what", "is", "a", "the", "how", "can", "i", "should", "are", "do", "for", "in", "to", "with",
    "on", "of", "my", "more", "get", "eat",
];

/// Tokens of this many UTF-16 code units or fewer are never keywords.
pub const MAX_SHORT_TOKEN_LEN: usize = 2;

/// Lowercase `text` and strip [`PUNCTUATION`]. Never fails, empty input gives empty output.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// True if `token` survives the stop-word and length filters.
pub fn is_keyword(token: &str) -> bool {
    token.encode_utf16().count() > MAX_SHORT_TOKEN_LEN && !STOP_WORDS.contains(&token)
}

/// Unicode whitespace plus the byte-order mark, matching regex `\s`.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Normalize `text`, split on whitespace runs and keep only keywords.
///
/// Order is preserved and duplicates are kept: a repeated word in the user's
/// message counts once per occurrence when scoring.
pub fn extract_keywords(text: &str) -> Vec<String> {
    normalize(text)
        .split(is_separator)
        .filter(|t| is_keyword(t))
        .map(str::to_string)
        .collect()
}
