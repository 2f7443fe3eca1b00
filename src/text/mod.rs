//! Text normalization primitives shared by scoring and deduplication.
//!
//! All keyword matching and canonical-key construction operates on the
//! output of [`clean`]: lower-cased ASCII-alphanumeric text with single
//! spaces between words.


/// Lower-cases `text` and strips every character that is not ASCII
/// alphanumeric or a space.
///
/// Consecutive whitespace is preserved as-is; callers that need collapsed
/// whitespace go through [`tokenize`] or rejoin the tokens themselves.
pub fn clean(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}

/// Splits `text` into normalized whitespace-delimited tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    clean(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
