//! Text normalization shared by the keyword differ and the similarity scorer

/// Lowercase `text` and replace every character that is neither an ASCII
/// letter nor whitespace with a single space.
///
/// Replacement (rather than deletion) keeps hyphenated and punctuated words
/// apart: `"co-op"` becomes `"co op"`, never `"coop"`. Non-ASCII letters are
/// not letters for this purpose and are replaced as well.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                c.to_ascii_lowercase()
            } else if c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Normalize `text` and split it into whitespace-separated tokens
pub fn normalized_tokens(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
