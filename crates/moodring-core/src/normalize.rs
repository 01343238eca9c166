//! Text normalization ahead of word-level matching.

/// Normalizes text for token matching: every character that is not an
/// ASCII letter or whitespace becomes a space, then the result is
/// trimmed and lowercased.
///
/// Used only as input to the bad-word filter - the self-harm detector
/// matches the raw text because phrase boundaries (apostrophes in
/// particular) matter there.
pub fn normalize(text: &str) -> String {
    let spaced: String = text
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphabetic() || ch.is_whitespace() {
                ch
            } else {
                ' '
            }
        })
        .collect();
    spaced.trim().to_lowercase()
}
