//! Bad-word filter.
//!
//! Word-level backstop behind the self-harm detector: normalizes the
//! text, splits it into tokens, and intersects them with a fixed set of
//! profanity and sensitive words. Coarser than the phrase detector (it
//! flags "kill" in any context), which is why it runs after the
//! gibberish check and the crisis check have had their turn.

use std::collections::HashSet;

use crate::normalize::normalize;

/// Fixed profanity/sensitive-word set. Lowercase single tokens.
const BAD_WORDS: &[&str] = &[
    "kill", "die", "suicide", "sex", "stupid", "idiot", "dumb", "hate", "abuse",
];

/// Set-intersection filter over normalized tokens.
pub struct BadWordFilter {
    words: HashSet<&'static str>,
}

impl BadWordFilter {
    /// Creates a filter with the fixed word set.
    pub fn new() -> Self {
        Self {
            words: BAD_WORDS.iter().copied().collect(),
        }
    }

    /// Returns the bad words present in the text, in token order.
    pub fn matches(&self, text: &str) -> Vec<String> {
        let cleaned = normalize(text);
        let mut seen = HashSet::new();
        cleaned
            .split_whitespace()
            .filter(|tok| self.words.contains(tok) && seen.insert(*tok))
            .map(String::from)
            .collect()
    }

    /// Returns true if any token is in the bad-word set.
    pub fn contains_bad_words(&self, text: &str) -> bool {
        let cleaned = normalize(text);
        cleaned
            .split_whitespace()
            .any(|tok| self.words.contains(tok))
    }
}

impl Default for BadWordFilter {
    fn default() -> Self {
        Self::new()
    }
}
