//! Self-harm phrase detector.
//!
//! Matches direct self-harm ideation phrases against the raw lowercased
//! text. This check has the highest priority in the prediction cascade:
//! a match halts everything else and returns the crisis response.

use regex::{Regex, RegexSet};

/// Ordered self-harm ideation patterns.
///
/// Matched against raw lowercased text with punctuation intact -
/// apostrophes carry phrase boundaries here ("i can't go on"), so this
/// detector must not run on normalized text.
const PATTERNS: &[&str] = &[
    r"\bkill myself\b",
    r"\bkill me\b",
    r"\bi want to die\b",
    r"\bi want to end my life\b",
    r"\bsuicid(e|al)\b",
    r"\bi can.?t go on\b",
    r"\bi.?m done\b",
    r"\bi am done\b",
];

/// Regex cascade over self-harm ideation phrases.
pub struct SelfHarmDetector {
    /// Regex set for the fast any-match check.
    regex_set: RegexSet,
    /// Individual regexes for extracting the matched phrase.
    regexes: Vec<Regex>,
}

impl SelfHarmDetector {
    /// Creates a detector with the fixed pattern list.
    pub fn new() -> Self {
        let regex_set = RegexSet::new(PATTERNS).expect("Invalid self-harm patterns");
        let regexes = PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("Invalid self-harm pattern"))
            .collect();

        Self { regex_set, regexes }
    }

    /// Returns the first matching phrase in pattern order, if any.
    pub fn find_match(&self, text: &str) -> Option<String> {
        let text_lower = text.to_lowercase();

        if !self.regex_set.is_match(&text_lower) {
            return None;
        }

        for regex in &self.regexes {
            if let Some(m) = regex.find(&text_lower) {
                return Some(m.as_str().to_string());
            }
        }

        None
    }

    /// Returns true if any self-harm phrase matches.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex_set.is_match(&text.to_lowercase())
    }
}

impl Default for SelfHarmDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> SelfHarmDetector {
        SelfHarmDetector::new()
    }

    #[test]
    fn detects_kill_myself() {
        assert!(detector().is_match("I want to kill myself"));
    }

    #[test]
    fn detects_want_to_die() {
        assert!(detector().is_match("sometimes i want to die"));
    }

    #[test]
    fn detects_end_my_life() {
        assert!(detector().is_match("I want to end my life"));
    }

    #[test]
    fn detects_suicide_and_suicidal() {
        assert!(detector().is_match("thinking about suicide"));
        assert!(detector().is_match("I have been feeling suicidal"));
    }

    #[test]
    fn detects_cant_go_on_with_and_without_apostrophe() {
        assert!(detector().is_match("I can't go on"));
        assert!(detector().is_match("i cant go on"));
    }

    #[test]
    fn detects_im_done_variants() {
        assert!(detector().is_match("I'm done"));
        assert!(detector().is_match("im done"));
        assert!(detector().is_match("I am done"));
    }

    #[test]
    fn case_insensitive_via_lowercasing() {
        assert!(detector().is_match("KILL MYSELF"));
    }

    #[test]
    fn find_match_returns_the_phrase() {
        let matched = detector().find_match("I want to kill myself right now");
        assert_eq!(matched.as_deref(), Some("kill myself"));
    }

    #[test]
    fn safe_mentions_do_not_match() {
        let d = detector();
        assert!(!d.is_match("that movie killed at the box office"));
        assert!(!d.is_match("my homework is done"));
        assert!(!d.is_match("the deadline cannot go on forever"));
        assert!(!d.is_match("I won the match today!"));
    }

    #[test]
    fn word_boundaries_respected() {
        let d = detector();
        // "skill" must not trip "kill me/myself".
        assert!(!d.is_match("cooking is a skill myself and my friends enjoy"));
    }
}
