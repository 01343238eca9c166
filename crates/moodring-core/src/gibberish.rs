//! Gibberish detection heuristics.
//!
//! Judges whether input is non-meaningful from surface features alone:
//! token count, repeated characters, vowel and letter ratios, and an
//! optional flat-tone signal from the polarity analyzer. No semantic
//! understanding is involved.

use serde::{Deserialize, Serialize};

/// Why text was judged gibberish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GibberishReason {
    /// Empty or whitespace-only input.
    Empty,
    /// Fewer whitespace tokens than the minimum.
    TooFewTokens,
    /// A character repeated too many times in a row ("heyyyy").
    RepeatedCharacters,
    /// Too few tokens contain a vowel ("xk qz").
    LowVowelTokenRatio,
    /// Vowels are too scarce among the letters and a token carries a
    /// long consonant run - keyboard mash with incidental vowels.
    LowVowelDensity,
    /// Too few characters are alphabetic.
    LowAlphaRatio,
    /// Near-zero polarity combined with a weak vowel-token ratio.
    FlatTone,
}

/// Tunable thresholds for gibberish detection.
///
/// The values are heuristic calibration points, kept as named fields so
/// they can be re-tuned without touching the detector logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GibberishConfig {
    /// Minimum whitespace token count (default: 2).
    pub min_tokens: usize,
    /// Consecutive repeats of one character that flag the text (default: 4).
    pub repeat_run: usize,
    /// Minimum ratio of vowel-bearing tokens to all tokens (default: 0.4).
    pub min_vowel_token_ratio: f32,
    /// Minimum vowel share of alphabetic characters, counting `y`
    /// (default: 0.33).
    pub min_vowel_char_ratio: f32,
    /// Consonant-run length that marks a token as keyboard mash
    /// (default: 4).
    pub consonant_run: usize,
    /// Minimum ratio of alphabetic characters to all characters
    /// (default: 0.6).
    pub min_alpha_ratio: f32,
    /// Polarity magnitude below which tone counts as flat (default: 0.05).
    pub flat_polarity_epsilon: f32,
    /// Vowel-token ratio below which flat tone flags the text
    /// (default: 0.5).
    pub flat_vowel_token_ratio: f32,
}

impl Default for GibberishConfig {
    fn default() -> Self {
        Self {
            min_tokens: 2,
            repeat_run: 4,
            min_vowel_token_ratio: 0.4,
            min_vowel_char_ratio: 0.33,
            consonant_run: 4,
            min_alpha_ratio: 0.6,
            flat_polarity_epsilon: 0.05,
            flat_vowel_token_ratio: 0.5,
        }
    }
}

/// Surface-feature gibberish detector.
///
/// Conditions are checked in a fixed order and the first hit wins; the
/// returned reason names the condition for logging.
pub struct GibberishDetector {
    config: GibberishConfig,
}

impl GibberishDetector {
    /// Creates a detector with the given thresholds.
    pub fn new(config: GibberishConfig) -> Self {
        Self { config }
    }

    /// Creates a detector with default thresholds.
    pub fn with_defaults() -> Self {
        Self::new(GibberishConfig::default())
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &GibberishConfig {
        &self.config
    }

    /// Runs the detection cascade.
    ///
    /// `polarity` is the optional flat-tone signal in [-1, 1]; pass
    /// `None` when no analyzer result is available and that check is
    /// simply skipped.
    pub fn detect(&self, text: &str, polarity: Option<f32>) -> Option<GibberishReason> {
        if text.trim().is_empty() {
            return Some(GibberishReason::Empty);
        }

        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() < self.config.min_tokens {
            return Some(GibberishReason::TooFewTokens);
        }

        if has_repeat_run(text, self.config.repeat_run) {
            return Some(GibberishReason::RepeatedCharacters);
        }

        let vowel_tokens = tokens
            .iter()
            .filter(|tok| tok.chars().any(is_vowel))
            .count();
        let vowel_token_ratio = vowel_tokens as f32 / tokens.len().max(1) as f32;
        if vowel_token_ratio < self.config.min_vowel_token_ratio {
            return Some(GibberishReason::LowVowelTokenRatio);
        }

        // Keyboard mash can still put a vowel in every token ("asdkj
        // qpwoe"). The character-level check needs both signals: real
        // consonant-heavy English ("fresh bread smells good") dips below
        // the vowel share alone.
        let letters = text.chars().filter(|ch| ch.is_alphabetic()).count();
        let vowel_chars = text.chars().filter(|ch| is_vowel_or_y(*ch)).count();
        let vowel_char_ratio = vowel_chars as f32 / letters.max(1) as f32;
        if vowel_char_ratio < self.config.min_vowel_char_ratio
            && tokens
                .iter()
                .any(|tok| has_consonant_run(tok, self.config.consonant_run))
        {
            return Some(GibberishReason::LowVowelDensity);
        }

        let total_chars = text.chars().count();
        let alpha_ratio = letters as f32 / total_chars.max(1) as f32;
        if alpha_ratio < self.config.min_alpha_ratio {
            return Some(GibberishReason::LowAlphaRatio);
        }

        if let Some(polarity) = polarity {
            if polarity.abs() < self.config.flat_polarity_epsilon
                && vowel_token_ratio < self.config.flat_vowel_token_ratio
            {
                return Some(GibberishReason::FlatTone);
            }
        }

        None
    }

    /// Convenience wrapper over [`detect`](Self::detect).
    pub fn is_gibberish(&self, text: &str, polarity: Option<f32>) -> bool {
        self.detect(text, polarity).is_some()
    }
}

impl Default for GibberishDetector {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn is_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_vowel_or_y(ch: char) -> bool {
    matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Returns true if any character repeats `run` or more times in a row.
///
/// The `regex` crate has no backreferences, so `(.)\1{3,}` is a scan.
fn has_repeat_run(text: &str, run: usize) -> bool {
    let mut count = 0usize;
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        if Some(ch) == prev {
            count += 1;
            if count >= run {
                return true;
            }
        } else {
            prev = Some(ch);
            count = 1;
        }
    }
    false
}

/// Returns true if the token contains `run` consecutive consonants
/// (alphabetic, not a/e/i/o/u/y).
fn has_consonant_run(token: &str, run: usize) -> bool {
    let mut count = 0usize;
    for ch in token.chars() {
        if ch.is_alphabetic() && !is_vowel_or_y(ch) {
            count += 1;
            if count >= run {
                return true;
            }
        } else {
            count = 0;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> GibberishDetector {
        GibberishDetector::with_defaults()
    }

    #[test]
    fn empty_and_whitespace_only() {
        let d = detector();
        assert_eq!(d.detect("", None), Some(GibberishReason::Empty));
        assert_eq!(d.detect("   \t ", None), Some(GibberishReason::Empty));
    }

    #[test]
    fn single_token_is_too_short() {
        assert_eq!(
            detector().detect("hello", None),
            Some(GibberishReason::TooFewTokens)
        );
    }

    #[test]
    fn repeated_characters_flagged() {
        assert_eq!(
            detector().detect("heyyyy yo", None),
            Some(GibberishReason::RepeatedCharacters)
        );
    }

    #[test]
    fn three_repeats_allowed() {
        // "umm" and "aww" style repetition stays under the run length.
        assert_eq!(detector().detect("awww that is so sweet of you", None), None);
    }

    #[test]
    fn vowelless_tokens_flagged() {
        assert_eq!(
            detector().detect("xk qz", None),
            Some(GibberishReason::LowVowelTokenRatio)
        );
    }

    #[test]
    fn keyboard_mash_with_incidental_vowels_flagged() {
        assert_eq!(
            detector().detect("asdkj qpwoe", None),
            Some(GibberishReason::LowVowelDensity)
        );
    }

    #[test]
    fn consonant_heavy_english_is_not_mash() {
        // Below the vowel-share cutoff but with no long consonant run.
        assert_eq!(detector().detect("fresh bread smells good", None), None);
    }

    #[test]
    fn symbol_heavy_text_flagged() {
        assert_eq!(
            detector().detect("ae12345 ou6789!!", None),
            Some(GibberishReason::LowAlphaRatio)
        );
    }

    #[test]
    fn flat_tone_needs_polarity_signal() {
        let d = detector();
        let text = "bao cou xz zq qx";
        assert_eq!(d.detect(text, None), None);
        assert_eq!(d.detect(text, Some(0.0)), Some(GibberishReason::FlatTone));
        // A clear tone defuses the flat-tone arm.
        assert_eq!(d.detect(text, Some(0.4)), None);
    }

    #[test]
    fn ordinary_sentences_pass() {
        let d = detector();
        assert_eq!(d.detect("I won the match today!", Some(0.8)), None);
        assert_eq!(d.detect("The sky has clouds today", Some(0.0)), None);
        assert_eq!(d.detect("You are so stupid and dumb", Some(-0.35)), None);
    }

    #[test]
    fn thresholds_are_configurable() {
        let config = GibberishConfig {
            min_tokens: 1,
            ..Default::default()
        };
        let d = GibberishDetector::new(config);
        assert_eq!(d.detect("hello", None), None);
    }

    #[test]
    fn config_serde_round_trip() {
        let config = GibberishConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GibberishConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.min_tokens, config.min_tokens);
        assert_eq!(back.min_vowel_token_ratio, config.min_vowel_token_ratio);
    }

    #[test]
    fn repeat_run_scan() {
        assert!(has_repeat_run("aaaa", 4));
        assert!(has_repeat_run("xaaaay", 4));
        assert!(!has_repeat_run("aaa", 4));
        assert!(!has_repeat_run("", 4));
        assert!(has_repeat_run("!!!!", 4));
    }

    #[test]
    fn consonant_run_scan() {
        assert!(has_consonant_run("asdkj", 4));
        assert!(!has_consonant_run("qpwoe", 4));
        assert!(!has_consonant_run("rhythm", 4)); // y breaks the run
        assert!(!has_consonant_run("x1x2x3", 2)); // digits break the run
    }
}
