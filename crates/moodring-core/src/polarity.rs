//! Lexicon-based polarity analysis.
//!
//! Produces a continuous sentiment score in [-1, 1] from word valences,
//! with intensifier boosts and a short negation window. This is the
//! guaranteed fallback behind the trained classifiers: it has no
//! failure mode and always yields a score.

use std::collections::{HashMap, HashSet};

/// Word entry in the polarity lexicon.
#[derive(Debug, Clone)]
struct LexiconEntry {
    /// Valence score (-1.0 to 1.0).
    valence: f32,
    /// Weight/importance of this word.
    weight: f32,
}

/// Lexicon polarity analyzer.
///
/// Word lists and scoring in the VADER style: weighted valences,
/// intensifiers that boost the next sentiment word, and negations that
/// dampen and flip anything within a three-word window.
pub struct PolarityAnalyzer {
    lexicon: HashMap<String, LexiconEntry>,
    intensifiers: HashMap<String, f32>,
    negations: HashSet<String>,
}

impl PolarityAnalyzer {
    /// Creates an analyzer with the built-in lexicon.
    pub fn new() -> Self {
        let mut analyzer = Self {
            lexicon: HashMap::new(),
            intensifiers: HashMap::new(),
            negations: HashSet::new(),
        };
        analyzer.load_intensifiers();
        analyzer.load_negations();
        analyzer.load_lexicon();
        analyzer
    }

    /// Scores the text in [-1, 1]. Zero means no sentiment signal.
    pub fn score(&self, text: &str) -> f32 {
        let text_lower = text.to_lowercase();
        let words: Vec<&str> = text_lower
            .split_whitespace()
            .map(|tok| tok.trim_matches(|ch: char| !ch.is_alphanumeric()))
            .filter(|tok| !tok.is_empty())
            .collect();

        if words.is_empty() {
            return 0.0;
        }

        let mut total_score = 0.0;
        let mut total_weight = 0.0;
        let mut negation_active = false;
        let mut negation_distance = 0;
        let mut pending_intensifier = 1.0f32;

        for word in &words {
            if self.negations.contains(*word) {
                negation_active = true;
                negation_distance = 0;
                continue;
            }

            if let Some(&boost) = self.intensifiers.get(*word) {
                pending_intensifier = boost;
                continue;
            }

            if let Some(entry) = self.lexicon.get(*word) {
                let mut score = entry.valence * entry.weight * pending_intensifier;

                // Dampen and flip sentiment within 3 words of a negation.
                if negation_active && negation_distance < 3 {
                    score = -score * 0.7;
                }

                total_score += score;
                total_weight += entry.weight;
                pending_intensifier = 1.0;
            }

            if negation_active {
                negation_distance += 1;
                if negation_distance >= 3 {
                    negation_active = false;
                }
            }
        }

        if total_weight > 0.0 {
            (total_score / total_weight).clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }

    fn load_intensifiers(&mut self) {
        let intensifiers = [
            ("very", 1.3),
            ("really", 1.3),
            ("extremely", 1.5),
            ("absolutely", 1.5),
            ("totally", 1.3),
            ("so", 1.2),
            ("incredibly", 1.4),
            ("terribly", 1.4),
            ("deeply", 1.3),
            ("completely", 1.4),
        ];

        for (word, boost) in intensifiers {
            self.intensifiers.insert(word.to_string(), boost);
        }
    }

    fn load_negations(&mut self) {
        let negations = [
            "not", "no", "never", "none", "nobody", "nothing", "neither", "nowhere", "cannot",
            "can't", "don't", "doesn't", "didn't", "won't", "wouldn't", "couldn't", "shouldn't",
            "isn't", "aren't", "wasn't", "weren't", "haven't", "hasn't", "hadn't",
        ];

        for word in negations {
            self.negations.insert(word.to_string());
        }
    }

    fn load_lexicon(&mut self) {
        let positive_words = [
            ("happy", 0.8, 1.0),
            ("joy", 0.9, 1.1),
            ("joyful", 0.8, 1.0),
            ("love", 0.8, 1.0),
            ("loved", 0.8, 1.0),
            ("great", 0.7, 0.9),
            ("good", 0.6, 0.8),
            ("wonderful", 0.8, 1.0),
            ("amazing", 0.8, 1.0),
            ("awesome", 0.8, 1.0),
            ("excellent", 0.8, 1.0),
            ("fantastic", 0.8, 1.0),
            ("beautiful", 0.7, 0.9),
            ("nice", 0.5, 0.7),
            ("kind", 0.6, 0.8),
            ("fun", 0.6, 0.8),
            ("excited", 0.7, 0.9),
            ("proud", 0.7, 0.9),
            ("glad", 0.7, 0.9),
            ("cool", 0.5, 0.7),
            ("best", 0.7, 0.9),
            ("won", 0.8, 1.0),
            ("win", 0.7, 0.9),
            ("winning", 0.7, 0.9),
            ("grateful", 0.7, 0.9),
            ("thankful", 0.7, 0.9),
            ("hopeful", 0.6, 0.8),
        ];

        let negative_words = [
            ("sad", -0.7, 1.0),
            ("unhappy", -0.7, 1.0),
            ("depressed", -0.9, 1.2),
            ("lonely", -0.8, 1.1),
            ("miserable", -0.8, 1.1),
            ("hopeless", -0.9, 1.2),
            ("worthless", -0.9, 1.2),
            ("anxious", -0.7, 1.0),
            ("worried", -0.5, 0.8),
            ("scared", -0.6, 0.9),
            ("afraid", -0.6, 0.9),
            ("terrified", -0.8, 1.1),
            ("crying", -0.6, 1.0),
            ("heartbroken", -0.8, 1.1),
            ("angry", -0.7, 0.9),
            ("furious", -0.9, 1.1),
            ("mad", -0.6, 0.8),
            ("upset", -0.6, 0.8),
            ("annoyed", -0.5, 0.7),
            ("frustrated", -0.6, 0.8),
            ("terrible", -0.7, 0.9),
            ("awful", -0.7, 0.9),
            ("horrible", -0.8, 1.0),
            ("worst", -0.8, 1.0),
            ("bad", -0.5, 0.7),
            ("hate", -0.8, 1.0),
            ("failed", -0.6, 0.9),
            ("failure", -0.7, 1.0),
            ("fail", -0.6, 0.9),
            ("lost", -0.5, 0.8),
            ("lose", -0.5, 0.8),
            ("hurt", -0.6, 0.9),
            ("pain", -0.6, 0.9),
            ("stupid", -0.5, 0.7),
            ("dumb", -0.5, 0.7),
            ("idiot", -0.6, 0.8),
            ("useless", -0.7, 0.9),
            ("pathetic", -0.7, 0.9),
            ("tired", -0.3, 0.5),
        ];

        for (word, valence, weight) in positive_words.into_iter().chain(negative_words) {
            self.lexicon
                .insert(word.to_string(), LexiconEntry { valence, weight });
        }
    }
}

impl Default for PolarityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> PolarityAnalyzer {
        PolarityAnalyzer::new()
    }

    #[test]
    fn positive_text_scores_positive() {
        let a = analyzer();
        assert!(a.score("I won the match today!") > 0.25);
        assert!(a.score("I am so happy and excited") > 0.25);
    }

    #[test]
    fn negative_text_scores_negative() {
        let a = analyzer();
        assert!(a.score("I failed everything today") < -0.25);
        assert!(a.score("This is terrible and awful") < -0.25);
    }

    #[test]
    fn neutral_text_scores_near_zero() {
        let a = analyzer();
        assert_eq!(a.score("The sky has clouds today"), 0.0);
        assert_eq!(a.score(""), 0.0);
        assert_eq!(a.score("xk qz"), 0.0);
    }

    #[test]
    fn punctuation_does_not_hide_words() {
        let a = analyzer();
        assert!(a.score("So happy!") > 0.25);
        assert!(a.score("sad...") < -0.25);
    }

    #[test]
    fn negation_flips_and_dampens() {
        let a = analyzer();
        let sad = a.score("I am sad");
        let not_sad = a.score("I am not sad");
        assert!(not_sad > sad);
        assert!(not_sad > 0.0);
    }

    #[test]
    fn intensifier_boosts_magnitude() {
        let a = analyzer();
        let sad = a.score("I am sad");
        let very_sad = a.score("I am very sad");
        assert!(very_sad < sad);
    }

    #[test]
    fn score_stays_in_range() {
        let a = analyzer();
        let s = a.score("extremely depressed hopeless worthless miserable");
        assert!((-1.0..=1.0).contains(&s));
        assert!(s < -0.5);
    }
}
