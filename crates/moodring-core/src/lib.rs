//! Moodring Core - safety gating and mood classification.
//!
//! This crate is the whole decision pipeline behind Moodring: a
//! kid-safe text mood classifier that layers safety filtering ahead of
//! trained classifiers with a rule-based fallback.
//!
//! ## Pipeline
//!
//! [`MoodPredictor::predict`] runs one ordered, short-circuiting
//! cascade per input:
//!
//! 1. Self-harm phrase detection → crisis response
//! 2. Gibberish heuristics → ask to rephrase
//! 3. Bad-word filter → ask for kind words
//! 4. Emotion classifier (ONNX, optional, `ml` feature)
//! 5. Sentiment classifier (ONNX, optional, `ml` feature)
//! 6. Lexicon polarity fallback (always available)
//!
//! The cascade is total: every call returns exactly one
//! [`MoodOutcome`] from the fixed emoji/message vocabulary, and no
//! classifier failure ever reaches the caller.
//!
//! ## Example
//!
//! ```
//! use moodring_core::{MoodPredictor, Severity};
//!
//! let mut predictor = MoodPredictor::rules_only();
//! let report = predictor.predict("I won the match today!");
//! assert_eq!(report.outcome.emoji(), "😀");
//! assert_eq!(report.outcome.severity(), Severity::Plain);
//! ```

pub mod classify;
pub mod gibberish;
pub mod mood;
pub mod normalize;
pub mod polarity;
pub mod predictor;
pub mod safety;

pub use classify::{
    ClassifierError, EmotionClassifier, EmotionConfig, EmotionScore, SentimentModel,
    SentimentModelConfig, SentimentPrediction,
};
pub use gibberish::{GibberishConfig, GibberishDetector, GibberishReason};
pub use mood::{DecisionStage, Mood, MoodOutcome, MoodReport, Severity};
pub use normalize::normalize;
pub use polarity::PolarityAnalyzer;
pub use predictor::{MoodPredictor, PredictorConfig};
pub use safety::{BadWordFilter, SelfHarmDetector};
