//! The mood prediction cascade.
//!
//! Orchestrates the safety detectors, the trained classifiers, and the
//! polarity fallback as one ordered, short-circuiting decision chain:
//!
//! 1. Self-harm phrases (highest priority, crisis response)
//! 2. Gibberish heuristics (ask to rephrase)
//! 3. Bad words (ask for kind words)
//! 4. Emotion classifier, if loaded and confident
//! 5. Sentiment classifier, if loaded
//! 6. Lexicon polarity fallback (always terminal)
//!
//! Exactly one outcome per input; classifier absence or failure never
//! surfaces to the caller.

use std::time::Instant;

use tracing::{debug, warn};

use crate::classify::{
    EmotionClassifier, EmotionConfig, EmotionScore, SentimentModel, SentimentModelConfig,
};
use crate::gibberish::{GibberishConfig, GibberishDetector};
use crate::mood::{DecisionStage, Mood, MoodOutcome, MoodReport};
use crate::polarity::PolarityAnalyzer;
use crate::safety::{BadWordFilter, SelfHarmDetector};

/// Configuration for the mood predictor.
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    /// Gibberish detection thresholds.
    pub gibberish: GibberishConfig,
    /// Emotion classifier configuration (None disables the branch).
    pub emotion: Option<EmotionConfig>,
    /// Sentiment classifier configuration (None disables the branch).
    pub sentiment: Option<SentimentModelConfig>,
    /// Polarity above which the fallback resolves Joy (default: 0.25).
    pub happy_cutoff: f32,
    /// Polarity below which the fallback resolves Sadness (default: -0.25).
    pub sad_cutoff: f32,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            gibberish: GibberishConfig::default(),
            emotion: Some(EmotionConfig::default()),
            sentiment: Some(SentimentModelConfig::default()),
            happy_cutoff: 0.25,
            sad_cutoff: -0.25,
        }
    }
}

impl PredictorConfig {
    /// Creates a config with both trained classifiers disabled.
    pub fn rules_only() -> Self {
        Self {
            emotion: None,
            sentiment: None,
            ..Default::default()
        }
    }
}

/// The mood prediction pipeline.
///
/// Models load once at construction; a model that fails to load leaves
/// its branch permanently absent and the cascade degrades to the
/// polarity fallback, which cannot fail. `predict` is total: it never
/// panics, never errors, and always returns one outcome from the fixed
/// vocabulary.
pub struct MoodPredictor {
    self_harm: SelfHarmDetector,
    bad_words: BadWordFilter,
    gibberish: GibberishDetector,
    emotion: Option<EmotionClassifier>,
    sentiment: Option<SentimentModel>,
    polarity: PolarityAnalyzer,
    config: PredictorConfig,
}

impl MoodPredictor {
    /// Creates a predictor, attempting to load any configured models.
    ///
    /// Missing or unloadable model files are not an error - the
    /// corresponding branch is skipped for the process lifetime.
    pub fn new(config: PredictorConfig) -> Self {
        let emotion = config
            .emotion
            .as_ref()
            .and_then(|cfg| EmotionClassifier::try_load(cfg.clone()));
        let sentiment = config
            .sentiment
            .as_ref()
            .and_then(|cfg| SentimentModel::try_load(cfg.clone()));

        if config.emotion.is_some() && emotion.is_none() {
            debug!("emotion model unavailable, branch disabled");
        }
        if config.sentiment.is_some() && sentiment.is_none() {
            debug!("sentiment model unavailable, branch disabled");
        }

        Self {
            self_harm: SelfHarmDetector::new(),
            bad_words: BadWordFilter::new(),
            gibberish: GibberishDetector::new(config.gibberish.clone()),
            emotion,
            sentiment,
            polarity: PolarityAnalyzer::new(),
            config,
        }
    }

    /// Creates a predictor with default settings.
    pub fn with_defaults() -> Self {
        Self::new(PredictorConfig::default())
    }

    /// Creates a rules-only predictor (no trained classifiers).
    pub fn rules_only() -> Self {
        Self::new(PredictorConfig::rules_only())
    }

    /// Returns true if the emotion classifier loaded.
    pub fn has_emotion_model(&self) -> bool {
        self.emotion.is_some()
    }

    /// Returns true if the sentiment classifier loaded.
    pub fn has_sentiment_model(&self) -> bool {
        self.sentiment.is_some()
    }

    /// Classifies the text and returns exactly one outcome.
    pub fn predict(&mut self, text: &str) -> MoodReport {
        let start = Instant::now();
        let text = text.trim();

        if let Some(phrase) = self.self_harm.find_match(text) {
            warn!(matched = %phrase, "self-harm language detected");
            return MoodReport::new(
                MoodOutcome::Crisis,
                DecisionStage::SelfHarm,
                start.elapsed().as_micros() as u64,
            );
        }

        let polarity = self.polarity.score(text);

        if let Some(reason) = self.gibberish.detect(text, Some(polarity)) {
            debug!(?reason, "input judged gibberish");
            return MoodReport::new(
                MoodOutcome::Unclear,
                DecisionStage::Gibberish,
                start.elapsed().as_micros() as u64,
            );
        }

        let bad = self.bad_words.matches(text);
        if !bad.is_empty() {
            debug!(words = ?bad, "bad words detected");
            return MoodReport::new(
                MoodOutcome::Disrespectful,
                DecisionStage::BadWords,
                start.elapsed().as_micros() as u64,
            );
        }

        if let Some(classifier) = self.emotion.as_mut() {
            let min_score = classifier.min_score();
            match classifier.classify(text) {
                Ok(scores) => {
                    if let Some(mood) = resolve_emotion(&scores, min_score) {
                        return MoodReport::new(
                            MoodOutcome::Mood(mood),
                            DecisionStage::EmotionModel,
                            start.elapsed().as_micros() as u64,
                        );
                    }
                }
                // Graceful degradation: an inference failure is the same
                // as no confident result.
                Err(e) => warn!("emotion classifier failed: {}", e),
            }
        }

        if let Some(model) = self.sentiment.as_mut() {
            match model.classify(text) {
                Ok(prediction) => {
                    return MoodReport::new(
                        MoodOutcome::Mood(sentiment_mood(&prediction.label)),
                        DecisionStage::SentimentModel,
                        start.elapsed().as_micros() as u64,
                    );
                }
                Err(e) => warn!("sentiment classifier failed: {}", e),
            }
        }

        let mood = polarity_mood(polarity, self.config.happy_cutoff, self.config.sad_cutoff);
        MoodReport::new(
            MoodOutcome::Mood(mood),
            DecisionStage::Polarity,
            start.elapsed().as_micros() as u64,
        )
    }
}

impl Default for MoodPredictor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Resolves the emotion model's scores to a mood.
///
/// Takes the top-scoring label; it must both name a vocabulary mood and
/// clear the threshold (strict greater-than) to resolve.
fn resolve_emotion(scores: &[EmotionScore], min_score: f32) -> Option<Mood> {
    let best = scores
        .iter()
        .max_by(|a, b| a.score.partial_cmp(&b.score).unwrap())?;
    let mood = Mood::from_label(&best.label.to_lowercase())?;
    (best.score > min_score).then_some(mood)
}

/// Maps a sentiment label to a mood; unrecognized labels are neutral.
fn sentiment_mood(label: &str) -> Mood {
    match label {
        "positive" => Mood::Joy,
        "negative" => Mood::Sadness,
        _ => Mood::Neutral,
    }
}

/// Maps a polarity score to a mood via the configured cutoffs.
fn polarity_mood(polarity: f32, happy_cutoff: f32, sad_cutoff: f32) -> Mood {
    if polarity > happy_cutoff {
        Mood::Joy
    } else if polarity < sad_cutoff {
        Mood::Sadness
    } else {
        Mood::Neutral
    }
}
