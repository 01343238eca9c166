//! Mood vocabulary, outcomes, and the emoji/message mapping.

use serde::{Deserialize, Serialize};

/// Moods the classifiers can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Happiness, delight.
    Joy,
    /// Affection, warmth.
    Love,
    /// Astonishment.
    Surprise,
    /// Anger, frustration.
    Anger,
    /// Sadness, disappointment.
    Sadness,
    /// Worry, fear.
    Fear,
    /// No strong emotional tone.
    Neutral,
}

impl Mood {
    /// Returns all moods in vocabulary order.
    pub fn all() -> &'static [Mood] {
        &[
            Mood::Joy,
            Mood::Love,
            Mood::Surprise,
            Mood::Anger,
            Mood::Sadness,
            Mood::Fear,
            Mood::Neutral,
        ]
    }

    /// Resolves a classifier label to a mood.
    ///
    /// Exact match against the known vocabulary only - a label the
    /// vocabulary doesn't name (e.g. "disgust", or a compound string)
    /// resolves to `None` and the caller falls through. The label must
    /// already be lowercased.
    pub fn from_label(label: &str) -> Option<Mood> {
        match label {
            "joy" | "happy" => Some(Mood::Joy),
            "love" => Some(Mood::Love),
            "surprise" => Some(Mood::Surprise),
            "anger" => Some(Mood::Anger),
            "sadness" => Some(Mood::Sadness),
            "fear" => Some(Mood::Fear),
            "neutral" => Some(Mood::Neutral),
            _ => None,
        }
    }

    /// Returns the emoji shown for this mood.
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Joy => "😀",
            Mood::Love => "😀",
            Mood::Surprise => "😲",
            Mood::Anger => "😠",
            Mood::Sadness => "😞",
            Mood::Fear => "😟",
            Mood::Neutral => "😐",
        }
    }

    /// Returns the kid-friendly message shown for this mood.
    ///
    /// These strings are user-visible copy and part of the external
    /// contract - do not reword them.
    pub fn message(&self) -> &'static str {
        match self {
            Mood::Joy => "Sounds happy!",
            Mood::Love => "That sounds lovely!",
            Mood::Surprise => "That sounds surprising!",
            Mood::Anger => "You sound upset.",
            Mood::Sadness => "Seems sad.",
            Mood::Fear => "You seem worried or scared.",
            Mood::Neutral => "Feels neutral.",
        }
    }
}

/// Presentation styling hint for an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Crisis response - render as an alert.
    Alert,
    /// Disrespectful language - render as a warning.
    Warning,
    /// Unclear input - render as an informational hint.
    Info,
    /// Ordinary mood result.
    Plain,
}

/// The final outcome of a prediction.
///
/// Exactly one outcome is produced per input; the safety outcomes
/// (crisis, unclear, disrespectful) take precedence over any mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodOutcome {
    /// Self-harm language detected; fixed crisis-resource response.
    Crisis,
    /// Input judged gibberish; ask to rephrase.
    Unclear,
    /// Profanity or unkind words detected.
    Disrespectful,
    /// A classified mood.
    Mood(Mood),
}

impl MoodOutcome {
    /// Returns the emoji for this outcome.
    pub fn emoji(&self) -> &'static str {
        match self {
            MoodOutcome::Crisis => "⚠️",
            MoodOutcome::Unclear => "🤔",
            MoodOutcome::Disrespectful => "🚫",
            MoodOutcome::Mood(mood) => mood.emoji(),
        }
    }

    /// Returns the user-visible message for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            MoodOutcome::Crisis => {
                "If you're feeling this way, please talk to a trusted adult or call your local helpline immediately. You are not alone."
            }
            MoodOutcome::Unclear => "I'm not sure what you mean. Could you rephrase that?",
            MoodOutcome::Disrespectful => "Please use kind and respectful words.",
            MoodOutcome::Mood(mood) => mood.message(),
        }
    }

    /// Returns the presentation severity for this outcome.
    pub fn severity(&self) -> Severity {
        match self {
            MoodOutcome::Crisis => Severity::Alert,
            MoodOutcome::Disrespectful => Severity::Warning,
            MoodOutcome::Unclear => Severity::Info,
            MoodOutcome::Mood(_) => Severity::Plain,
        }
    }

    /// Returns the mood, if this outcome carries one.
    pub fn mood(&self) -> Option<Mood> {
        match self {
            MoodOutcome::Mood(mood) => Some(*mood),
            _ => None,
        }
    }
}

/// Which stage of the decision cascade produced the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStage {
    /// Self-harm phrase matcher (highest priority).
    SelfHarm,
    /// Gibberish heuristics.
    Gibberish,
    /// Bad-word filter.
    BadWords,
    /// Emotion classifier (ML).
    EmotionModel,
    /// Sentiment classifier (ML).
    SentimentModel,
    /// Lexicon polarity fallback (always terminal).
    Polarity,
}

/// Result of a prediction: the outcome plus decision bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodReport {
    /// The single outcome for this input.
    pub outcome: MoodOutcome,
    /// The cascade stage that decided.
    pub stage: DecisionStage,
    /// Prediction duration in microseconds.
    pub duration_us: u64,
}

impl MoodReport {
    /// Creates a new report.
    pub fn new(outcome: MoodOutcome, stage: DecisionStage, duration_us: u64) -> Self {
        Self {
            outcome,
            stage,
            duration_us,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_every_mood() {
        assert_eq!(Mood::all().len(), 7);
    }

    #[test]
    fn from_label_resolves_vocabulary() {
        assert_eq!(Mood::from_label("joy"), Some(Mood::Joy));
        assert_eq!(Mood::from_label("happy"), Some(Mood::Joy));
        assert_eq!(Mood::from_label("love"), Some(Mood::Love));
        assert_eq!(Mood::from_label("surprise"), Some(Mood::Surprise));
        assert_eq!(Mood::from_label("anger"), Some(Mood::Anger));
        assert_eq!(Mood::from_label("sadness"), Some(Mood::Sadness));
        assert_eq!(Mood::from_label("fear"), Some(Mood::Fear));
        assert_eq!(Mood::from_label("neutral"), Some(Mood::Neutral));
    }

    #[test]
    fn from_label_rejects_unknown_labels() {
        assert_eq!(Mood::from_label("disgust"), None);
        assert_eq!(Mood::from_label(""), None);
        assert_eq!(Mood::from_label("JOY"), None); // caller lowercases
    }

    #[test]
    fn from_label_requires_exact_match() {
        // Substring containment would resolve these; exact match must not.
        assert_eq!(Mood::from_label("angersurprise"), None);
        assert_eq!(Mood::from_label("joyful"), None);
        assert_eq!(Mood::from_label(" joy"), None);
    }

    #[test]
    fn mood_messages_are_fixed_copy() {
        assert_eq!(Mood::Joy.message(), "Sounds happy!");
        assert_eq!(Mood::Love.message(), "That sounds lovely!");
        assert_eq!(Mood::Surprise.message(), "That sounds surprising!");
        assert_eq!(Mood::Anger.message(), "You sound upset.");
        assert_eq!(Mood::Sadness.message(), "Seems sad.");
        assert_eq!(Mood::Fear.message(), "You seem worried or scared.");
        assert_eq!(Mood::Neutral.message(), "Feels neutral.");
    }

    #[test]
    fn mood_emojis_are_fixed() {
        assert_eq!(Mood::Joy.emoji(), "😀");
        assert_eq!(Mood::Love.emoji(), "😀");
        assert_eq!(Mood::Surprise.emoji(), "😲");
        assert_eq!(Mood::Anger.emoji(), "😠");
        assert_eq!(Mood::Sadness.emoji(), "😞");
        assert_eq!(Mood::Fear.emoji(), "😟");
        assert_eq!(Mood::Neutral.emoji(), "😐");
    }

    #[test]
    fn safety_outcome_copy_is_fixed() {
        assert_eq!(
            MoodOutcome::Crisis.message(),
            "If you're feeling this way, please talk to a trusted adult or call your local helpline immediately. You are not alone."
        );
        assert_eq!(
            MoodOutcome::Unclear.message(),
            "I'm not sure what you mean. Could you rephrase that?"
        );
        assert_eq!(
            MoodOutcome::Disrespectful.message(),
            "Please use kind and respectful words."
        );
        assert_eq!(MoodOutcome::Crisis.emoji(), "⚠️");
        assert_eq!(MoodOutcome::Unclear.emoji(), "🤔");
        assert_eq!(MoodOutcome::Disrespectful.emoji(), "🚫");
    }

    #[test]
    fn severity_maps_by_outcome_kind() {
        assert_eq!(MoodOutcome::Crisis.severity(), Severity::Alert);
        assert_eq!(MoodOutcome::Disrespectful.severity(), Severity::Warning);
        assert_eq!(MoodOutcome::Unclear.severity(), Severity::Info);
        for mood in Mood::all() {
            assert_eq!(MoodOutcome::Mood(*mood).severity(), Severity::Plain);
        }
    }

    #[test]
    fn outcome_mood_accessor() {
        assert_eq!(MoodOutcome::Mood(Mood::Fear).mood(), Some(Mood::Fear));
        assert_eq!(MoodOutcome::Crisis.mood(), None);
    }
}
