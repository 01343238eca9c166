//! API request and response models.

use moodring_core::{DecisionStage, Mood, Severity};
use serde::{Deserialize, Serialize};

/// Request body for POST /api/mood.
#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    /// The text to classify.
    pub text: String,
}

/// Response body for POST /api/mood.
#[derive(Debug, Serialize)]
pub struct MoodResponse {
    /// Emoji from the fixed vocabulary.
    pub emoji: String,
    /// Kid-friendly message from the fixed vocabulary.
    pub message: String,
    /// The classified mood, absent for safety outcomes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    /// Styling hint for the caller (alert, warning, info, plain).
    pub severity: Severity,
    /// Which cascade stage decided.
    pub stage: DecisionStage,
    /// Prediction latency in milliseconds.
    pub latency_ms: u64,
}

/// Response body for GET /api/health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" when the server is up.
    pub status: &'static str,
    /// Whether the emotion model loaded.
    pub emotion_model: bool,
    /// Whether the sentiment model loaded.
    pub sentiment_model: bool,
}
