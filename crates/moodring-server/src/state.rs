//! Application state for the API server.

use std::sync::{Arc, RwLock};

use moodring_core::MoodPredictor;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Mood predictor (requires mutable access for model inference).
    pub predictor: Arc<RwLock<MoodPredictor>>,
}

impl AppState {
    /// Creates application state around an existing predictor.
    pub fn new(predictor: MoodPredictor) -> Self {
        Self {
            predictor: Arc::new(RwLock::new(predictor)),
        }
    }

    /// Creates application state with the default predictor
    /// (attempts to load both models).
    pub fn with_defaults() -> Self {
        Self::new(MoodPredictor::with_defaults())
    }

    /// Creates application state with a rules-only predictor.
    pub fn rules_only() -> Self {
        Self::new(MoodPredictor::rules_only())
    }
}
