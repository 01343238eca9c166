//! API route handlers.

use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::models::{HealthResponse, MoodRequest, MoodResponse};
use crate::state::AppState;

/// POST /api/mood - classify text and return the outcome.
pub async fn check_mood(
    State(state): State<AppState>,
    Json(req): Json<MoodRequest>,
) -> Result<Json<MoodResponse>> {
    // Empty input is the presentation layer's validation; the core
    // itself would degrade to the unclear outcome.
    if req.text.trim().is_empty() {
        return Err(ApiError::BadRequest("text must not be empty".to_string()));
    }

    debug!(text_len = req.text.len(), "Checking mood");

    let report = {
        let mut predictor = state
            .predictor
            .write()
            .map_err(|_| ApiError::Internal("predictor lock poisoned".to_string()))?;
        predictor.predict(&req.text)
    };

    Ok(Json(MoodResponse {
        emoji: report.outcome.emoji().to_string(),
        message: report.outcome.message().to_string(),
        mood: report.outcome.mood(),
        severity: report.outcome.severity(),
        stage: report.stage,
        latency_ms: report.duration_us / 1000,
    }))
}

/// GET /api/health - liveness and model availability.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    let predictor = state
        .predictor
        .read()
        .map_err(|_| ApiError::Internal("predictor lock poisoned".to_string()))?;

    Ok(Json(HealthResponse {
        status: "ok",
        emotion_model: predictor.has_emotion_model(),
        sentiment_model: predictor.has_sentiment_model(),
    }))
}
