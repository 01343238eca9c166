//! Trained mood classifiers (optional ONNX models).
//!
//! Both classifiers load once at startup via `try_load` and are treated
//! as permanently absent if their model files are missing. Inference
//! errors surface as [`ClassifierError`] and are absorbed by the
//! predictor, which falls through to the next branch.

mod emotion;
mod sentiment;

pub use emotion::{EmotionClassifier, EmotionConfig, EmotionScore};
pub use sentiment::{SentimentModel, SentimentModelConfig, SentimentPrediction};

/// Error types for the trained classifiers.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// Model file not found.
    #[error("Model file not found: {0}")]
    ModelNotFound(String),

    /// Tokenizer file not found.
    #[error("Tokenizer file not found: {0}")]
    TokenizerNotFound(String),

    /// ONNX runtime error.
    #[error("ONNX runtime error: {0}")]
    #[cfg(feature = "ml")]
    Ort(#[from] ort::Error),

    /// Tokenizer error.
    #[error("Tokenizer error: {0}")]
    #[cfg(feature = "ml")]
    Tokenizer(String),

    /// Inference error.
    #[error("Inference error: {0}")]
    Inference(String),

    /// ML feature not enabled.
    #[error("ML feature not enabled - rebuild with --features ml")]
    MlNotEnabled,
}

/// Computes softmax over a logit slice.
#[cfg(feature = "ml")]
pub(crate) fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
