//! Emotion classifier (transformer via ONNX).
//!
//! Multi-class emotion model: one score per label in a fixed vocabulary.
//! Loaded once at startup; absent model files mean the classifier is
//! absent for the process lifetime.

#[cfg(feature = "ml")]
use std::path::Path;

use super::ClassifierError;

/// Configuration for the emotion classifier.
#[derive(Debug, Clone)]
pub struct EmotionConfig {
    /// Path to the ONNX model file.
    pub model_path: String,
    /// Path to the tokenizer.json file.
    pub tokenizer_path: String,
    /// Maximum sequence length (tokens).
    pub max_length: usize,
    /// Output labels in the model's head order.
    pub labels: Vec<String>,
    /// Minimum confidence for a prediction to resolve a mood
    /// (strict greater-than; default: 0.4).
    pub min_score: f32,
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self {
            model_path: "models/emotion.onnx".to_string(),
            tokenizer_path: "models/emotion_tokenizer.json".to_string(),
            max_length: 512,
            labels: [
                "anger",
                "fear",
                "joy",
                "love",
                "neutral",
                "sadness",
                "surprise",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            min_score: 0.4,
        }
    }
}

/// One label's score from the emotion model.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionScore {
    /// Lowercased emotion label.
    pub label: String,
    /// Probability-like confidence in [0, 1].
    pub score: f32,
}

/// ONNX-backed emotion classifier.
#[cfg(feature = "ml")]
pub struct EmotionClassifier {
    session: ort::session::Session,
    tokenizer: tokenizers::Tokenizer,
    config: EmotionConfig,
}

#[cfg(feature = "ml")]
impl EmotionClassifier {
    /// Creates a classifier by loading the ONNX model and tokenizer.
    pub fn new(config: EmotionConfig) -> Result<Self, ClassifierError> {
        use ort::session::{builder::GraphOptimizationLevel, Session};

        if !Path::new(&config.model_path).exists() {
            return Err(ClassifierError::ModelNotFound(config.model_path.clone()));
        }
        if !Path::new(&config.tokenizer_path).exists() {
            return Err(ClassifierError::TokenizerNotFound(
                config.tokenizer_path.clone(),
            ));
        }

        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(1)?
            .commit_from_file(&config.model_path)?;

        let tokenizer = tokenizers::Tokenizer::from_file(&config.tokenizer_path)
            .map_err(|e| ClassifierError::Tokenizer(e.to_string()))?;

        Ok(Self {
            session,
            tokenizer,
            config,
        })
    }

    /// Attempts to load the classifier, returning None if it cannot load.
    ///
    /// This is the preferred way to initialize when graceful fallback is
    /// desired.
    pub fn try_load(config: EmotionConfig) -> Option<Self> {
        Self::new(config).ok()
    }

    /// Returns the resolve threshold.
    pub fn min_score(&self) -> f32 {
        self.config.min_score
    }

    /// Classifies the text and returns one score per label.
    pub fn classify(&mut self, text: &str) -> Result<Vec<EmotionScore>, ClassifierError> {
        use ort::value::Tensor;

        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| ClassifierError::Tokenizer(e.to_string()))?;

        let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();

        let seq_len = input_ids.len().min(self.config.max_length);
        let input_ids = input_ids[..seq_len].to_vec();
        let attention_mask = attention_mask[..seq_len].to_vec();

        let input_ids_tensor = Tensor::from_array(([1, seq_len], input_ids.into_boxed_slice()))?;
        let attention_mask_tensor =
            Tensor::from_array(([1, seq_len], attention_mask.into_boxed_slice()))?;

        let outputs = self.session.run(ort::inputs![
            "input_ids" => input_ids_tensor,
            "attention_mask" => attention_mask_tensor
        ])?;

        let logits_tensor = outputs["logits"].try_extract_tensor::<f32>().map_err(|e| {
            ClassifierError::Inference(format!("Failed to extract logits: {}", e))
        })?;

        let shape = logits_tensor.0;
        let logits_data = logits_tensor.1;

        let n_labels = self.config.labels.len();
        let dims: Vec<_> = shape.iter().collect();
        if dims.len() != 2 || *dims[0] != 1 || *dims[1] != n_labels as i64 {
            return Err(ClassifierError::Inference(format!(
                "Unexpected output shape: {:?}",
                dims
            )));
        }

        let probs = super::softmax(&logits_data[..n_labels]);

        Ok(self
            .config
            .labels
            .iter()
            .zip(probs)
            .map(|(label, score)| EmotionScore {
                label: label.to_lowercase(),
                score,
            })
            .collect())
    }
}

/// Stub classifier when the ML feature is not enabled.
///
/// Never loads; the predictor falls through as if the model were absent.
#[cfg(not(feature = "ml"))]
pub struct EmotionClassifier {
    _config: EmotionConfig,
}

#[cfg(not(feature = "ml"))]
impl EmotionClassifier {
    /// Creates a stub classifier (ML feature not enabled).
    pub fn new(_config: EmotionConfig) -> Result<Self, ClassifierError> {
        Err(ClassifierError::MlNotEnabled)
    }

    /// Attempts to load the classifier (always None when ML is disabled).
    pub fn try_load(_config: EmotionConfig) -> Option<Self> {
        None
    }

    /// Returns the resolve threshold.
    pub fn min_score(&self) -> f32 {
        self._config.min_score
    }

    /// Classifies text (ML feature not enabled).
    pub fn classify(&mut self, _text: &str) -> Result<Vec<EmotionScore>, ClassifierError> {
        Err(ClassifierError::MlNotEnabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = EmotionConfig::default();
        assert_eq!(config.max_length, 512);
        assert_eq!(config.min_score, 0.4);
        assert_eq!(config.labels.len(), 7);
        assert!(config.labels.iter().any(|l| l == "love"));
        assert!(config.labels.iter().any(|l| l == "neutral"));
    }

    #[test]
    fn try_load_returns_none_when_model_missing() {
        let config = EmotionConfig {
            model_path: "nonexistent/emotion.onnx".to_string(),
            tokenizer_path: "nonexistent/tokenizer.json".to_string(),
            ..Default::default()
        };
        assert!(EmotionClassifier::try_load(config).is_none());
    }
}
