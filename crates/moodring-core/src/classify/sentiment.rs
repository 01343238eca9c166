//! Binary sentiment classifier (transformer via ONNX).
//!
//! Second-chance classifier behind the emotion model: maps text to a
//! single positive/negative label. Same load-once, fail-soft lifecycle
//! as the emotion classifier.

#[cfg(feature = "ml")]
use std::path::Path;

use super::ClassifierError;

/// Configuration for the sentiment classifier.
#[derive(Debug, Clone)]
pub struct SentimentModelConfig {
    /// Path to the ONNX model file.
    pub model_path: String,
    /// Path to the tokenizer.json file.
    pub tokenizer_path: String,
    /// Maximum sequence length (tokens).
    pub max_length: usize,
    /// Output labels in the model's head order.
    pub labels: Vec<String>,
}

impl Default for SentimentModelConfig {
    fn default() -> Self {
        Self {
            model_path: "models/sentiment.onnx".to_string(),
            tokenizer_path: "models/sentiment_tokenizer.json".to_string(),
            max_length: 512,
            labels: ["negative", "positive"].iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The sentiment model's best label for a text.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentPrediction {
    /// Lowercased sentiment label (classifier-specific vocabulary).
    pub label: String,
    /// Probability-like confidence in [0, 1].
    pub score: f32,
}

/// ONNX-backed binary sentiment classifier.
#[cfg(feature = "ml")]
pub struct SentimentModel {
    session: ort::session::Session,
    tokenizer: tokenizers::Tokenizer,
    config: SentimentModelConfig,
}

#[cfg(feature = "ml")]
impl SentimentModel {
    /// Creates a classifier by loading the ONNX model and tokenizer.
    pub fn new(config: SentimentModelConfig) -> Result<Self, ClassifierError> {
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
    pub fn try_load(config: SentimentModelConfig) -> Option<Self> {
        Self::new(config).ok()
    }

    /// Classifies the text and returns the best label.
    pub fn classify(&mut self, text: &str) -> Result<SentimentPrediction, ClassifierError> {
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
        let (best_idx, best_prob) = probs
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
            .ok_or_else(|| ClassifierError::Inference("Empty label set".to_string()))?;

        Ok(SentimentPrediction {
            label: self.config.labels[best_idx].to_lowercase(),
            score: best_prob,
        })
    }
}

/// Stub classifier when the ML feature is not enabled.
#[cfg(not(feature = "ml"))]
pub struct SentimentModel {
    _config: SentimentModelConfig,
}

#[cfg(not(feature = "ml"))]
impl SentimentModel {
    /// Creates a stub classifier (ML feature not enabled).
    pub fn new(_config: SentimentModelConfig) -> Result<Self, ClassifierError> {
        Err(ClassifierError::MlNotEnabled)
    }

    /// Attempts to load the classifier (always None when ML is disabled).
    pub fn try_load(_config: SentimentModelConfig) -> Option<Self> {
        None
    }

    /// Classifies text (ML feature not enabled).
    pub fn classify(&mut self, _text: &str) -> Result<SentimentPrediction, ClassifierError> {
        Err(ClassifierError::MlNotEnabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = SentimentModelConfig::default();
        assert_eq!(config.max_length, 512);
        assert_eq!(config.labels, vec!["negative", "positive"]);
    }

    #[test]
    fn try_load_returns_none_when_model_missing() {
        let config = SentimentModelConfig {
            model_path: "nonexistent/sentiment.onnx".to_string(),
            tokenizer_path: "nonexistent/tokenizer.json".to_string(),
            ..Default::default()
        };
        assert!(SentimentModel::try_load(config).is_none());
    }
}
