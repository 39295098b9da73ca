//! ONNX Runtime topic classifier.
//!
//! Loads a BERT-style sequence classifier via the `ort` crate (v2). Input is
//! a single sequence (`input_ids`, `attention_mask`, optionally
//! `token_type_ids`); the first output holds one score per label.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use topics_core::config::{ModelConfig, OutputActivation};
use topics_core::errors::{InferenceError, TopicsResult};
use topics_core::models::RawCategory;
use topics_core::traits::IInferenceEngine;
use tracing::debug;

use crate::activation;
use crate::labels::LabelMap;
use crate::tokenizer::WordPieceTokenizer;

/// Text classifier backed by an ONNX Runtime session.
pub struct OnnxTopicModel {
    /// `run` needs `&mut Session`; the Mutex gives `&self` access.
    session: Mutex<Session>,
    tokenizer: WordPieceTokenizer,
    labels: LabelMap,
    activation: OutputActivation,
    use_token_type_ids: bool,
    model_name: String,
}

impl OnnxTopicModel {
    /// Load the model, vocabulary, and labels.
    ///
    /// # Errors
    /// `InferenceError::ModelLoadFailed` or `TokenizerLoadFailed`.
    pub fn load(
        model_path: &Path,
        vocab_path: &Path,
        labels_path: &Path,
        config: &ModelConfig,
    ) -> TopicsResult<Self> {
        let load_failed = |reason: String| InferenceError::ModelLoadFailed {
            path: model_path.display().to_string(),
            reason,
        };

        if !model_path.exists() {
            return Err(load_failed("model file not found".to_string()).into());
        }

        let tokenizer = WordPieceTokenizer::load(vocab_path, config.max_sequence_length)?;
        let labels = LabelMap::load(labels_path)?;
        if labels.is_empty() {
            return Err(InferenceError::ModelLoadFailed {
                path: labels_path.display().to_string(),
                reason: "labels file is empty".to_string(),
            }
            .into());
        }

        let session = Session::builder()
            .map_err(|e| load_failed(e.to_string()))?
            .with_intra_threads(2)
            .map_err(|e| load_failed(e.to_string()))?
            .commit_from_file(model_path)
            .map_err(|e| load_failed(e.to_string()))?;

        let model_name = model_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        debug!(
            model = %model_name,
            labels = labels.len(),
            vocab = tokenizer.vocab_size(),
            "ONNX topic model loaded"
        );

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            labels,
            activation: config.output_activation,
            use_token_type_ids: config.use_token_type_ids,
            model_name,
        })
    }

    /// Run the model on `text`, returning raw (pre-activation) output scores.
    fn run(&self, text: &str) -> Result<Vec<f32>, InferenceError> {
        let input_ids = self.tokenizer.encode(text);
        let seq_len = input_ids.len() as i64;
        let attention_mask = vec![1i64; input_ids.len()];
        let token_type_ids = vec![0i64; input_ids.len()];

        let tensor = |data: Vec<i64>| {
            Tensor::from_array((vec![1i64, seq_len], data)).map_err(|e| InferenceError::Failed {
                reason: format!("tensor creation error: {e}"),
            })
        };
        let ids_tensor = tensor(input_ids)?;
        let mask_tensor = tensor(attention_mask)?;

        let mut session = self.session.lock().map_err(|e| InferenceError::Failed {
            reason: format!("session lock poisoned: {e}"),
        })?;

        let outputs = if self.use_token_type_ids {
            let type_tensor = tensor(token_type_ids)?;
            session.run(ort::inputs![ids_tensor, mask_tensor, type_tensor])
        } else {
            session.run(ort::inputs![ids_tensor, mask_tensor])
        }
        .map_err(|e| InferenceError::Failed {
            reason: e.to_string(),
        })?;

        let (_name, output) = outputs.iter().next().ok_or_else(|| InferenceError::Failed {
            reason: "no output tensor".to_string(),
        })?;

        let (shape, data) =
            output
                .try_extract_tensor::<f32>()
                .map_err(|e| InferenceError::Failed {
                    reason: format!("tensor extraction failed: {e}"),
                })?;

        let width = match shape.len() {
            // [batch=1, labels]
            2 => shape[1] as usize,
            // [labels]
            1 => shape[0] as usize,
            _ => {
                return Err(InferenceError::Failed {
                    reason: format!("unexpected output shape: {shape:?}"),
                })
            }
        };
        Ok(data[..width.min(data.len())].to_vec())
    }
}

/// Apply `activation` and pair each output with its label.
///
/// # Errors
/// `InferenceError::LabelCountMismatch` when output and label counts differ.
pub fn scores_to_categories(
    mut scores: Vec<f32>,
    labels: &LabelMap,
    activation: OutputActivation,
) -> Result<Vec<RawCategory>, InferenceError> {
    if scores.len() != labels.len() {
        return Err(InferenceError::LabelCountMismatch {
            outputs: scores.len(),
            labels: labels.len(),
        });
    }
    activation::apply(activation, &mut scores);
    Ok(scores
        .into_iter()
        .enumerate()
        .filter_map(|(i, score)| {
            labels.get(i).map(|label| RawCategory {
                label: label.clone(),
                score,
            })
        })
        .collect())
}

impl IInferenceEngine for OnnxTopicModel {
    fn score(&self, normalized: &str) -> TopicsResult<Vec<RawCategory>> {
        let raw = self.run(normalized)?;
        Ok(scores_to_categories(raw, &self.labels, self.activation)?)
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topics_core::models::CategoryLabel;

    fn labels() -> LabelMap {
        LabelMap::from_lines(["1", "2", "99"])
    }

    #[test]
    fn pairs_scores_with_labels_in_order() {
        let categories =
            scores_to_categories(vec![0.6, 0.3, 0.1], &labels(), OutputActivation::None).unwrap();
        assert_eq!(
            categories,
            vec![
                RawCategory::new(CategoryLabel::Id(1), 0.6),
                RawCategory::new(CategoryLabel::Id(2), 0.3),
                RawCategory::new(CategoryLabel::Id(99), 0.1),
            ]
        );
    }

    #[test]
    fn applies_softmax_to_logits() {
        let categories =
            scores_to_categories(vec![3.0, 1.0, 0.0], &labels(), OutputActivation::Softmax)
                .unwrap();
        let total: f32 = categories.iter().map(|c| c.score).sum();
        assert!((total - 1.0).abs() < 1e-6);
        assert!(categories[0].score > 0.8);
    }

    #[test]
    fn label_count_mismatch_is_error() {
        let err = scores_to_categories(vec![0.5, 0.5], &labels(), OutputActivation::None)
            .unwrap_err();
        assert!(matches!(
            err,
            InferenceError::LabelCountMismatch {
                outputs: 2,
                labels: 3
            }
        ));
    }
}
