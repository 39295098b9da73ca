use serde::{Deserialize, Serialize};

use super::defaults;

/// Post-processing applied to raw model outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputActivation {
    /// Outputs are already probabilities.
    #[default]
    None,
    Softmax,
    Sigmoid,
}

/// Model artifact configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_filename")]
    pub model_filename: String,
    /// One label per line; line index is the output index.
    #[serde(default = "default_labels_filename")]
    pub labels_filename: String,
    /// WordPiece vocabulary, one token per line.
    #[serde(default = "default_vocab_filename")]
    pub vocab_filename: String,
    #[serde(default = "default_max_sequence_length")]
    pub max_sequence_length: usize,
    #[serde(default)]
    pub output_activation: OutputActivation,
    #[serde(default = "default_use_token_type_ids")]
    pub use_token_type_ids: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_filename: default_model_filename(),
            labels_filename: default_labels_filename(),
            vocab_filename: default_vocab_filename(),
            max_sequence_length: default_max_sequence_length(),
            output_activation: OutputActivation::default(),
            use_token_type_ids: default_use_token_type_ids(),
        }
    }
}

fn default_model_filename() -> String {
    defaults::DEFAULT_MODEL_FILENAME.to_string()
}

fn default_labels_filename() -> String {
    defaults::DEFAULT_LABELS_FILENAME.to_string()
}

fn default_vocab_filename() -> String {
    defaults::DEFAULT_VOCAB_FILENAME.to_string()
}

fn default_max_sequence_length() -> usize {
    defaults::DEFAULT_MAX_SEQUENCE_LENGTH
}

fn default_use_token_type_ids() -> bool {
    defaults::DEFAULT_USE_TOKEN_TYPE_IDS
}
