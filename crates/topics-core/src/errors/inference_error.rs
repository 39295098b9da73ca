/// Inference engine errors.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("model load failed: {path}: {reason}")]
    ModelLoadFailed { path: String, reason: String },

    #[error("tokenizer load failed: {path}: {reason}")]
    TokenizerLoadFailed { path: String, reason: String },

    #[error("inference failed: {reason}")]
    Failed { reason: String },

    #[error("inference returned no categories for {input:?}")]
    EmptyResult { input: String },

    #[error("invalid score {score} for category {label}")]
    InvalidScore { label: String, score: f32 },

    #[error("label count mismatch: model produced {outputs} scores, {labels} labels loaded")]
    LabelCountMismatch { outputs: usize, labels: usize },
}
