use super::{ConfigError, InferenceError};
use crate::models::TopicId;

/// Top-level error type for the topics classifier.
#[derive(Debug, thiserror::Error)]
pub enum TopicsError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("inference error: {0}")]
    Inference(#[from] InferenceError),

    #[error("topic {id} is not in the taxonomy")]
    UnknownTopicReference { id: TopicId },
}

pub type TopicsResult<T> = Result<T, TopicsError>;
