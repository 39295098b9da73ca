mod config_error;
mod inference_error;
mod topics_error;

pub use config_error::ConfigError;
pub use inference_error::InferenceError;
pub use topics_error::{TopicsError, TopicsResult};
