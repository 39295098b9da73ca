//! # topics-core
//!
//! Foundation crate for the topics classifier.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{BundleConfig, FilterConfig};
pub use errors::{TopicsError, TopicsResult};
pub use models::{Category, CategoryLabel, RawCategory, Topic, TopicId};
