//! # topics-classifier
//!
//! Turns a raw domain, URL, or token into a non-empty topic list.
//! Input is normalized, checked against the override table, and otherwise
//! scored by an inference engine whose per-category confidences are ranked
//! and thresholded. A result is either exactly `[unknown]` or a non-empty
//! list without the unknown topic.

pub mod bundle;
pub mod filter;
pub mod normalizer;
pub mod pipeline;
pub mod spans;

pub use bundle::ModelBundle;
pub use filter::{FilterEvaluation, FilterOutcome, ScoreFilter};
pub use normalizer::{extract_domain, looks_like_url, InputNormalizer};
pub use pipeline::{Classification, ClassificationPipeline, ClassificationSource};
