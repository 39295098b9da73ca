use crate::errors::TopicsResult;
use crate::models::RawCategory;

/// Opaque text scorer producing per-category confidences.
pub trait IInferenceEngine: Send + Sync {
    /// Score a normalized input, returning one entry per taxonomy category.
    fn score(&self, normalized: &str) -> TopicsResult<Vec<RawCategory>>;

    /// Human-readable engine name.
    fn name(&self) -> &str;
}
