//! Test fixture loader for the topics classifier.
//!
//! Provides the sample bundle on disk, scripted inference engines, and the
//! small in-memory taxonomy used across crate tests.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::de::DeserializeOwned;
use topics_core::config::FilterConfig;
use topics_core::errors::{InferenceError, TopicsResult};
use topics_core::models::{RawCategory, Topic};
use topics_core::traits::IInferenceEngine;
use topics_taxonomy::{OverrideTable, TaxonomyTable};

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Directory of the sample bundle (config, taxonomy, overrides, labels, vocab).
pub fn bundle_dir() -> PathBuf {
    fixture_path("bundle")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// `{1: Sports, 2: Finance, 99: Unknown}`.
pub fn sample_taxonomy() -> TaxonomyTable {
    TaxonomyTable::new(
        [Topic::new(1, "Sports"), Topic::new(2, "Finance")],
        Topic::new(99, "Unknown"),
    )
}

/// Override table with `"example" → []`.
pub fn sample_overrides() -> OverrideTable {
    OverrideTable::new([("example", Vec::new())])
}

/// max 3, min weight 0.1, min share 0.2, min none 0.5.
pub fn sample_filter_config() -> FilterConfig {
    FilterConfig {
        max_categories: 3,
        min_category_weight: 0.1,
        min_normalized_weight_within_top_n: 0.2,
        min_none_weight: 0.5,
    }
}

/// Meaningless-prefix pattern used by the sample bundle.
pub const SAMPLE_PREFIX_REGEX: &str = r"^(www[0-9]*|web|ftp|wap|home|m|w|amp|mobile)\.";

/// Inference engine returning canned scores per normalized input.
///
/// Counts every call so tests can assert the engine was (or was not) used.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    scripts: HashMap<String, Vec<RawCategory>>,
    fallback: Option<Vec<RawCategory>>,
    calls: AtomicUsize,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine scripted from `scores/scripted.json`.
    pub fn from_fixture() -> Self {
        Self {
            scripts: load_fixture("scores/scripted.json"),
            ..Self::default()
        }
    }

    pub fn with_script(mut self, input: &str, scores: Vec<RawCategory>) -> Self {
        self.scripts.insert(input.to_string(), scores);
        self
    }

    /// Scores returned for inputs without a script.
    pub fn with_fallback(mut self, scores: Vec<RawCategory>) -> Self {
        self.fallback = Some(scores);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IInferenceEngine for ScriptedEngine {
    fn score(&self, normalized: &str) -> TopicsResult<Vec<RawCategory>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.scripts
            .get(normalized)
            .or(self.fallback.as_ref())
            .cloned()
            .ok_or_else(|| {
                InferenceError::Failed {
                    reason: format!("no scripted scores for {normalized:?}"),
                }
                .into()
            })
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Inference engine that always fails.
#[derive(Debug, Default)]
pub struct FailingEngine;

impl IInferenceEngine for FailingEngine {
    fn score(&self, _normalized: &str) -> TopicsResult<Vec<RawCategory>> {
        Err(InferenceError::Failed {
            reason: "engine offline".to_string(),
        }
        .into())
    }

    fn name(&self) -> &str {
        "failing"
    }
}
