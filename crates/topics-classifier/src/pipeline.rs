//! ClassificationPipeline: normalize → override check → infer → filter.

use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use topics_core::config::{BundleConfig, FilterConfig};
use topics_core::errors::{ConfigError, InferenceError, TopicsError, TopicsResult};
use topics_core::models::{Category, RawCategory, Topic, TopicId};
use topics_core::traits::IInferenceEngine;
use topics_taxonomy::{OverrideTable, TaxonomyTable};
use tracing::debug;

use crate::filter::{FilterEvaluation, ScoreFilter};
use crate::normalizer::InputNormalizer;

/// How a classification was decided.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassificationSource {
    /// The normalized input matched an override entry.
    Override,
    /// The inference engine scored the input.
    Model { evaluation: FilterEvaluation },
}

/// Full record of one classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub input: String,
    pub normalized: String,
    pub source: ClassificationSource,
    /// Never empty.
    pub topics: Vec<Topic>,
}

/// Classifies inputs against read-only reference data and an inference engine.
///
/// Holds no mutable state; `classify` may run concurrently from any thread.
pub struct ClassificationPipeline {
    normalizer: InputNormalizer,
    taxonomy: Arc<TaxonomyTable>,
    overrides: Arc<OverrideTable>,
    filter: FilterConfig,
    engine: Arc<dyn IInferenceEngine>,
}

impl ClassificationPipeline {
    pub fn new(
        normalizer: InputNormalizer,
        taxonomy: Arc<TaxonomyTable>,
        overrides: Arc<OverrideTable>,
        filter: FilterConfig,
        engine: Arc<dyn IInferenceEngine>,
    ) -> Self {
        Self {
            normalizer,
            taxonomy,
            overrides,
            filter,
            engine,
        }
    }

    /// Assemble from a bundle config and already-loaded tables.
    pub fn from_config(
        config: &BundleConfig,
        taxonomy: Arc<TaxonomyTable>,
        overrides: Arc<OverrideTable>,
        engine: Arc<dyn IInferenceEngine>,
    ) -> Result<Self, ConfigError> {
        config.filter.validate()?;
        let normalizer = InputNormalizer::new(&config.meaningless_prefix_regex)?;
        Ok(Self::new(normalizer, taxonomy, overrides, config.filter, engine))
    }

    /// Classify one input, returning its topics.
    pub fn classify(&self, raw: &str) -> TopicsResult<Vec<Topic>> {
        self.classify_detailed(raw).map(|c| c.topics)
    }

    /// Classify one input, returning the full decision record.
    ///
    /// # Errors
    /// Engine failures and invalid engine output propagate; an override that
    /// references a topic missing from the taxonomy yields
    /// `TopicsError::UnknownTopicReference`.
    pub fn classify_detailed(&self, raw: &str) -> TopicsResult<Classification> {
        let _span = crate::classify_span!(raw).entered();
        let normalized = self.normalizer.normalize(raw);

        if let Some(ids) = self.overrides.lookup(&normalized) {
            let topics = self.resolve_override(ids)?;
            debug!(normalized = %normalized, topics = topics.len(), "override hit");
            return Ok(Classification {
                input: raw.to_string(),
                normalized,
                source: ClassificationSource::Override,
                topics,
            });
        }

        let raw_categories = {
            let _span = crate::inference_span!(self.engine.name()).entered();
            self.engine.score(&normalized)?
        };
        let categories = self.validate_categories(&normalized, &raw_categories)?;
        let evaluation = ScoreFilter::evaluate(&categories, &self.filter, &self.taxonomy)?;
        debug!(
            normalized = %normalized,
            outcome = ?evaluation.outcome,
            topics = evaluation.topics.len(),
            "model classification"
        );

        Ok(Classification {
            input: raw.to_string(),
            normalized,
            topics: evaluation.topics.clone(),
            source: ClassificationSource::Model { evaluation },
        })
    }

    /// Classify many inputs in parallel. Output order matches input order.
    pub fn classify_batch<S>(&self, inputs: &[S]) -> Vec<TopicsResult<Vec<Topic>>>
    where
        S: AsRef<str> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.classify(input.as_ref()))
            .collect()
    }

    /// Like [`classify_batch`](Self::classify_batch), with full records.
    pub fn classify_batch_detailed<S>(&self, inputs: &[S]) -> Vec<TopicsResult<Classification>>
    where
        S: AsRef<str> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.classify_detailed(input.as_ref()))
            .collect()
    }

    /// Every taxonomy topic except the unknown sentinel.
    pub fn all_topics(&self) -> Vec<Topic> {
        self.taxonomy.public_topics()
    }

    pub fn normalize(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }

    pub fn taxonomy(&self) -> &TaxonomyTable {
        &self.taxonomy
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    pub fn filter_config(&self) -> &FilterConfig {
        &self.filter
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Map override ids to topics. Every id must resolve. The unknown id is
    /// dropped when real topics are present; a list with none resolves to
    /// exactly `[unknown]`.
    fn resolve_override(&self, ids: &[TopicId]) -> TopicsResult<Vec<Topic>> {
        let resolved = ids
            .iter()
            .map(|&id| self.taxonomy.resolve(id))
            .collect::<TopicsResult<Vec<_>>>()?;
        let topics: Vec<Topic> = resolved
            .into_iter()
            .filter(|topic| !self.taxonomy.is_unknown(topic.id))
            .collect();
        if topics.is_empty() {
            return Ok(vec![self.taxonomy.unknown()]);
        }
        Ok(topics)
    }

    /// Convert engine output into validated categories.
    fn validate_categories(
        &self,
        normalized: &str,
        raw: &[RawCategory],
    ) -> TopicsResult<Vec<Category>> {
        if raw.is_empty() {
            return Err(InferenceError::EmptyResult {
                input: normalized.to_string(),
            }
            .into());
        }

        raw.iter()
            .map(|rc| {
                if !rc.score.is_finite() || !(0.0..=1.0).contains(&rc.score) {
                    return Err(TopicsError::from(InferenceError::InvalidScore {
                        label: rc.label.to_string(),
                        score: rc.score,
                    }));
                }
                let id = TopicId::try_from(&rc.label)?;
                if !self.taxonomy.contains(id) {
                    return Err(TopicsError::UnknownTopicReference { id });
                }
                Ok(Category::new(id, rc.score))
            })
            .collect()
    }
}
