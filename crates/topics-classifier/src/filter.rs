//! Score filtering: rank, cut to top-N, and threshold raw category scores.
//!
//! Order of checks:
//! 1. empty top-N or no positive score mass → unknown
//! 2. unknown share of top-N mass above `min_none_weight` → unknown
//! 3. keep non-unknown entries passing both the absolute and relative floors
//! 4. nothing kept → unknown

use serde::Serialize;
use topics_core::config::FilterConfig;
use topics_core::errors::TopicsResult;
use topics_core::models::{Category, Topic};
use topics_taxonomy::TaxonomyTable;
use tracing::debug;

/// Which branch of the filter decided the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOutcome {
    /// Top-N was empty or carried no score mass.
    NoSignal,
    /// Unknown dominated the top-N mass.
    UnknownDominant,
    /// At least one category passed both floors.
    Accepted,
    /// No category passed; fell back to unknown.
    NothingPassed,
}

/// Result of one filter run, with the intermediate values that drove it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterEvaluation {
    /// Categories kept after the top-N cut, highest score first.
    pub top_n: Vec<Category>,
    pub top_sum: f64,
    /// Unknown's share of `top_sum`, when unknown made the top-N.
    pub unknown_share: Option<f64>,
    pub outcome: FilterOutcome,
    /// Final topics. Never empty.
    pub topics: Vec<Topic>,
}

/// Converts raw category scores into a final topic list.
pub struct ScoreFilter;

impl ScoreFilter {
    /// Filter `categories`, returning the final topics.
    pub fn filter(
        categories: &[Category],
        config: &FilterConfig,
        taxonomy: &TaxonomyTable,
    ) -> TopicsResult<Vec<Topic>> {
        Self::evaluate(categories, config, taxonomy).map(|e| e.topics)
    }

    /// Filter `categories`, returning the full evaluation.
    ///
    /// # Errors
    /// `TopicsError::UnknownTopicReference` if a surviving category id is not
    /// in the taxonomy.
    pub fn evaluate(
        categories: &[Category],
        config: &FilterConfig,
        taxonomy: &TaxonomyTable,
    ) -> TopicsResult<FilterEvaluation> {
        // Stable: equal scores keep input order.
        let mut top_n = categories.to_vec();
        top_n.sort_by(|a, b| b.score.total_cmp(&a.score));
        top_n.truncate(config.max_categories);

        let top_sum: f64 = top_n.iter().map(|c| f64::from(c.score)).sum();

        if top_n.is_empty() || top_sum <= 0.0 || top_sum.is_nan() {
            return Ok(Self::unknown_only(
                top_n,
                top_sum,
                None,
                FilterOutcome::NoSignal,
                taxonomy,
            ));
        }

        let unknown_share = top_n
            .iter()
            .find(|c| taxonomy.is_unknown(c.category_id))
            .map(|c| f64::from(c.score) / top_sum);

        if let Some(share) = unknown_share {
            if share > f64::from(config.min_none_weight) {
                debug!(share, threshold = config.min_none_weight, "unknown dominates top-n");
                return Ok(Self::unknown_only(
                    top_n,
                    top_sum,
                    unknown_share,
                    FilterOutcome::UnknownDominant,
                    taxonomy,
                ));
            }
        }

        let min_share = f64::from(config.min_normalized_weight_within_top_n);
        let mut topics = Vec::new();
        for category in top_n.iter().filter(|c| !taxonomy.is_unknown(c.category_id)) {
            let share = f64::from(category.score) / top_sum;
            if category.score >= config.min_category_weight && share >= min_share {
                topics.push(taxonomy.resolve(category.category_id)?);
            }
        }

        if topics.is_empty() {
            return Ok(Self::unknown_only(
                top_n,
                top_sum,
                unknown_share,
                FilterOutcome::NothingPassed,
                taxonomy,
            ));
        }

        Ok(FilterEvaluation {
            top_n,
            top_sum,
            unknown_share,
            outcome: FilterOutcome::Accepted,
            topics,
        })
    }

    fn unknown_only(
        top_n: Vec<Category>,
        top_sum: f64,
        unknown_share: Option<f64>,
        outcome: FilterOutcome,
        taxonomy: &TaxonomyTable,
    ) -> FilterEvaluation {
        FilterEvaluation {
            top_n,
            top_sum,
            unknown_share,
            outcome,
            topics: vec![taxonomy.unknown()],
        }
    }
}
