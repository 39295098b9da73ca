use serde::{Deserialize, Serialize};

use super::hex_float;
use crate::errors::ConfigError;

/// Score-filtering thresholds, decoded once at load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Top-N cutoff applied after sorting by score.
    pub max_categories: usize,
    /// Minimum absolute score to keep a non-unknown category.
    #[serde(with = "hex_float")]
    pub min_category_weight: f32,
    /// Minimum share of the top-N score mass to keep a category.
    #[serde(with = "hex_float")]
    pub min_normalized_weight_within_top_n: f32,
    /// Unknown share above which the result is forced to unknown.
    #[serde(with = "hex_float")]
    pub min_none_weight: f32,
}

impl FilterConfig {
    /// Check every threshold lies in [0, 1].
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("min_category_weight", self.min_category_weight),
            (
                "min_normalized_weight_within_top_n",
                self.min_normalized_weight_within_top_n,
            ),
            ("min_none_weight", self.min_none_weight),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}
