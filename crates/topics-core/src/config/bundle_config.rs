use serde::{Deserialize, Serialize};

use super::{FilterConfig, ModelConfig, OverrideSourceConfig, TaxonomySourceConfig};
use crate::errors::ConfigError;

/// Flat bundle configuration, grouped into typed sections on load.
///
/// Keys are read at the top level (`taxonomy_id_column`, `max_categories`,
/// `min_none_weight`, ...); thresholds arrive hex-encoded and are decoded here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleConfig {
    #[serde(flatten)]
    pub taxonomy: TaxonomySourceConfig,
    #[serde(flatten)]
    pub overrides: OverrideSourceConfig,
    /// Pattern whose first match is deleted from lowercased input.
    pub meaningless_prefix_regex: String,
    #[serde(flatten)]
    pub filter: FilterConfig,
    #[serde(flatten)]
    pub model: ModelConfig,
}

impl BundleConfig {
    /// Parse and validate a JSON bundle config.
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML bundle config.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to JSON; thresholds are written hex-encoded.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Reject empty column names, out-of-range thresholds, and a zero sequence length.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("taxonomy_filename", &self.taxonomy.taxonomy_filename),
            ("taxonomy_id_column", &self.taxonomy.taxonomy_id_column),
            ("taxonomy_name_column", &self.taxonomy.taxonomy_name_column),
            ("unknown_topic_name", &self.taxonomy.unknown_topic_name),
            ("override_list_filename", &self.overrides.override_list_filename),
            (
                "override_list_input_column",
                &self.overrides.override_list_input_column,
            ),
            (
                "override_list_topics_column",
                &self.overrides.override_list_topics_column,
            ),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: field.to_string(),
                });
            }
        }

        self.filter.validate()?;

        if self.model.max_sequence_length < 2 {
            return Err(ConfigError::InvalidField {
                field: "max_sequence_length".to_string(),
                reason: "must leave room for [CLS] and [SEP]".to_string(),
            });
        }
        Ok(())
    }
}
