//! ModelBundle: single-point startup assembly from a bundle directory.
//!
//! A bundle holds a config file (`config.json`, or `config.toml`) plus the
//! taxonomy, override list, and model artifacts it names.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use topics_core::config::BundleConfig;
use topics_core::constants::BUNDLE_CONFIG_FILENAMES;
use topics_core::errors::ConfigError;
use topics_core::traits::IInferenceEngine;
use topics_taxonomy::{OverrideTable, TaxonomyTable};
use tracing::info;

use crate::normalizer::InputNormalizer;
use crate::pipeline::ClassificationPipeline;

/// Parsed bundle: config, compiled normalizer, and loaded reference tables.
#[derive(Debug, Clone)]
pub struct ModelBundle {
    dir: PathBuf,
    config: BundleConfig,
    normalizer: InputNormalizer,
    taxonomy: TaxonomyTable,
    overrides: OverrideTable,
}

impl ModelBundle {
    /// Load config, taxonomy, and override list from `dir` and compile the
    /// normalizer.
    ///
    /// # Errors
    /// Any `ConfigError`; startup must not proceed.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref().to_path_buf();
        let _span = crate::bundle_load_span!(dir.display()).entered();

        let config = read_config(&dir)?;
        let normalizer = InputNormalizer::new(&config.meaningless_prefix_regex)?;
        let taxonomy = TaxonomyTable::load(
            &dir.join(&config.taxonomy.taxonomy_filename),
            &config.taxonomy,
        )?;
        let overrides = OverrideTable::load(
            &dir.join(&config.overrides.override_list_filename),
            &config.overrides,
        )?;

        info!(
            topics = taxonomy.len(),
            overrides = overrides.len(),
            max_categories = config.filter.max_categories,
            "bundle loaded"
        );

        Ok(Self {
            dir,
            config,
            normalizer,
            taxonomy,
            overrides,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config(&self) -> &BundleConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &InputNormalizer {
        &self.normalizer
    }

    pub fn taxonomy(&self) -> &TaxonomyTable {
        &self.taxonomy
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    pub fn model_path(&self) -> PathBuf {
        self.dir.join(&self.config.model.model_filename)
    }

    pub fn labels_path(&self) -> PathBuf {
        self.dir.join(&self.config.model.labels_filename)
    }

    pub fn vocab_path(&self) -> PathBuf {
        self.dir.join(&self.config.model.vocab_filename)
    }

    /// Consume the bundle into a pipeline driven by `engine`.
    pub fn into_pipeline(self, engine: Arc<dyn IInferenceEngine>) -> ClassificationPipeline {
        ClassificationPipeline::new(
            self.normalizer,
            Arc::new(self.taxonomy),
            Arc::new(self.overrides),
            self.config.filter,
            engine,
        )
    }
}

/// Read the first config file present in `dir`.
fn read_config(dir: &Path) -> Result<BundleConfig, ConfigError> {
    for name in BUNDLE_CONFIG_FILENAMES {
        let path = dir.join(name);
        if !path.is_file() {
            continue;
        }
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        return if name.ends_with(".toml") {
            BundleConfig::from_toml(&text)
        } else {
            BundleConfig::from_json(&text)
        };
    }
    Err(ConfigError::ReadFailed {
        path: dir.display().to_string(),
        reason: format!("no {} found", BUNDLE_CONFIG_FILENAMES.join(" or ")),
    })
}
