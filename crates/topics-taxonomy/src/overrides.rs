//! OverrideTable: manually curated classifications that bypass the scorer.

use std::collections::HashMap;
use std::path::Path;

use topics_core::config::OverrideSourceConfig;
use topics_core::constants::OVERRIDE_TOPIC_SEPARATOR;
use topics_core::errors::ConfigError;
use topics_core::models::TopicId;
use tracing::{debug, warn};

use crate::tsv::TsvTable;

/// Normalized input → forced topic ids.
///
/// A present key with an empty list forces the unknown topic; an absent key
/// falls through to inference.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: HashMap<String, Vec<TopicId>>,
}

impl OverrideTable {
    /// Build from `(key, ids)` pairs. Later duplicates replace earlier ones.
    pub fn new<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<TopicId>)>,
        K: Into<String>,
    {
        let mut map = HashMap::new();
        for (key, ids) in entries {
            let key = key.into();
            if map.insert(key.clone(), ids).is_some() {
                warn!(key = %key, "duplicate override key, last row wins");
            }
        }
        Self { entries: map }
    }

    /// Build from a parsed TSV using the configured columns.
    ///
    /// A blank topics cell means "force unknown"; otherwise the cell is a
    /// comma-separated list of integer topic ids.
    pub fn from_tsv(table: &TsvTable, config: &OverrideSourceConfig) -> Result<Self, ConfigError> {
        let input_col = table.column(&config.override_list_input_column)?;
        let topics_col = table.column(&config.override_list_topics_column)?;

        let mut entries = Vec::with_capacity(table.rows().len());
        for row in table.rows() {
            let key = row
                .get(input_col)
                .filter(|c| !c.is_empty())
                .ok_or_else(|| table.malformed(row, "missing override input"))?;
            let cell = row.get(topics_col).unwrap_or("");
            let ids = parse_topic_list(cell)
                .map_err(|bad| table.malformed(row, format!("invalid topic id {bad:?}")))?;
            entries.push((key.to_string(), ids));
        }

        let overrides = Self::new(entries);
        debug!(
            source = table.source_name(),
            entries = overrides.len(),
            "override list loaded"
        );
        Ok(overrides)
    }

    /// Read the override file at `path`.
    pub fn load(path: &Path, config: &OverrideSourceConfig) -> Result<Self, ConfigError> {
        Self::from_tsv(&TsvTable::read(path)?, config)
    }

    /// Forced ids for `normalized`, if overridden.
    pub fn lookup(&self, normalized: &str) -> Option<&[TopicId]> {
        self.entries.get(normalized).map(Vec::as_slice)
    }

    pub fn contains(&self, normalized: &str) -> bool {
        self.entries.contains_key(normalized)
    }

    /// Iterate over all `(key, ids)` entries in arbitrary order.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a comma-separated id list; a blank cell is the empty list.
/// On failure returns the offending fragment.
fn parse_topic_list(cell: &str) -> Result<Vec<TopicId>, String> {
    if cell.trim().is_empty() {
        return Ok(Vec::new());
    }
    cell.split(OVERRIDE_TOPIC_SEPARATOR)
        .map(|part| part.parse::<TopicId>().map_err(|_| part.trim().to_string()))
        .collect()
}
