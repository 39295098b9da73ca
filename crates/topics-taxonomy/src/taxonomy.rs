//! TaxonomyTable: the fixed catalog of topic ids and names.

use std::collections::HashMap;
use std::path::Path;

use topics_core::config::TaxonomySourceConfig;
use topics_core::errors::{ConfigError, TopicsError, TopicsResult};
use topics_core::models::{Topic, TopicId};
use tracing::{debug, warn};

use crate::tsv::TsvTable;

/// Total mapping from every valid topic id (unknown included) to one name.
///
/// Enumeration follows source order; the unknown sentinel is inserted last
/// and replaces any source row carrying the same id.
#[derive(Debug, Clone)]
pub struct TaxonomyTable {
    topics: Vec<Topic>,
    index: HashMap<TopicId, usize>,
    unknown_id: TopicId,
}

impl TaxonomyTable {
    /// Build from `(id, name)` rows plus the unknown sentinel.
    pub fn new<I>(rows: I, unknown: Topic) -> Self
    where
        I: IntoIterator<Item = Topic>,
    {
        let mut table = Self {
            topics: Vec::new(),
            index: HashMap::new(),
            unknown_id: unknown.id,
        };
        for topic in rows {
            table.insert(topic);
        }
        table.insert(unknown);
        table
    }

    fn insert(&mut self, topic: Topic) {
        match self.index.get(&topic.id) {
            Some(&i) => {
                if topic.id != self.unknown_id {
                    warn!(id = %topic.id, "duplicate taxonomy id, last row wins");
                }
                self.topics[i] = topic;
            }
            None => {
                self.index.insert(topic.id, self.topics.len());
                self.topics.push(topic);
            }
        }
    }

    /// Build from a parsed TSV using the configured columns and sentinel.
    pub fn from_tsv(table: &TsvTable, config: &TaxonomySourceConfig) -> Result<Self, ConfigError> {
        let id_col = table.column(&config.taxonomy_id_column)?;
        let name_col = table.column(&config.taxonomy_name_column)?;

        let mut rows = Vec::with_capacity(table.rows().len());
        for row in table.rows() {
            let raw_id = row
                .get(id_col)
                .filter(|c| !c.is_empty())
                .ok_or_else(|| table.malformed(row, "missing topic id"))?;
            let id: TopicId = raw_id
                .parse()
                .map_err(|_| table.malformed(row, format!("invalid topic id {raw_id:?}")))?;
            let name = row
                .get(name_col)
                .ok_or_else(|| table.malformed(row, "missing topic name"))?;
            rows.push(Topic::new(id, name));
        }

        let unknown = Topic::new(config.unknown_topic_id, config.unknown_topic_name.clone());
        let taxonomy = Self::new(rows, unknown);
        debug!(
            source = table.source_name(),
            topics = taxonomy.len(),
            "taxonomy loaded"
        );
        Ok(taxonomy)
    }

    /// Read the taxonomy file at `path`.
    pub fn load(path: &Path, config: &TaxonomySourceConfig) -> Result<Self, ConfigError> {
        Self::from_tsv(&TsvTable::read(path)?, config)
    }

    pub fn unknown_id(&self) -> TopicId {
        self.unknown_id
    }

    /// The unknown sentinel topic.
    pub fn unknown(&self) -> Topic {
        self.topics[self.index[&self.unknown_id]].clone()
    }

    pub fn is_unknown(&self, id: TopicId) -> bool {
        id == self.unknown_id
    }

    pub fn contains(&self, id: TopicId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn name(&self, id: TopicId) -> Option<&str> {
        self.index.get(&id).map(|&i| self.topics[i].name.as_str())
    }

    /// Resolve an id to `{id, name}`.
    ///
    /// # Errors
    /// `TopicsError::UnknownTopicReference` if the id is absent.
    pub fn resolve(&self, id: TopicId) -> TopicsResult<Topic> {
        self.index
            .get(&id)
            .map(|&i| self.topics[i].clone())
            .ok_or(TopicsError::UnknownTopicReference { id })
    }

    /// Every topic, unknown included, in source order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Every topic except the unknown sentinel.
    pub fn public_topics(&self) -> Vec<Topic> {
        self.topics
            .iter()
            .filter(|t| !self.is_unknown(t.id))
            .cloned()
            .collect()
    }

    /// Number of topics, unknown included.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
