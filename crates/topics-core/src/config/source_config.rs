use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::TopicId;

/// Where the taxonomy lives and how to read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomySourceConfig {
    #[serde(default = "default_taxonomy_filename")]
    pub taxonomy_filename: String,
    pub taxonomy_id_column: String,
    pub taxonomy_name_column: String,
    pub unknown_topic_id: TopicId,
    pub unknown_topic_name: String,
}

/// Where the override list lives and how to read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideSourceConfig {
    #[serde(default = "default_override_list_filename")]
    pub override_list_filename: String,
    pub override_list_input_column: String,
    pub override_list_topics_column: String,
}

fn default_taxonomy_filename() -> String {
    defaults::DEFAULT_TAXONOMY_FILENAME.to_string()
}

fn default_override_list_filename() -> String {
    defaults::DEFAULT_OVERRIDE_LIST_FILENAME.to_string()
}
