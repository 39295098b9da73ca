use std::fmt;

use serde::{Deserialize, Serialize};

use super::TopicId;
use crate::errors::ConfigError;

/// Category label as emitted by a scorer: either numeric or textual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryLabel {
    Id(i64),
    Name(String),
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryLabel::Id(id) => write!(f, "{id}"),
            CategoryLabel::Name(name) => f.write_str(name),
        }
    }
}

impl From<i32> for CategoryLabel {
    fn from(id: i32) -> Self {
        CategoryLabel::Id(i64::from(id))
    }
}

impl From<&str> for CategoryLabel {
    fn from(name: &str) -> Self {
        CategoryLabel::Name(name.to_string())
    }
}

impl TryFrom<&CategoryLabel> for TopicId {
    type Error = ConfigError;

    fn try_from(label: &CategoryLabel) -> Result<Self, Self::Error> {
        let invalid = || ConfigError::InvalidCategoryLabel {
            label: label.to_string(),
        };
        match label {
            CategoryLabel::Id(id) => i32::try_from(*id).map(TopicId).map_err(|_| invalid()),
            CategoryLabel::Name(name) => name.parse::<TopicId>().map_err(|_| invalid()),
        }
    }
}

/// Unvalidated scorer output for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCategory {
    pub label: CategoryLabel,
    pub score: f32,
}

impl RawCategory {
    pub fn new(label: impl Into<CategoryLabel>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// A validated inference result: topic id and confidence in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: TopicId,
    pub score: f32,
}

impl Category {
    pub fn new(category_id: impl Into<TopicId>, score: f32) -> Self {
        Self {
            category_id: category_id.into(),
            score,
        }
    }
}
