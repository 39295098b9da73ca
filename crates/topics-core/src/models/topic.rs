use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Integer topic identifier, unique within a taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(pub i32);

impl TopicId {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for TopicId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TopicId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i32>().map(Self)
    }
}

/// A resolved topic: id plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
}

impl Topic {
    pub fn new(id: impl Into<TopicId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
