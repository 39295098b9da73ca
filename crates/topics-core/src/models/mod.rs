mod category;
mod topic;

pub use category::{Category, CategoryLabel, RawCategory};
pub use topic::{Topic, TopicId};
