//! Output index → category label mapping.

use std::path::Path;

use topics_core::errors::InferenceError;
use topics_core::models::CategoryLabel;

/// Category labels in model output order. Blank lines are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMap {
    labels: Vec<CategoryLabel>,
}

impl LabelMap {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels = lines
            .into_iter()
            .filter_map(|line| {
                let line = line.as_ref().trim();
                if line.is_empty() {
                    return None;
                }
                Some(match line.parse::<i64>() {
                    Ok(id) => CategoryLabel::Id(id),
                    Err(_) => CategoryLabel::Name(line.to_string()),
                })
            })
            .collect();
        Self { labels }
    }

    /// Read a labels file, one label per line.
    pub fn load(path: &Path) -> Result<Self, InferenceError> {
        let text = std::fs::read_to_string(path).map_err(|e| InferenceError::ModelLoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_lines(text.lines()))
    }

    pub fn get(&self, index: usize) -> Option<&CategoryLabel> {
        self.labels.get(index)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
