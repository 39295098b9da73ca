//! Minimal header-indexed reader for tab-separated sources.

use std::path::Path;

use topics_core::errors::ConfigError;

/// One data row with its 1-based line number in the source.
#[derive(Debug, Clone)]
pub struct TsvRow {
    line: usize,
    cells: Vec<String>,
}

impl TsvRow {
    pub fn line(&self) -> usize {
        self.line
    }

    /// Cell at `index`, or `None` when the row is short.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

/// A parsed tab-separated table. The first non-blank line is the header.
#[derive(Debug, Clone)]
pub struct TsvTable {
    source_name: String,
    header: Vec<String>,
    rows: Vec<TsvRow>,
}

impl TsvTable {
    /// Parse TSV text. `source_name` is used in error messages.
    pub fn parse(source_name: &str, text: &str) -> Result<Self, ConfigError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
            .filter(|(_, l)| !l.trim().is_empty());

        let header = match lines.next() {
            Some((_, l)) => l.split('\t').map(|c| c.trim().to_string()).collect(),
            None => {
                return Err(ConfigError::MalformedRow {
                    source_name: source_name.to_string(),
                    line: 1,
                    reason: "missing header row".to_string(),
                })
            }
        };

        let rows = lines
            .map(|(line, l)| TsvRow {
                line,
                cells: l.split('\t').map(|c| c.trim().to_string()).collect(),
            })
            .collect();

        Ok(Self {
            source_name: source_name.to_string(),
            header,
            rows,
        })
    }

    /// Read and parse a TSV file.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let source_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("tsv");
        Self::parse(source_name, &text)
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Index of the column named `name`.
    pub fn column(&self, name: &str) -> Result<usize, ConfigError> {
        self.header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ConfigError::MissingColumn {
                source_name: self.source_name.clone(),
                column: name.to_string(),
            })
    }

    pub fn rows(&self) -> &[TsvRow] {
        &self.rows
    }

    /// Error for a row that cannot be interpreted.
    pub fn malformed(&self, row: &TsvRow, reason: impl Into<String>) -> ConfigError {
        ConfigError::MalformedRow {
            source_name: self.source_name.clone(),
            line: row.line,
            reason: reason.into(),
        }
    }
}
