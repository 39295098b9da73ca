/// Configuration, taxonomy, and override-list errors.
///
/// Raised while assembling the classifier at startup; fatal there.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("invalid hex-encoded float {value:?}: {reason}")]
    InvalidHexFloat { value: String, reason: String },

    #[error("threshold {field} = {value} is outside [0, 1]")]
    ThresholdOutOfRange { field: String, value: f32 },

    #[error("invalid regex {pattern:?}: {reason}")]
    InvalidRegex { pattern: String, reason: String },

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("{source_name}: missing column {column:?}")]
    MissingColumn { source_name: String, column: String },

    #[error("{source_name}:{line}: {reason}")]
    MalformedRow {
        source_name: String,
        line: usize,
        reason: String,
    },

    #[error("category label {label:?} is not a topic id")]
    InvalidCategoryLabel { label: String },

    #[error("failed to parse config: {reason}")]
    Parse { reason: String },
}
