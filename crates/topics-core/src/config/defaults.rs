// Single source of truth for all default values.

// --- Sources ---
pub const DEFAULT_TAXONOMY_FILENAME: &str = "taxonomy.tsv";
pub const DEFAULT_OVERRIDE_LIST_FILENAME: &str = "override_list.tsv";

// --- Model ---
pub const DEFAULT_MODEL_FILENAME: &str = "model.onnx";
pub const DEFAULT_LABELS_FILENAME: &str = "labels.txt";
pub const DEFAULT_VOCAB_FILENAME: &str = "vocab.txt";
pub const DEFAULT_MAX_SEQUENCE_LENGTH: usize = 128;
pub const DEFAULT_USE_TOKEN_TYPE_IDS: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const LOG_ENV_VAR: &str = "TOPICS_LOG";
