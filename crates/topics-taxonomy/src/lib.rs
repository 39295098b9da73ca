//! # topics-taxonomy
//!
//! Read-only reference tables for classification: the topic taxonomy
//! (id → name, with the unknown sentinel) and the manual override list
//! (normalized input → forced topic ids). Both are built once at startup
//! from tab-separated sources.

pub mod overrides;
pub mod taxonomy;
pub mod tsv;

pub use overrides::OverrideTable;
pub use taxonomy::TaxonomyTable;
pub use tsv::{TsvRow, TsvTable};
