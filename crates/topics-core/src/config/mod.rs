pub mod bundle_config;
pub mod defaults;
pub mod filter_config;
pub mod hex_float;
pub mod model_config;
pub mod source_config;

pub use bundle_config::BundleConfig;
pub use filter_config::FilterConfig;
pub use model_config::{ModelConfig, OutputActivation};
pub use source_config::{OverrideSourceConfig, TaxonomySourceConfig};
