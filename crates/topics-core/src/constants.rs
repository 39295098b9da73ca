/// Topics classifier version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Characters replaced by a single space during input normalization.
pub const SEPARATOR_CHARS: [char; 4] = ['-', '_', '.', '+'];

/// Marker separating a URL scheme from its authority.
pub const SCHEME_SEPARATOR: &str = "://";

/// Length of a hex-encoded IEEE-754 single-precision float.
pub const HEX_F32_LEN: usize = 8;

/// Separator between topic ids in an override list cell.
pub const OVERRIDE_TOPIC_SEPARATOR: char = ',';

/// Config file names probed inside a bundle directory, in order.
pub const BUNDLE_CONFIG_FILENAMES: [&str; 2] = ["config.json", "config.toml"];
