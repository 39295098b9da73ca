//! Input normalization: URL → host, lowercase, prefix strip, separators → spaces.

use regex::Regex;
use topics_core::constants::{SCHEME_SEPARATOR, SEPARATOR_CHARS};
use topics_core::errors::ConfigError;

const HTTP_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Canonicalizes raw input for override lookup and scoring.
#[derive(Debug, Clone)]
pub struct InputNormalizer {
    meaningless_prefix: Regex,
}

impl InputNormalizer {
    /// Compile the meaningless-prefix pattern.
    ///
    /// # Errors
    /// `ConfigError::InvalidRegex` if the pattern does not compile.
    pub fn new(meaningless_prefix_regex: &str) -> Result<Self, ConfigError> {
        let meaningless_prefix =
            Regex::new(meaningless_prefix_regex).map_err(|e| ConfigError::InvalidRegex {
                pattern: meaningless_prefix_regex.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { meaningless_prefix })
    }

    /// Normalize `raw`. Total: any string maps to some string.
    pub fn normalize(&self, raw: &str) -> String {
        let host = if looks_like_url(raw) {
            extract_domain(raw)
        } else {
            raw.to_string()
        };
        let lowered = host.to_lowercase();
        let stripped = self.meaningless_prefix.replacen(&lowered, 1, "");
        stripped
            .chars()
            .map(|c| if SEPARATOR_CHARS.contains(&c) { ' ' } else { c })
            .collect()
    }

    pub fn meaningless_prefix(&self) -> &str {
        self.meaningless_prefix.as_str()
    }
}

/// Whether `raw` should go through host extraction first.
pub fn looks_like_url(raw: &str) -> bool {
    raw.contains(SCHEME_SEPARATOR) || raw.contains('/')
}

/// Extract the host from a URL: drop an http(s) scheme, then everything from
/// the first `/`, then any `:port`.
pub fn extract_domain(url: &str) -> String {
    let rest = HTTP_SCHEMES
        .iter()
        .find_map(|scheme| {
            url.get(..scheme.len())
                .filter(|prefix| prefix.eq_ignore_ascii_case(scheme))
                .map(|_| &url[scheme.len()..])
        })
        .unwrap_or(url);
    let host = rest.split('/').next().unwrap_or_default();
    host.split(':').next().unwrap_or_default().to_string()
}
