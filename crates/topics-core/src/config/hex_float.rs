//! IEEE-754 single-precision floats encoded as big-endian hex strings.
//!
//! Bundle configs store thresholds as e.g. `"3F000000"` (0.5). Use with
//! `#[serde(with = "hex_float")]`; plain numbers are accepted on input too.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

use crate::constants::HEX_F32_LEN;
use crate::errors::ConfigError;

/// Decode an 8-digit big-endian hex string into an `f32`.
pub fn decode(value: &str) -> Result<f32, ConfigError> {
    let digits = value.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);

    if digits.len() != HEX_F32_LEN {
        return Err(ConfigError::InvalidHexFloat {
            value: value.to_string(),
            reason: format!("expected {HEX_F32_LEN} hex digits, got {}", digits.len()),
        });
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ConfigError::InvalidHexFloat {
            value: value.to_string(),
            reason: "non-hex character".to_string(),
        });
    }

    let bits = u32::from_str_radix(digits, 16).map_err(|e| ConfigError::InvalidHexFloat {
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    Ok(f32::from_bits(bits))
}

/// Encode an `f32` as an 8-digit uppercase big-endian hex string.
pub fn encode(value: f32) -> String {
    format!("{:08X}", value.to_bits())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Hex(String),
    Number(f64),
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    match Repr::deserialize(deserializer)? {
        Repr::Hex(s) => decode(&s).map_err(D::Error::custom),
        Repr::Number(n) => Ok(n as f32),
    }
}

pub fn serialize<S>(value: &f32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&encode(*value))
}
