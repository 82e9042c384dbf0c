use crate::utils::constants::{PLACEHOLDER_VALUES, QUALITY_MARKERS};
use serde::{Deserialize, Deserializer};
use tracing::debug;

/// Strip JMA quality markers and whitespace from a raw cell value.
///
/// Returns `None` when what remains is a placeholder for missing data.
pub fn normalize(raw: &str) -> Option<&str> {
    let trimmed = raw.trim().trim_end_matches(QUALITY_MARKERS).trim();
    if PLACEHOLDER_VALUES.contains(&trimmed) {
        None
    } else {
        Some(trimmed)
    }
}

/// Parse a real-valued cell, defaulting to 0.0.
pub fn real_or_default(raw: &str) -> f64 {
    match normalize(raw) {
        None => 0.0,
        Some(value) => value.parse::<f64>().unwrap_or_else(|_| {
            debug!("Unparsable real value '{}', stored as 0.0", raw);
            0.0
        }),
    }
}

/// Parse an integer cell, defaulting to 0.
pub fn int_or_default(raw: &str) -> u32 {
    match normalize(raw) {
        None => 0,
        Some(value) => value.parse::<u32>().unwrap_or_else(|_| {
            debug!("Unparsable integer value '{}', stored as 0", raw);
            0
        }),
    }
}

/// Text cells keep their content; placeholders become the empty string.
pub fn text_or_default(raw: &str) -> String {
    let trimmed = raw.trim();
    if PLACEHOLDER_VALUES.contains(&trimmed) {
        String::new()
    } else {
        trimmed.to_string()
    }
}

pub(crate) fn lenient_real<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(real_or_default(&raw))
}

pub(crate) fn lenient_int<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(int_or_default(&raw))
}

pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(text_or_default(&raw))
}
