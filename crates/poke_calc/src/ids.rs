//! Normalized-name helpers shared by every lookup table.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};

/// Normalize a display name into a lookup key.
///
/// Lowercases and strips everything that is not an ASCII letter or digit,
/// so "Multi-Attack", "multi attack" and "multiattack" share a key.
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Deserialize any `FromStr` enum from its display name.
pub(crate) fn deserialize_id<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(de::Error::custom)
}
