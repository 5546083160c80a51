//! Query string helpers.

use serde::{de, Deserialize, Deserializer};
use std::{fmt::Display, str::FromStr};

/// Deserializes an optional query value, treating an empty value as unset.
///
/// `?yearCreated=` yields `None`; `?yearCreated=soon` is still an error.
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let value: Option<String> = Option::deserialize(deserializer)?;

    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
    }
}
