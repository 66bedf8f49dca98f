//! Request and response payloads of the meeting API.
//!
//! Response types are lenient: missing fields take their defaults and fields
//! the server adds later are kept in `extra` rather than rejected.

pub mod api_key;
pub mod feature;
pub mod meeting;

use serde::{Deserialize, Deserializer};

/// Reads `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
