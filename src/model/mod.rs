//! Wire types exchanged with the society API.
//!
//! Records mirror what the API stores; the `*Form` types are the editable subset sent on
//! create and update.

pub mod adoption;
pub mod api;
pub mod car_sticker;
pub mod contact;
pub mod event;
pub mod gallery;
pub mod member;
pub mod membership;
pub mod news;

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` the same as a missing key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
