//! Row models and DTOs, one submodule per table.

use serde::{Deserialize, Deserializer};

pub mod announcement;
pub mod feedback;
pub mod location;
pub mod priority;
pub mod request;
pub mod user;

/// Deserialize a clearable field of an update DTO.
///
/// Used with `#[serde(default)]`: an absent key stays `None` (keep the
/// stored value), an explicit `null` becomes `Some(None)` (clear it).
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
