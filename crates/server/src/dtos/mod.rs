pub mod client;
pub mod genre;
pub mod movie;
pub mod movie_copy;
pub mod movie_rent;

use serde::{Deserialize, Deserializer};

/// For `Option<Option<T>>` fields with `#[serde(default)]`: an omitted field
/// stays `None`, an explicit `null` becomes `Some(None)`
pub(crate) fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
