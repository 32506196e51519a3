/// Serde utility functions for common patterns
use serde::{Deserialize, Deserializer};

/// Deserialize `Option<Option<T>>` to distinguish between missing field and null value.
///
/// Must be paired with `#[serde(default)]` so that a missing field never
/// reaches this function:
///
/// - Missing field → `None`
/// - Field is `null` → `Some(None)`
/// - Field has value → `Some(Some(value))`
///
/// ```ignore
/// #[derive(Deserialize)]
/// struct UpdateItemRequest {
///     #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
///     description: Option<Option<String>>,
/// }
/// ```
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}
