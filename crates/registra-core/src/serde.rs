use serde::{Deserialize, Deserializer};

/// Deserializes a possibly-`null` collection into an empty one.
///
/// The backend omits or nulls list fields that have no rows (prerequisites,
/// roles, upload row issues). Normalising to an empty collection here keeps
/// every downstream filter and render path branch-free.
pub fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt = Option::<T>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Deserializes an optional string, treating the empty string as `None`.
///
/// Form-shaped payloads send `""` for untouched optional fields.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt {
        Some(s) if s.trim().is_empty() => Ok(None),
        other => Ok(other),
    }
}
