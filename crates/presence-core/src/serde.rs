use serde::{Deserialize, Deserializer};

/// Deserializes an optional numeric id from a query string, treating an
/// empty value (`?department_id=`) as absent.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
