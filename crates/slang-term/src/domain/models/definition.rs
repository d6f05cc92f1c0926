#[cfg(test)]
#[path = "definition_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// One dictionary record as returned by the define endpoint.
///
/// Absent or `null` fields decode to their zero value. Fields of the wrong type are
/// still rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefinitionEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub definition: String,
    #[serde(deserialize_with = "null_as_default")]
    pub permalink: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbs_up: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub word: String,
    #[serde(deserialize_with = "null_as_default")]
    pub defid: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub current_vote: String,
    #[serde(deserialize_with = "null_as_default")]
    pub written_on: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub example: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbs_down: i64,
}

/// Response body of the define endpoint. A body without `list` is an empty result.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefinitionList {
    #[serde(deserialize_with = "null_as_default")]
    pub list: Vec<DefinitionEntry>,
}

impl DefinitionList {
    pub fn from_json(body: &[u8]) -> serde_json::Result<DefinitionList> {
        return serde_json::from_slice(body);
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    return Ok(value.unwrap_or_default());
}
