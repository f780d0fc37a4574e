//! Resource models for the Cloud Resource Manager API.

use serde::{Deserialize, Deserializer, Serialize};

/// One project visible to the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Human-readable display name.
    #[serde(default)]
    pub name: String,

    /// String identifier, unique and immutable (e.g. `alpha-123`).
    pub project_id: String,

    /// Numeric project number. Google APIs encode int64 fields as JSON
    /// strings, so both `123456` and `"123456"` are accepted on the wire.
    #[serde(default, deserialize_with = "int64_lenient")]
    pub project_number: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
}

/// First page of an enumeration call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsResponse {
    #[serde(default)]
    pub projects: Vec<Project>,

    /// Continuation token when the listing was truncated. Deserialized for
    /// fidelity but never followed: only the first page is consumed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

fn int64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct Int64Visitor;

    impl serde::de::Visitor<'_> for Int64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("an integer or a string-encoded integer")
        }

        fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<i64, E> {
            Ok(value)
        }

        fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<i64, E> {
            i64::try_from(value).map_err(|_| E::custom("integer out of range for i64"))
        }

        fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<i64, E> {
            value.parse().map_err(serde::de::Error::custom)
        }
    }

    deserializer.deserialize_any(Int64Visitor)
}
