//! Result document schema.
//!
//! ```json
//! { "TestingScope": [ { "TestId": "TC1", "TestResult": "Pass" }, ... ] }
//! ```
//!
//! Parsing happens here, at the boundary, so the engine only ever sees
//! well-typed [`ResultSet`]s.

use serde::de::{Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ReconError;
use crate::model::{ResultSet, TestOutcomeRecord};

pub const SCOPE_FIELD: &str = "TestingScope";

/// What to do when a document has no `TestingScope` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopePolicy {
    /// Treat the document as an empty result set.
    #[default]
    Permissive,
    /// Reject the document as malformed.
    Strict,
}

#[derive(Debug, Deserialize)]
struct ResultDocument {
    #[serde(rename = "TestingScope", default)]
    testing_scope: Option<Vec<RawRecord>>,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "TestId", default, deserialize_with = "scalar_text")]
    test_id: Option<String>,
    #[serde(rename = "TestResult", default, deserialize_with = "scalar_text")]
    test_result: Option<String>,
}

impl From<RawRecord> for TestOutcomeRecord {
    fn from(raw: RawRecord) -> Self {
        Self {
            test_id: raw.test_id,
            result: raw.test_result,
        }
    }
}

/// Accept strings, numbers and booleans as text; `null` is absent.
fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(Value::Array(_)) => Err(D::Error::custom("expected a string, found an array")),
        Some(Value::Object(_)) => Err(D::Error::custom("expected a string, found an object")),
    }
}

/// Parse a result document into a [`ResultSet`].
///
/// `source_name` is only used to label the set and any error.
pub fn parse_result_set(source_name: &str, text: &str, policy: ScopePolicy) -> Result<ResultSet, ReconError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ReconError::malformed(source_name, e.to_string()))?;

    if !value.is_object() {
        return Err(ReconError::malformed(source_name, "top-level value must be a JSON object"));
    }

    let doc: ResultDocument = serde_json::from_value(value)
        .map_err(|e| ReconError::malformed(source_name, format!("{SCOPE_FIELD}: {e}")))?;

    let records = match (doc.testing_scope, policy) {
        (Some(raw), _) => raw.into_iter().map(TestOutcomeRecord::from).collect(),
        (None, ScopePolicy::Permissive) => {
            log::debug!("'{source_name}' has no {SCOPE_FIELD} field, treating as empty");
            Vec::new()
        }
        (None, ScopePolicy::Strict) => {
            return Err(ReconError::malformed(
                source_name,
                format!("missing top-level '{SCOPE_FIELD}' field"),
            ))
        }
    };

    Ok(ResultSet::new(source_name, records))
}
