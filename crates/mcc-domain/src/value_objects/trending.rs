//! Materialized trending cache value objects
//!
//! Trending records are written by an external job and their shape follows
//! the upstream catalog, which is not contractually stable. Known fields are
//! typed; everything else is carried through untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A movie summary inside a trending list
///
/// Kept as raw JSON so unknown fields round-trip exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieSummary(pub Value);

impl MovieSummary {
    /// Wrap a raw JSON document
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Look up a top-level field
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Display name, when present
    pub fn name(&self) -> Option<&str> {
        self.field("name").and_then(Value::as_str)
    }

    /// URL slug, when present
    pub fn slug(&self) -> Option<&str> {
        self.field("slug").and_then(Value::as_str)
    }

    /// Borrow the raw document
    pub fn as_json(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for MovieSummary {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// The current trending snapshot for one category type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingCacheRecord {
    /// Category type the record belongs to (e.g. `phim-bo`)
    #[serde(rename = "type")]
    pub category_type: String,
    /// Ordered movie summaries
    #[serde(default, deserialize_with = "null_as_empty")]
    pub movies: Vec<MovieSummary>,
    /// When the external job last wrote the record
    ///
    /// Accepts RFC 3339 strings, epoch milliseconds and Mongo extended JSON
    /// dates. Anything unreadable becomes `None`.
    #[serde(default, alias = "updated_at", deserialize_with = "flexible_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Fields this crate does not know about
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TrendingCacheRecord {
    /// Create a record with no extra fields
    pub fn new<S: Into<String>>(
        category_type: S,
        movies: Vec<MovieSummary>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            category_type: category_type.into(),
            movies,
            updated_at,
            extra: Map::new(),
        }
    }

    /// Parse a stored document
    pub fn from_json(document: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(document)?)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<MovieSummary>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<MovieSummary>>::deserialize(deserializer)?.unwrap_or_default())
}

fn flexible_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(timestamp_from_value))
}

fn timestamp_from_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(text) => DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|parsed| parsed.with_timezone(&Utc))
            .or_else(|| text.parse::<i64>().ok().and_then(DateTime::from_timestamp_millis)),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|millis| millis as i64))
            .and_then(DateTime::from_timestamp_millis),
        Value::Object(fields) => fields
            .get("$date")
            .or_else(|| fields.get("$numberLong"))
            .and_then(timestamp_from_value),
        _ => None,
    }
}

/// Body of `GET /api/trending`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingResponse {
    /// Movie summaries, empty when nothing is available
    pub movies: Vec<MovieSummary>,
    /// Record timestamp, `null` when nothing is available
    pub updated_at: Option<DateTime<Utc>>,
    /// Machine-readable error flag, only present on lookup failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TrendingResponse {
    /// Empty response without an error flag
    pub fn empty() -> Self {
        Self {
            movies: Vec::new(),
            updated_at: None,
            error: None,
        }
    }

    /// Empty response carrying an error flag
    pub fn failed<S: Into<String>>(error: S) -> Self {
        Self {
            movies: Vec::new(),
            updated_at: None,
            error: Some(error.into()),
        }
    }
}

impl From<TrendingCacheRecord> for TrendingResponse {
    fn from(record: TrendingCacheRecord) -> Self {
        Self {
            movies: record.movies,
            updated_at: record.updated_at,
            error: None,
        }
    }
}

/// How a trending lookup ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendingStatus {
    /// A record exists and was served
    Populated,
    /// No record has been written for the category yet
    NotYetPopulated,
    /// The store could not be read
    StorageUnavailable,
}

/// Result of a trending lookup: the body to serve and how it was obtained
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingLookup {
    /// Category type that was looked up
    pub category_type: String,
    /// Lookup outcome
    pub status: TrendingStatus,
    /// Response body
    pub response: TrendingResponse,
}

impl TrendingLookup {
    /// Whether the body came from a stored record
    pub fn is_populated(&self) -> bool {
        self.status == TrendingStatus::Populated
    }
}
