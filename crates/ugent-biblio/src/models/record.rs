//! Publication records with normalized field names.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One decoded publication (or sub-entity) object.
///
/// Field names have leading underscores stripped and hyphens replaced with
/// underscores, so the API's `_id` is addressable as `id`. The remote service
/// defines the rest of the shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Look up a field by its normalized name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The publication id, if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.get("id")?.as_str()
    }

    /// The publication title, if present.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.0.get("title")?.as_str()
    }

    /// The year of publication, if present. The API reports it as a string.
    #[must_use]
    pub fn year(&self) -> Option<&str> {
        self.0.get("year")?.as_str()
    }

    /// Number of fields in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the record carries no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all fields.
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    /// Consume the record, yielding the underlying map.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A decoded response body: one record or a sequence of records, depending on
/// the endpoint and how many lines the body held.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The body was a single JSON object.
    Single(Record),

    /// The body was a JSON array or newline-delimited JSON.
    Many(Vec<Record>),
}

impl Payload {
    /// Flatten into a sequence of records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        match self {
            Self::Single(record) => vec![record],
            Self::Many(records) => records,
        }
    }

    /// The single record, or the first of a sequence.
    #[must_use]
    pub fn into_single(self) -> Option<Record> {
        match self {
            Self::Single(record) => Some(record),
            Self::Many(records) => records.into_iter().next(),
        }
    }
}
