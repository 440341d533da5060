//! Equality filters for document-store queries.

use serde_json::{Map, Value};

/// A scalar value a field can be compared against.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    String(String),
    Integer(i64),
    Boolean(bool),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::String(value.to_owned())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::String(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Boolean(value)
    }
}

/// An equality condition on a single document field.
///
/// Queries and live watches take a conjunction of these; a document
/// matches when every filter field holds the exact filtered value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    pub field: String,
    pub value: FilterValue,
}

impl FieldFilter {
    pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Checks the filter against a raw document. A missing field or a
    /// value of a different JSON type never matches.
    pub fn matches(&self, doc: &Map<String, Value>) -> bool {
        match (doc.get(&self.field), &self.value) {
            (Some(Value::String(actual)), FilterValue::String(expected)) => actual == expected,
            (Some(Value::Number(actual)), FilterValue::Integer(expected)) => {
                actual.as_i64() == Some(*expected)
            }
            (Some(Value::Bool(actual)), FilterValue::Boolean(expected)) => actual == expected,
            _ => false,
        }
    }
}

/// True when `doc` satisfies every filter in `filters`.
pub fn matches_all(filters: &[FieldFilter], doc: &Map<String, Value>) -> bool {
    filters.iter().all(|f| f.matches(doc))
}
