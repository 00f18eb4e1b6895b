//! Dynamically built records

use super::types::{Field, FieldValue, Record};
use chrono::{DateTime, Utc};

/// Owned scalar stored in a [`RecordRow`]
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Free-form text
    Text(String),
    /// Signed integer
    Integer(i64),
    /// Boolean flag
    Boolean(bool),
    /// Point in time
    Timestamp(DateTime<Utc>),
    /// Absent value
    Null,
}

impl Scalar {
    /// Borrow as a field value
    pub fn as_value(&self) -> FieldValue<'_> {
        match self {
            Scalar::Text(s) => FieldValue::Text(s),
            Scalar::Integer(n) => FieldValue::Integer(*n),
            Scalar::Boolean(b) => FieldValue::Boolean(*b),
            Scalar::Timestamp(ts) => FieldValue::Timestamp(*ts),
            Scalar::Null => FieldValue::Null,
        }
    }
}

/// An ordered record assembled at runtime
///
/// Used for entity shapes that have no dedicated type. Setting a field
/// that already exists replaces its value in place and keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordRow {
    fields: Vec<(String, Scalar)>,
}

impl RecordRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value
    pub fn set(&mut self, name: impl Into<String>, value: Scalar) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Add a text field
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, Scalar::Text(value.into()));
        self
    }

    /// Add an integer field
    #[must_use]
    pub fn integer(mut self, name: impl Into<String>, value: i64) -> Self {
        self.set(name, Scalar::Integer(value));
        self
    }

    /// Add a boolean field
    #[must_use]
    pub fn boolean(mut self, name: impl Into<String>, value: bool) -> Self {
        self.set(name, Scalar::Boolean(value));
        self
    }

    /// Add a timestamp field
    #[must_use]
    pub fn timestamp(mut self, name: impl Into<String>, value: DateTime<Utc>) -> Self {
        self.set(name, Scalar::Timestamp(value));
        self
    }

    /// Add an empty field
    #[must_use]
    pub fn null(mut self, name: impl Into<String>) -> Self {
        self.set(name, Scalar::Null);
        self
    }

    /// Look up a field value by name
    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the row has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Record for RecordRow {
    const ELEMENT: &'static str = "Record";
    const COLLECTION: &'static str = "Records";

    fn fields(&self) -> Vec<Field<'_>> {
        self.fields
            .iter()
            .map(|(name, value)| Field {
                name: name.as_str(),
                value: value.as_value(),
            })
            .collect()
    }
}
