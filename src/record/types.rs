//! Record types and traits
//!
//! A record describes itself as an ordered list of named scalar fields.
//! Every encoder walks that list; no encoder knows about concrete entities.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::borrow::Cow;

/// ANSI C timestamp layout used for CSV cells (`Mon Jan  2 15:04:05 2006`)
pub const ANSIC_TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Borrowed scalar value of a single field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Free-form text
    Text(&'a str),
    /// Signed integer, rendered as a number in JSON
    Integer(i64),
    /// Unsigned count, rendered as a number in JSON
    Unsigned(u64),
    /// Boolean flag
    Boolean(bool),
    /// Point in time; rendered with a fixed layout per format
    Timestamp(DateTime<Utc>),
    /// Absent value
    Null,
}

impl<'a> FieldValue<'a> {
    /// Natural text form; timestamps use RFC 3339 in UTC
    pub fn to_text(&self) -> Cow<'a, str> {
        match self {
            FieldValue::Timestamp(ts) => Cow::Owned(ts.to_rfc3339_opts(SecondsFormat::Secs, true)),
            other => other.to_text_with(ANSIC_TIMESTAMP_FORMAT),
        }
    }

    /// Text form with timestamps rendered through a strftime layout
    ///
    /// The layout must already be validated; see `RenderConfig::validate`.
    pub fn to_text_with(&self, timestamp_format: &str) -> Cow<'a, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s),
            FieldValue::Integer(n) => Cow::Owned(n.to_string()),
            FieldValue::Unsigned(n) => Cow::Owned(n.to_string()),
            FieldValue::Boolean(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            FieldValue::Timestamp(ts) => Cow::Owned(ts.format(timestamp_format).to_string()),
            FieldValue::Null => Cow::Borrowed(""),
        }
    }
}

impl Serialize for FieldValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Integer(n) => serializer.serialize_i64(*n),
            FieldValue::Unsigned(n) => serializer.serialize_u64(*n),
            FieldValue::Boolean(b) => serializer.serialize_bool(*b),
            FieldValue::Timestamp(_) => serializer.serialize_str(&self.to_text()),
            FieldValue::Null => serializer.serialize_none(),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u64> for FieldValue<'_> {
    fn from(value: u64) -> Self {
        FieldValue::Unsigned(value)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<DateTime<Utc>> for FieldValue<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

impl From<Option<DateTime<Utc>>> for FieldValue<'_> {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Timestamp)
    }
}

/// A named field of a record
#[derive(Debug, Clone, PartialEq)]
pub struct Field<'a> {
    /// Field name, used verbatim as CSV header, JSON key and XML element
    pub name: &'a str,
    /// Field value
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    /// Create a field
    pub fn new(name: &'a str, value: impl Into<FieldValue<'a>>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// An entity that can be rendered by the generic encoders
///
/// Implementations list their fields in declaration order; that order
/// becomes the CSV column order and the JSON/XML field order.
pub trait Record {
    /// Element name of one record (e.g. `Client`)
    const ELEMENT: &'static str;

    /// Element name of the collection wrapper (e.g. `Clients`)
    const COLLECTION: &'static str;

    /// Ordered field descriptors for this record
    fn fields(&self) -> Vec<Field<'_>>;
}

impl<R: Record> Record for &R {
    const ELEMENT: &'static str = R::ELEMENT;
    const COLLECTION: &'static str = R::COLLECTION;

    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}
