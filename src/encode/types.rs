//! Encoder types and traits
//!
//! Defines the envelopes handed to the encoders, the flattened document
//! every encoder consumes and the encoded payload.

use crate::error::Result;
use crate::pagination::PaginationMetadata;
use crate::record::{Field, Record};
use crate::types::Format;
use bytes::Bytes;

// ============================================================================
// Envelopes
// ============================================================================

/// A single record, rendered without pagination
#[derive(Debug, Clone, PartialEq)]
pub struct SingleEnvelope<R> {
    /// The record
    pub record: R,
}

/// A page of records plus its pagination block
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionEnvelope<R> {
    /// Records on the current page, in output order
    pub records: Vec<R>,
    /// Pagination block for the page
    pub pagination: PaginationMetadata,
}

/// Top-level object handed to the encoder
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<R> {
    /// One record without pagination
    Single(SingleEnvelope<R>),
    /// A page of records with pagination
    Collection(CollectionEnvelope<R>),
}

impl<R: Record> Envelope<R> {
    /// Wrap a single record
    pub fn single(record: R) -> Self {
        Self::Single(SingleEnvelope { record })
    }

    /// Wrap a page of records
    pub fn collection(records: Vec<R>, pagination: PaginationMetadata) -> Self {
        Self::Collection(CollectionEnvelope {
            records,
            pagination,
        })
    }

    /// Records of the envelope; a single record is a one-element slice
    pub fn records(&self) -> &[R] {
        match self {
            Envelope::Single(single) => std::slice::from_ref(&single.record),
            Envelope::Collection(collection) => &collection.records,
        }
    }

    /// Pagination block, if any
    pub fn pagination(&self) -> Option<&PaginationMetadata> {
        match self {
            Envelope::Single(_) => None,
            Envelope::Collection(collection) => Some(&collection.pagination),
        }
    }

    /// Flatten the envelope into a format-independent document
    ///
    /// This is the only place that walks records; both envelope shapes
    /// go through it.
    pub fn flatten(&self) -> Document<'_> {
        let rows: Vec<Vec<Field<'_>>> = self
            .records()
            .iter()
            .map(|record| {
                let fields = record.fields();
                tracing::trace!(element = R::ELEMENT, fields = fields.len(), "Flattened record");
                fields
            })
            .collect();

        Document {
            element: R::ELEMENT,
            collection: R::COLLECTION,
            rows,
            pagination: self.pagination(),
        }
    }
}

// ============================================================================
// Document
// ============================================================================

/// Flattened envelope shared by all encoders
#[derive(Debug, Clone, PartialEq)]
pub struct Document<'a> {
    /// Element name of one record
    pub element: &'static str,
    /// Element name of the collection wrapper
    pub collection: &'static str,
    /// One ordered field list per record
    pub rows: Vec<Vec<Field<'a>>>,
    /// Present for collection envelopes only
    pub pagination: Option<&'a PaginationMetadata>,
}

impl Document<'_> {
    /// Check if the document came from a collection envelope
    pub fn is_collection(&self) -> bool {
        self.pagination.is_some()
    }
}

// ============================================================================
// Encoded payload
// ============================================================================

/// Fully built response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBody {
    /// Payload bytes
    pub body: Bytes,
    /// HTTP content type of the payload
    pub content_type: &'static str,
    /// Format the payload was encoded in
    pub format: Format,
}

impl EncodedBody {
    /// Wrap an encoded buffer
    pub fn new(format: Format, body: Vec<u8>) -> Self {
        Self {
            body: Bytes::from(body),
            content_type: format.content_type(),
            format,
        }
    }

    /// Payload as UTF-8 text, if valid
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Trait for encoding a flattened document into a payload
pub trait DocumentEncoder: Send + Sync {
    /// Format produced by this encoder
    fn format(&self) -> Format;

    /// Encode the document into a private buffer
    fn encode(&self, document: &Document<'_>) -> Result<Vec<u8>>;
}
