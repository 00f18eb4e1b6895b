//! Response encoder module
//!
//! Supports: XML (default), JSON, CSV
//!
//! # Overview
//!
//! Envelopes are flattened once into a [`Document`] of ordered field lists;
//! each encoder renders that document. No encoder knows which entity it is
//! rendering, and single records and collections share the same path.

mod encoders;
mod generic;
mod types;

pub use encoders::{CsvEncoder, JsonEncoder, XmlEncoder, XML_ROOT_ELEMENT};
pub use generic::{encode, GenericEncoder};
pub use types::{
    CollectionEnvelope, Document, DocumentEncoder, EncodedBody, Envelope, SingleEnvelope,
};

#[cfg(test)]
mod tests;
