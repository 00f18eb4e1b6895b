//! Format dispatch
//!
//! One entry point for every entity shape and every wire format.

use super::encoders::{CsvEncoder, JsonEncoder, XmlEncoder};
use super::types::{DocumentEncoder, EncodedBody, Envelope};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::record::Record;
use crate::types::Format;

/// Encoder that dispatches on the requested format
#[derive(Debug, Clone, Default)]
pub struct GenericEncoder {
    json: JsonEncoder,
    xml: XmlEncoder,
    csv: CsvEncoder,
}

impl GenericEncoder {
    /// Create an encoder with default layout settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder from a validated config
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            json: JsonEncoder::new(),
            xml: XmlEncoder::with_indent(config.xml_indent),
            csv: CsvEncoder::with_timestamp_format(config.csv_timestamp_format.clone()),
        }
    }

    /// Encoder for a format
    pub fn encoder(&self, format: Format) -> &dyn DocumentEncoder {
        match format {
            Format::Json => &self.json,
            Format::Csv => &self.csv,
            Format::Xml => &self.xml,
        }
    }

    /// Encode an envelope
    ///
    /// The whole payload is built in memory; on error nothing is returned.
    pub fn encode<R: Record>(&self, envelope: &Envelope<R>, format: Format) -> Result<EncodedBody> {
        let document = envelope.flatten();
        let encoder = self.encoder(format);

        tracing::debug!(
            format = %encoder.format(),
            records = document.rows.len(),
            collection = document.is_collection(),
            "Encoding response"
        );

        match encoder.encode(&document) {
            Ok(body) => Ok(EncodedBody::new(format, body)),
            Err(e) => {
                tracing::error!(format = %format, error = %e, "Error while encoding response");
                Err(e)
            }
        }
    }
}

/// Encode an envelope with default settings
pub fn encode<R: Record>(envelope: &Envelope<R>, format: Format) -> Result<EncodedBody> {
    GenericEncoder::new().encode(envelope, format)
}
