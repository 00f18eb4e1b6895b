//! Encoder implementations
//!
//! Each encoder handles a specific wire format and works on the flattened
//! [`Document`], never on concrete record types.

use super::types::{Document, DocumentEncoder};
use crate::error::{Error, Result};
use crate::pagination::PaginationMetadata;
use crate::record::{Field, ANSIC_TIMESTAMP_FORMAT};
use crate::types::Format;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use regex::Regex;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt::Display;
use std::sync::LazyLock;

/// Root element of every XML document
pub const XML_ROOT_ELEMENT: &str = "Response";

// ============================================================================
// JSON Encoder
// ============================================================================

/// JSON encoder
///
/// A single record renders as `{"Client": [{...}]}`; a collection renders as
/// `{"Clients": {"Client": [...], "start": 0, ...}}` with the pagination
/// block inlined next to the records.
#[derive(Debug, Clone, Default)]
pub struct JsonEncoder;

impl JsonEncoder {
    /// Create a new JSON encoder
    pub fn new() -> Self {
        Self
    }
}

impl DocumentEncoder for JsonEncoder {
    fn format(&self) -> Format {
        Format::Json
    }

    fn encode(&self, document: &Document<'_>) -> Result<Vec<u8>> {
        let mut body =
            serde_json::to_vec(&JsonDocument(document)).map_err(|e| encoding_error(Format::Json, e))?;
        body.push(b'\n');
        Ok(body)
    }
}

struct JsonDocument<'d, 'a>(&'d Document<'a>);

struct JsonCollection<'d, 'a> {
    document: &'d Document<'a>,
    pagination: &'d PaginationMetadata,
}

struct JsonRecords<'d, 'a>(&'d [Vec<Field<'a>>]);

struct JsonRecord<'d, 'a>(&'d [Field<'a>]);

impl Serialize for JsonDocument<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let document = self.0;
        let mut map = serializer.serialize_map(Some(1))?;
        match document.pagination {
            Some(pagination) => map.serialize_entry(
                document.collection,
                &JsonCollection {
                    document,
                    pagination,
                },
            )?,
            None => map.serialize_entry(document.element, &JsonRecords(&document.rows))?,
        }
        map.end()
    }
}

impl Serialize for JsonCollection<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let entries = self.pagination.entries();
        let mut map = serializer.serialize_map(Some(entries.len() + 1))?;
        map.serialize_entry(self.document.element, &JsonRecords(&self.document.rows))?;
        for entry in &entries {
            map.serialize_entry(entry.json_name, &entry.value)?;
        }
        map.end()
    }
}

impl Serialize for JsonRecords<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(|row| JsonRecord(row)))
    }
}

impl Serialize for JsonRecord<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for field in self.0 {
            map.serialize_entry(field.name, &field.value)?;
        }
        map.end()
    }
}

// ============================================================================
// XML Encoder
// ============================================================================

/// Element and attribute names the XML encoder accepts
static XML_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_.\-]*$").expect("XML name pattern is valid")
});

/// Pretty-printing XML encoder
///
/// Writes the XML declaration, a `Response` root and one element per
/// record with one child element per field. Collections wrap the records
/// in an element carrying the pagination block as attributes.
#[derive(Debug, Clone)]
pub struct XmlEncoder {
    /// Spaces per indentation level
    indent: usize,
}

impl Default for XmlEncoder {
    fn default() -> Self {
        Self { indent: 1 }
    }
}

impl XmlEncoder {
    /// Create a new XML encoder with one-space indentation
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an XML encoder with a custom indentation width
    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    fn write_rows(&self, writer: &mut Writer<Vec<u8>>, document: &Document<'_>) -> Result<()> {
        check_xml_name(document.element)?;
        for row in &document.rows {
            write_xml(writer, Event::Start(BytesStart::new(document.element)))?;
            for field in row {
                check_xml_name(field.name)?;
                let text = field.value.to_text();
                check_xml_text(&text)?;

                write_xml(writer, Event::Start(BytesStart::new(field.name)))?;
                write_xml(writer, Event::Text(BytesText::new(&text)))?;
                write_xml(writer, Event::End(BytesEnd::new(field.name)))?;
            }
            write_xml(writer, Event::End(BytesEnd::new(document.element)))?;
        }
        Ok(())
    }
}

impl DocumentEncoder for XmlEncoder {
    fn format(&self) -> Format {
        Format::Xml
    }

    fn encode(&self, document: &Document<'_>) -> Result<Vec<u8>> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', self.indent);

        write_xml(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;
        write_xml(&mut writer, Event::Start(BytesStart::new(XML_ROOT_ELEMENT)))?;

        match document.pagination {
            Some(pagination) => {
                check_xml_name(document.collection)?;
                let mut wrapper = BytesStart::new(document.collection);
                for entry in pagination.entries() {
                    let text = entry.value.to_text();
                    check_xml_text(&text)?;
                    wrapper.push_attribute((entry.xml_name, &*text));
                }

                write_xml(&mut writer, Event::Start(wrapper))?;
                self.write_rows(&mut writer, document)?;
                write_xml(&mut writer, Event::End(BytesEnd::new(document.collection)))?;
            }
            None => self.write_rows(&mut writer, document)?,
        }

        write_xml(&mut writer, Event::End(BytesEnd::new(XML_ROOT_ELEMENT)))?;
        Ok(writer.into_inner())
    }
}

fn write_xml(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| encoding_error(Format::Xml, e))
}

fn check_xml_name(name: &str) -> Result<()> {
    if XML_NAME.is_match(name) {
        Ok(())
    } else {
        Err(Error::encoding(
            Format::Xml.as_str(),
            format!("'{name}' is not a valid element name"),
        ))
    }
}

fn check_xml_text(text: &str) -> Result<()> {
    match text.chars().find(|c| !is_xml_char(*c)) {
        Some(c) => Err(Error::encoding(
            Format::Xml.as_str(),
            format!("character U+{:04X} cannot be represented in XML", c as u32),
        )),
        None => Ok(()),
    }
}

/// Characters allowed by the XML 1.0 `Char` production
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

// ============================================================================
// CSV Encoder
// ============================================================================

/// CSV encoder
///
/// Ignores pagination. Writes a header row of field names taken from the
/// first record, then one row per record.
#[derive(Debug, Clone)]
pub struct CsvEncoder {
    /// strftime layout for timestamp cells
    timestamp_format: String,
}

impl Default for CsvEncoder {
    fn default() -> Self {
        Self {
            timestamp_format: ANSIC_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl CsvEncoder {
    /// Create a new CSV encoder with ANSI C timestamps
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a CSV encoder with a custom timestamp layout
    ///
    /// The layout must be a valid strftime string.
    pub fn with_timestamp_format(timestamp_format: impl Into<String>) -> Self {
        Self {
            timestamp_format: timestamp_format.into(),
        }
    }
}

impl DocumentEncoder for CsvEncoder {
    fn format(&self) -> Format {
        Format::Csv
    }

    fn encode(&self, document: &Document<'_>) -> Result<Vec<u8>> {
        let Some(header) = document.rows.first() else {
            return Ok(Vec::new());
        };
        // Records without fields have no columns to write
        if header.is_empty() && document.rows.iter().all(Vec::is_empty) {
            return Ok(Vec::new());
        }

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(header.iter().map(|field| field.name))
            .map_err(|e| encoding_error(Format::Csv, e))?;

        for (index, row) in document.rows.iter().enumerate() {
            let same_layout = row.len() == header.len()
                && row.iter().zip(header).all(|(a, b)| a.name == b.name);
            if !same_layout {
                return Err(Error::encoding(
                    Format::Csv.as_str(),
                    format!("record {index} does not match the header columns"),
                ));
            }

            writer
                .write_record(
                    row.iter()
                        .map(|field| field.value.to_text_with(&self.timestamp_format).into_owned()),
                )
                .map_err(|e| encoding_error(Format::Csv, e))?;
        }

        writer
            .into_inner()
            .map_err(|e| encoding_error(Format::Csv, e))
    }
}

fn encoding_error(format: Format, cause: impl Display) -> Error {
    Error::encoding(format.as_str(), cause.to_string())
}
