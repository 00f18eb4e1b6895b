//! Tests for encoder module

use super::*;
use crate::error::Error;
use crate::pagination::{LinkBuilder, PaginationMetadata};
use crate::record::{Field, Record, RecordRow};
use crate::types::Format;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::Value;

struct Account {
    sid: &'static str,
    name: &'static str,
    balance: i64,
}

impl Record for Account {
    const ELEMENT: &'static str = "Account";
    const COLLECTION: &'static str = "Accounts";

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Sid", self.sid),
            Field::new("Name", self.name),
            Field::new("Balance", self.balance),
        ]
    }
}

fn accounts() -> Vec<Account> {
    vec![
        Account {
            sid: "AC1",
            name: "Main",
            balance: 10,
        },
        Account {
            sid: "AC2",
            name: "Side, Ltd",
            balance: -3,
        },
    ]
}

fn pagination() -> PaginationMetadata {
    LinkBuilder::parse("http://api.example.com/Accounts")
        .unwrap()
        .build(0, 2, 5)
}

fn text(body: &EncodedBody) -> &str {
    body.as_str().unwrap()
}

// ============================================================================
// Envelope Tests
// ============================================================================

#[test]
fn test_single_envelope_is_one_record_slice() {
    let envelope = Envelope::single(RecordRow::new().text("a", "1"));
    assert_eq!(envelope.records().len(), 1);
    assert!(envelope.pagination().is_none());

    let document = envelope.flatten();
    assert_eq!(document.rows.len(), 1);
    assert!(!document.is_collection());
    assert_eq!(document.element, "Record");
}

#[test]
fn test_collection_envelope_flatten() {
    let envelope = Envelope::collection(accounts(), pagination());
    let document = envelope.flatten();

    assert!(document.is_collection());
    assert_eq!(document.element, "Account");
    assert_eq!(document.collection, "Accounts");
    assert_eq!(document.rows.len(), 2);
    assert_eq!(document.rows[1][1].name, "Name");
}

// ============================================================================
// JSON Encoder Tests
// ============================================================================

#[test]
fn test_json_single() {
    let envelope = Envelope::single(Account {
        sid: "AC1",
        name: "Main",
        balance: 10,
    });
    let body = encode(&envelope, Format::Json).unwrap();

    assert_eq!(body.content_type, "application/json");
    assert_eq!(
        text(&body),
        "{\"Account\":[{\"Sid\":\"AC1\",\"Name\":\"Main\",\"Balance\":10}]}\n"
    );
}

#[test]
fn test_json_collection_inlines_pagination() {
    let envelope = Envelope::collection(accounts(), pagination());
    let body = encode(&envelope, Format::Json).unwrap();

    assert!(text(&body).starts_with("{\"Accounts\":{\"Account\":[{\"Sid\":\"AC1\""));

    let value: Value = serde_json::from_slice(&body.body).unwrap();
    let block = &value["Accounts"];
    assert_eq!(block["Account"].as_array().unwrap().len(), 2);
    assert_eq!(block["Account"][1]["Balance"], -3);
    assert_eq!(block["total"], 5);
    assert_eq!(block["page_size"], 2);
    assert_eq!(block["num_pages"], 3);
    assert_eq!(block["previous_page_uri"], "");
    assert_eq!(
        block["next_page_uri"],
        "http://api.example.com/Accounts?Page=1&PageSize=2"
    );
    assert_eq!(block["uri"], "/Accounts");
}

#[test]
fn test_json_empty_collection() {
    let envelope: Envelope<Account> = Envelope::collection(Vec::new(), PaginationMetadata::default());
    let body = encode(&envelope, Format::Json).unwrap();

    let value: Value = serde_json::from_slice(&body.body).unwrap();
    assert_eq!(value["Accounts"]["Account"], Value::Array(Vec::new()));
}

#[test]
fn test_json_scalar_kinds() {
    let ts = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
    let row = RecordRow::new()
        .boolean("Active", true)
        .null("Missing")
        .timestamp("DateCreated", ts);
    let body = encode(&Envelope::single(row), Format::Json).unwrap();

    let value: Value = serde_json::from_slice(&body.body).unwrap();
    let record = &value["Record"][0];
    assert_eq!(record["Active"], true);
    assert_eq!(record["Missing"], Value::Null);
    assert_eq!(record["DateCreated"], "2006-01-02T15:04:05Z");
}

// ============================================================================
// XML Encoder Tests
// ============================================================================

#[test]
fn test_xml_single_pretty_printed() {
    let envelope = Envelope::single(Account {
        sid: "AC1",
        name: "Main",
        balance: 10,
    });
    let body = encode(&envelope, Format::Xml).unwrap();

    assert_eq!(body.content_type, "text/xml");
    assert_eq!(
        text(&body),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <Response>\n \
         <Account>\n  \
         <Sid>AC1</Sid>\n  \
         <Name>Main</Name>\n  \
         <Balance>10</Balance>\n \
         </Account>\n\
         </Response>"
    );
}

#[test]
fn test_xml_collection_attributes() {
    let envelope = Envelope::collection(accounts(), pagination());
    let body = encode(&envelope, Format::Xml).unwrap();
    let xml = text(&body);

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains(
        "<Accounts start=\"0\" end=\"1\" total=\"5\" page=\"0\" pagesize=\"2\" numpages=\"3\" \
         firstpageuri=\"http://api.example.com/Accounts?Page=0&amp;PageSize=2\" \
         lastpageuri=\"http://api.example.com/Accounts?Page=2&amp;PageSize=2\" \
         nextpageuri=\"http://api.example.com/Accounts?Page=1&amp;PageSize=2\" \
         previouspageuri=\"\" uri=\"/Accounts\">"
    ));
    assert_eq!(xml.matches("<Account>").count(), 2);
    assert!(xml.contains("<Name>Side, Ltd</Name>"));
    assert!(xml.trim_end().ends_with("</Response>"));

    // records are nested inside the collection element
    let wrapper = xml.find("<Accounts ").unwrap();
    let first_record = xml.find("<Account>").unwrap();
    let wrapper_end = xml.find("</Accounts>").unwrap();
    assert!(wrapper < first_record && first_record < wrapper_end);
}

#[test]
fn test_xml_escapes_text() {
    let row = RecordRow::new().text("Nickname", "a & b <c>");
    let body = encode(&Envelope::single(row), Format::Xml).unwrap();

    let xml = text(&body);
    assert!(xml.contains("a &amp; b &lt;c"));
    assert!(!xml.contains("a & b"));
}

#[test]
fn test_xml_timestamp_and_empty_values() {
    let ts = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
    let row = RecordRow::new().timestamp("DateCreated", ts).null("DateUpdated");
    let body = encode(&Envelope::single(row), Format::Xml).unwrap();

    let xml = text(&body);
    assert!(xml.contains("<DateCreated>2006-01-02T15:04:05Z</DateCreated>"));
    assert!(xml.contains("<DateUpdated></DateUpdated>"));
}

#[test]
fn test_xml_custom_indent() {
    let encoder = XmlEncoder::with_indent(4);
    let envelope = Envelope::single(RecordRow::new().text("a", "1"));
    let body = encoder.encode(&envelope.flatten()).unwrap();

    let xml = String::from_utf8(body).unwrap();
    assert!(xml.contains("\n    <Record>\n        <a>1</a>\n    </Record>\n"));
}

#[test]
fn test_xml_rejects_invalid_element_name() {
    let row = RecordRow::new().text("Bad Name", "x");
    let err = encode(&Envelope::single(row), Format::Xml).unwrap_err();

    match err {
        Error::Encoding { format, message } => {
            assert_eq!(format, "xml");
            assert!(message.contains("Bad Name"));
        }
        other => panic!("Expected encoding error, got {other:?}"),
    }
}

#[test]
fn test_xml_rejects_control_characters() {
    let row = RecordRow::new().text("Nickname", "a\u{1}b");
    let err = encode(&Envelope::single(row), Format::Xml).unwrap_err();

    assert!(err.is_encoding());
    assert!(err.to_string().contains("U+0001"));
}

#[test]
fn test_unrepresentable_xml_is_fine_elsewhere() {
    let row = RecordRow::new().text("Bad Name", "a\u{1}b");
    let envelope = Envelope::single(row);

    assert!(encode(&envelope, Format::Json).is_ok());
    assert!(encode(&envelope, Format::Csv).is_ok());
}

// ============================================================================
// CSV Encoder Tests
// ============================================================================

#[test]
fn test_csv_collection_ignores_pagination() {
    let envelope = Envelope::collection(accounts(), pagination());
    let body = encode(&envelope, Format::Csv).unwrap();

    assert_eq!(body.content_type, "text/csv");
    let lines: Vec<&str> = text(&body).lines().collect();
    assert_eq!(
        lines,
        vec!["Sid,Name,Balance", "AC1,Main,10", "AC2,\"Side, Ltd\",-3"]
    );
}

#[test]
fn test_csv_single_uses_same_layout() {
    let single = encode(
        &Envelope::single(Account {
            sid: "AC1",
            name: "Main",
            balance: 10,
        }),
        Format::Csv,
    )
    .unwrap();
    let collection = encode(
        &Envelope::collection(accounts(), pagination()),
        Format::Csv,
    )
    .unwrap();

    let single_lines: Vec<&str> = text(&single).lines().collect();
    let collection_lines: Vec<&str> = text(&collection).lines().collect();
    assert_eq!(single_lines[..], collection_lines[..2]);
}

#[test]
fn test_csv_header_and_row_counts() {
    let rows: Vec<RecordRow> = (0..7)
        .map(|i| RecordRow::new().integer("n", i).text("label", format!("row {i}")))
        .collect();
    let body = encode(&Envelope::collection(rows, PaginationMetadata::default()), Format::Csv).unwrap();

    let mut reader = csv::Reader::from_reader(&body.body[..]);
    let header = reader.headers().unwrap().clone();
    assert_eq!(header.len(), 2);

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 7);
    assert_eq!(&records[6][1], "row 6");
}

#[test]
fn test_csv_custom_timestamp_format() {
    let ts = Utc.with_ymd_and_hms(2024, 3, 14, 9, 26, 53).unwrap();
    let encoder = CsvEncoder::with_timestamp_format("%Y-%m-%d %H:%M");
    let envelope = Envelope::single(RecordRow::new().timestamp("At", ts));

    let body = String::from_utf8(encoder.encode(&envelope.flatten()).unwrap()).unwrap();
    assert_eq!(body.lines().nth(1), Some("2024-03-14 09:26"));
}

#[test]
fn test_csv_empty_collection_is_empty() {
    let envelope: Envelope<Account> = Envelope::collection(Vec::new(), PaginationMetadata::default());
    let body = encode(&envelope, Format::Csv).unwrap();
    assert!(body.body.is_empty());
}

#[test]
fn test_csv_records_without_fields_are_empty() {
    let body = encode(&Envelope::single(RecordRow::new()), Format::Csv).unwrap();
    assert!(body.body.is_empty());

    let rows = vec![RecordRow::new(), RecordRow::new()];
    let body = encode(&Envelope::collection(rows, PaginationMetadata::default()), Format::Csv)
        .unwrap();
    assert!(body.body.is_empty());
}

#[test]
fn test_csv_rejects_fields_after_empty_first_record() {
    let rows = vec![RecordRow::new(), RecordRow::new().text("a", "1")];
    let err = encode(&Envelope::collection(rows, PaginationMetadata::default()), Format::Csv)
        .unwrap_err();
    assert!(err.is_encoding());
}

#[test]
fn test_csv_rejects_mismatched_layout() {
    let rows = vec![
        RecordRow::new().text("a", "1").text("b", "2"),
        RecordRow::new().text("a", "3"),
    ];
    let err = encode(&Envelope::collection(rows, PaginationMetadata::default()), Format::Csv)
        .unwrap_err();

    match err {
        Error::Encoding { format, message } => {
            assert_eq!(format, "csv");
            assert!(message.contains("record 1"));
        }
        other => panic!("Expected encoding error, got {other:?}"),
    }
}

// ============================================================================
// Dispatch Tests
// ============================================================================

#[test]
fn test_encoding_is_idempotent() {
    let envelope = Envelope::collection(accounts(), pagination());
    for format in [Format::Xml, Format::Json, Format::Csv] {
        let first = encode(&envelope, format).unwrap();
        let second = encode(&envelope, format).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_unknown_token_matches_default() {
    let envelope = Envelope::collection(accounts(), pagination());
    let unknown = encode(&envelope, Format::from_token(Some("foo"))).unwrap();
    let absent = encode(&envelope, Format::from_token(None)).unwrap();

    assert_eq!(unknown, absent);
    assert_eq!(unknown.format, Format::Xml);
    assert_eq!(unknown.content_type, "text/xml");
}

#[test]
fn test_generic_encoder_selects_encoder() {
    let encoder = GenericEncoder::new();
    assert_eq!(encoder.encoder(Format::Json).format(), Format::Json);
    assert_eq!(encoder.encoder(Format::Csv).format(), Format::Csv);
    assert_eq!(encoder.encoder(Format::Xml).format(), Format::Xml);
}

#[test]
fn test_generic_encoder_from_config() {
    let config = crate::config::RenderConfig {
        xml_indent: 2,
        ..Default::default()
    };
    let encoder = GenericEncoder::from_config(&config);
    let body = encoder
        .encode(&Envelope::single(RecordRow::new().text("a", "1")), Format::Xml)
        .unwrap();

    assert!(text(&body).contains("\n  <Record>\n    <a>1</a>\n  </Record>\n"));
}
