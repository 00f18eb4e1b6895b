//! Common types used throughout paged-render
//!
//! This module contains the wire format token and the content types
//! shared by the encoders and the HTTP adapter.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Content Types
// ============================================================================

/// Content type for XML payloads
pub const CONTENT_TYPE_XML: &str = "text/xml";

/// Content type for JSON payloads
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Content type for CSV payloads
pub const CONTENT_TYPE_CSV: &str = "text/csv";

// ============================================================================
// Format Token
// ============================================================================

/// Output format selected by the request
///
/// Matching is case-insensitive and lenient: anything that is not
/// `json` or `csv` (including no token at all) selects XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// XML document rooted at `Response` (default)
    #[default]
    Xml,
    /// JSON object
    Json,
    /// Comma-separated values, one row per record
    Csv,
}

impl Format {
    /// Resolve a format token, falling back to XML
    pub fn from_token(token: Option<&str>) -> Self {
        match token.map(str::trim) {
            Some(t) if t.eq_ignore_ascii_case("json") => Format::Json,
            Some(t) if t.eq_ignore_ascii_case("csv") => Format::Csv,
            Some(t) if t.is_empty() || t.eq_ignore_ascii_case("xml") => Format::Xml,
            None => Format::Xml,
            Some(other) => {
                tracing::warn!(token = other, "Unrecognized format token, defaulting to xml");
                Format::Xml
            }
        }
    }

    /// Resolve the format from a filename-style suffix on a request path
    ///
    /// `/Accounts/AC1/Clients.json` selects JSON; a path without a suffix
    /// selects XML.
    pub fn from_path(path: &str) -> Self {
        let last = path.rsplit('/').next().unwrap_or_default();
        Self::from_token(last.split_once('.').map(|(_, ext)| ext))
    }

    /// Lowercase token for this format
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Xml => "xml",
            Format::Json => "json",
            Format::Csv => "csv",
        }
    }

    /// HTTP content type for payloads in this format
    pub fn content_type(&self) -> &'static str {
        match self {
            Format::Xml => CONTENT_TYPE_XML,
            Format::Json => CONTENT_TYPE_JSON,
            Format::Csv => CONTENT_TYPE_CSV,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Format {
    fn from(token: &str) -> Self {
        Self::from_token(Some(token))
    }
}
