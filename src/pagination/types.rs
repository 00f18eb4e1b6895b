//! Pagination types
//!
//! Defines the page request read from a query, the window produced by the
//! calculator and the metadata block rendered alongside a collection.

use crate::error::{Error, Result};
use crate::record::FieldValue;
use url::Url;

/// Page size used when a request asks for zero or does not say
pub const DEFAULT_PAGE_SIZE: u64 = 50;

/// Query parameter carrying the page number
pub const DEFAULT_PAGE_PARAM: &str = "Page";

/// Query parameter carrying the page size
pub const DEFAULT_PAGE_SIZE_PARAM: &str = "PageSize";

/// Replace a zero page size with the default
pub fn effective_page_size(page_size: u64) -> u64 {
    if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    }
}

// ============================================================================
// PageRequest
// ============================================================================

/// Page and page size requested by a client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Requested page; may be negative or past the end
    pub page: i64,
    /// Records per page, never zero
    pub page_size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Create a page request, rejecting a negative page size
    pub fn new(page: i64, page_size: i64) -> Result<Self> {
        let page_size = u64::try_from(page_size).map_err(|_| {
            Error::pagination_input(format!("page size must not be negative, got {page_size}"))
        })?;

        Ok(Self {
            page,
            page_size: effective_page_size(page_size),
        })
    }

    /// Read the page request from a URI query
    ///
    /// Missing or unparsable values fall back to page 0 and the given
    /// default page size.
    pub fn from_query(
        uri: &Url,
        page_param: &str,
        page_size_param: &str,
        default_page_size: u64,
    ) -> Self {
        let mut request = Self {
            page: 0,
            page_size: effective_page_size(default_page_size),
        };

        for (key, value) in uri.query_pairs() {
            if key == page_param {
                request.page = value.trim().parse().unwrap_or(0);
            } else if key == page_size_param {
                request.page_size = match value.trim().parse::<u64>() {
                    Ok(size) if size > 0 => size,
                    _ => effective_page_size(default_page_size),
                };
            }
        }

        request
    }
}

// ============================================================================
// PageWindow
// ============================================================================

/// Result of the pagination calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Index of the first record on the page
    pub offset: u64,
    /// Number of records covered from the offset
    pub limit: u64,
    /// Total number of pages, at least 1
    pub num_pages: u64,
}

impl PageWindow {
    /// Index one past the window
    pub fn end(&self) -> u64 {
        self.offset + self.limit
    }
}

// ============================================================================
// PaginationMetadata
// ============================================================================

/// Pagination block rendered with a collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationMetadata {
    /// Index of the first record, `page * page_size`
    pub start: u64,
    /// Index of the last record on the page
    pub end: u64,
    /// Total number of records in the collection
    pub total: u64,
    /// Current page, zero-based
    pub page: u64,
    /// Records per page
    pub page_size: u64,
    /// Number of pages, at least 1
    pub num_pages: u64,
    /// Link to page 0
    pub first_page_uri: String,
    /// Link to the last page
    pub last_page_uri: String,
    /// Link to the next page; empty on the last page
    pub next_page_uri: String,
    /// Link to the previous page; empty on the first page
    pub previous_page_uri: String,
    /// Request path without query
    pub self_uri: String,
}

/// One entry of the pagination block with its name in each structured format
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationEntry<'a> {
    /// Key in JSON output
    pub json_name: &'static str,
    /// Attribute name in XML output
    pub xml_name: &'static str,
    /// Value
    pub value: FieldValue<'a>,
}

impl PaginationMetadata {
    /// Ordered entries of the block
    pub fn entries(&self) -> Vec<PaginationEntry<'_>> {
        fn entry<'a>(
            json_name: &'static str,
            xml_name: &'static str,
            value: FieldValue<'a>,
        ) -> PaginationEntry<'a> {
            PaginationEntry {
                json_name,
                xml_name,
                value,
            }
        }

        vec![
            entry("start", "start", count(self.start)),
            entry("end", "end", count(self.end)),
            entry("total", "total", count(self.total)),
            entry("page", "page", count(self.page)),
            entry("page_size", "pagesize", count(self.page_size)),
            entry("num_pages", "numpages", count(self.num_pages)),
            entry("first_page_uri", "firstpageuri", FieldValue::Text(&self.first_page_uri)),
            entry("last_page_uri", "lastpageuri", FieldValue::Text(&self.last_page_uri)),
            entry("next_page_uri", "nextpageuri", FieldValue::Text(&self.next_page_uri)),
            entry(
                "previous_page_uri",
                "previouspageuri",
                FieldValue::Text(&self.previous_page_uri),
            ),
            entry("uri", "uri", FieldValue::Text(&self.self_uri)),
        ]
    }

    /// Check if a next page link is present
    pub fn has_next(&self) -> bool {
        !self.next_page_uri.is_empty()
    }

    /// Check if a previous page link is present
    pub fn has_previous(&self) -> bool {
        !self.previous_page_uri.is_empty()
    }
}

fn count(n: u64) -> FieldValue<'static> {
    FieldValue::Unsigned(n)
}
