//! Navigation link building
//!
//! Links are built from a private copy of the request URI: the query is
//! cloned, the page parameters are overwritten and the query is re-encoded
//! with keys in sorted order.

use super::calculator::{calculate, is_last_page};
use super::types::{
    effective_page_size, PaginationMetadata, DEFAULT_PAGE_PARAM, DEFAULT_PAGE_SIZE_PARAM,
};
use crate::error::Result;
use std::collections::BTreeMap;
use url::Url;

/// Builds pagination metadata and navigation links for one request
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base: Url,
    page_param: String,
    page_size_param: String,
}

impl LinkBuilder {
    /// Create a link builder for a request URI
    pub fn new(request_uri: &Url) -> Self {
        Self {
            base: request_uri.clone(),
            page_param: DEFAULT_PAGE_PARAM.to_string(),
            page_size_param: DEFAULT_PAGE_SIZE_PARAM.to_string(),
        }
    }

    /// Create a link builder from an absolute URI string
    pub fn parse(request_uri: &str) -> Result<Self> {
        Ok(Self::new(&Url::parse(request_uri)?))
    }

    /// Set the query parameter names used for page and page size
    #[must_use]
    pub fn with_params(
        mut self,
        page_param: impl Into<String>,
        page_size_param: impl Into<String>,
    ) -> Self {
        self.page_param = page_param.into();
        self.page_size_param = page_size_param.into();
        self
    }

    /// URI of the given page
    pub fn page_uri(&self, page: u64, page_size: u64) -> String {
        let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, value) in self.base.query_pairs() {
            params
                .entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }
        params.insert(self.page_param.clone(), vec![page.to_string()]);
        params.insert(self.page_size_param.clone(), vec![page_size.to_string()]);

        let mut uri = self.base.clone();
        uri.set_fragment(None);
        {
            let mut query = uri.query_pairs_mut();
            query.clear();
            for (key, values) in &params {
                for value in values {
                    query.append_pair(key, value);
                }
            }
        }
        uri.to_string()
    }

    /// Escaped path of the request, without query
    pub fn self_uri(&self) -> String {
        self.base.path().to_string()
    }

    /// Build the pagination block for a page of a collection
    pub fn build(&self, page: i64, page_size: u64, total_records: u64) -> PaginationMetadata {
        let page_size = effective_page_size(page_size);
        let current = page.max(0) as u64;

        let mut num_pages = 1;
        let mut end = 0;
        if total_records > 0 {
            let window = calculate(page, page_size, total_records);
            num_pages = window.num_pages;
            end = window.end();
            if is_last_page(current, num_pages) {
                end = end.saturating_sub(1);
            }
        }

        let last = num_pages - 1;
        let next = current.saturating_add(1).min(last);
        let previous = current.saturating_sub(1);

        let mut metadata = PaginationMetadata {
            start: current.saturating_mul(page_size),
            end,
            total: total_records,
            page: current,
            page_size,
            num_pages,
            first_page_uri: self.page_uri(0, page_size),
            last_page_uri: self.page_uri(last, page_size),
            next_page_uri: self.page_uri(next, page_size),
            previous_page_uri: self.page_uri(previous, page_size),
            self_uri: self.self_uri(),
        };

        if num_pages == 1 && current == 0 {
            metadata.next_page_uri.clear();
            metadata.previous_page_uri.clear();
        } else if current == last {
            metadata.next_page_uri.clear();
        } else if current == 0 {
            metadata.previous_page_uri.clear();
        }

        tracing::debug!(
            page = current,
            page_size,
            total = total_records,
            num_pages,
            end,
            "Built pagination block"
        );

        metadata
    }
}
