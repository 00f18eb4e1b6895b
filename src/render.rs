//! Request rendering pipeline
//!
//! Runs the three steps for one request in order: calculate the page
//! window, build the pagination block, encode the envelope.

use crate::config::RenderConfig;
use crate::encode::{EncodedBody, Envelope, GenericEncoder};
use crate::error::Result;
use crate::pagination::{LinkBuilder, PageRequest, PaginationMetadata};
use crate::record::Record;
use crate::types::Format;
use url::Url;

/// Renders records into response payloads
///
/// Holds no per-request state and can be shared across requests.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
    encoder: GenericEncoder,
}

impl Renderer {
    /// Create a renderer from a config, validating it first
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        let encoder = GenericEncoder::from_config(&config);
        Ok(Self { config, encoder })
    }

    /// Config this renderer was built from
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Read the page request from the request URI
    pub fn page_request(&self, request_uri: &Url) -> PageRequest {
        PageRequest::from_query(
            request_uri,
            &self.config.page_param,
            &self.config.page_size_param,
            self.config.default_page_size,
        )
    }

    /// Link builder for a request URI using the configured parameter names
    pub fn link_builder(&self, request_uri: &Url) -> LinkBuilder {
        LinkBuilder::new(request_uri)
            .with_params(&self.config.page_param, &self.config.page_size_param)
    }

    /// Build the pagination block for a request
    pub fn paginate(
        &self,
        request_uri: &Url,
        request: PageRequest,
        total_records: u64,
    ) -> PaginationMetadata {
        self.link_builder(request_uri)
            .build(request.page, request.page_size, total_records)
    }

    /// Render a page of records
    pub fn render_collection<R: Record>(
        &self,
        request_uri: &Url,
        request: PageRequest,
        total_records: u64,
        records: Vec<R>,
        format: Format,
    ) -> Result<EncodedBody> {
        let pagination = self.paginate(request_uri, request, total_records);
        tracing::debug!(
            path = request_uri.path(),
            records = records.len(),
            total = total_records,
            %format,
            "Rendering collection"
        );
        self.encoder
            .encode(&Envelope::collection(records, pagination), format)
    }

    /// Render a single record
    pub fn render_single<R: Record>(&self, record: R, format: Format) -> Result<EncodedBody> {
        tracing::debug!(%format, element = R::ELEMENT, "Rendering single record");
        self.encoder.encode(&Envelope::single(record), format)
    }

    /// Render an already assembled envelope
    pub fn render<R: Record>(&self, envelope: &Envelope<R>, format: Format) -> Result<EncodedBody> {
        self.encoder.encode(envelope, format)
    }
}
