// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # paged-render
//!
//! Paginated multi-format response rendering for a REST listing API.
//!
//! ## Features
//!
//! - **Page-number pagination**: record window, page count and navigation links
//! - **Three wire formats**: XML (default), JSON and CSV from one record description
//! - **Format negotiation**: case-insensitive tokens with XML fallback
//! - **axum integration**: encoded bodies and errors convert into responses
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paged_render::{Client, Format, Renderer};
//! use url::Url;
//!
//! let renderer = Renderer::default();
//! let uri = Url::parse("http://api.example.com/Accounts/AC1/Clients.json?Page=1")?;
//! let request = renderer.page_request(&uri);
//!
//! let body = renderer.render_collection(
//!     &uri,
//!     request,
//!     120,
//!     vec![Client::new("CL1")],
//!     Format::from_path(uri.path()),
//! )?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! request URI ──► PageRequest ──► calculate() ──► LinkBuilder ──► PaginationMetadata
//!                                                                        │
//! Vec<R: Record> ───────────────────────────────► Envelope ◄─────────────┘
//!                                                    │ flatten
//!                                                    ▼
//!                                   Document ──► Json | Xml | Csv encoder ──► EncodedBody
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types: wire formats and content types
pub mod types;

/// Record descriptions handed to the encoders
pub mod record;

/// Page-number pagination and navigation links
pub mod pagination;

/// Response encoders (XML, JSON, CSV)
pub mod encode;

/// Rendering configuration
pub mod config;

/// Request rendering pipeline
pub mod render;

/// axum response adapters
pub mod response;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::RenderConfig;
pub use encode::{encode, EncodedBody, Envelope, GenericEncoder};
pub use pagination::{calculate, LinkBuilder, PageRequest, PageWindow, PaginationMetadata};
pub use record::{Client, Field, FieldValue, Record, RecordRow};
pub use render::Renderer;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
