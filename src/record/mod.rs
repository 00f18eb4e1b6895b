//! Record module
//!
//! Entities handed to the encoders describe their fields through the
//! [`Record`] trait instead of runtime inspection.
//!
//! # Overview
//!
//! - [`Client`] is the application-client entity of the listing API
//! - [`RecordRow`] is an ordered row assembled at runtime for any other shape

mod client;
mod row;
mod types;

pub use client::Client;
pub use row::{RecordRow, Scalar};
pub use types::{Field, FieldValue, Record, ANSIC_TIMESTAMP_FORMAT};
