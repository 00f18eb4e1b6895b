//! axum response adapters
//!
//! Encoded bodies become `200 OK` responses carrying the format's content
//! type. Errors become `400` when the request was at fault and `500`
//! otherwise.

use crate::encode::EncodedBody;
use crate::error::Error;
use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

impl IntoResponse for EncodedBody {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, self.content_type)],
            Body::from(self.body),
        )
            .into_response()
    }
}

impl Error {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = if status == StatusCode::BAD_REQUEST {
            tracing::warn!(error = %self, "Rejected request");
            format!("Bad Request {self}")
        } else {
            tracing::error!(error = %self, "Failed to render response");
            format!("Internal Server Error {self}")
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}
