//! Client-visible failures with fixed status codes and bodies.
//!
//! Bodies are single-line plain text terminated by `\n`; beacon clients match
//! them exactly.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use navstat_core::error::NavstatError;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Error parsing JSON")]
    Json,
    #[error("Invalid page-uri passed")]
    InvalidPageUri,
    #[error("Unable to validate JSON")]
    Validation,
    #[error("Error recording stats")]
    Record,
    #[error("Internal server error")]
    Internal,
}

impl Rejection {
    pub fn status(self) -> StatusCode {
        match self {
            Rejection::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Rejection::Json | Rejection::Validation => StatusCode::BAD_REQUEST,
            Rejection::InvalidPageUri => StatusCode::NOT_ACCEPTABLE,
            Rejection::Record => StatusCode::BAD_GATEWAY,
            Rejection::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Label used for the `outcome` of the reports counter.
    pub fn outcome(self) -> &'static str {
        match self {
            Rejection::MethodNotAllowed => "method_not_allowed",
            Rejection::Json => "bad_json",
            Rejection::InvalidPageUri => "invalid_page_uri",
            Rejection::Validation => "invalid_report",
            Rejection::Record => "record_failed",
            Rejection::Internal => "internal",
        }
    }
}

impl From<NavstatError> for Rejection {
    fn from(e: NavstatError) -> Self {
        match e {
            NavstatError::BadRequest(_) => Rejection::Json,
            NavstatError::InvalidPageUri(_) => Rejection::InvalidPageUri,
            NavstatError::ValidationFailed { .. } => Rejection::Validation,
            NavstatError::RecordFailed { .. } => Rejection::Record,
            NavstatError::Config(_) | NavstatError::Internal(_) => Rejection::Internal,
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        let body = format!("{self}\n");
        let mut resp = (self.status(), body).into_response();
        if self == Rejection::MethodNotAllowed {
            resp.headers_mut()
                .insert(header::ALLOW, header::HeaderValue::from_static("POST"));
        }
        resp
    }
}
