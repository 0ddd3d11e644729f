//! Conversion of HTTP failures into crate errors.
//!
//! Every request made by the catalog client funnels its failure through
//! [`ApiError`], which keeps the status code and the endpoint so the
//! classification into [`DexError`] variants happens in one place.

use std::fmt;

use reqwest::StatusCode;

use crate::error::DexError;

/// A failed catalog request.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code, absent for transport failures
    pub status: Option<StatusCode>,
    /// The URL that was requested
    pub endpoint: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// A failure that never produced a response (DNS, connect, timeout, body).
    pub fn transport(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: None,
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// A response that arrived with a non-success status.
    pub fn with_status(endpoint: impl Into<String>, status: StatusCode) -> Self {
        Self {
            status: Some(status),
            endpoint: endpoint.into(),
            message: format!("HTTP {status}"),
        }
    }

    pub fn from_reqwest(endpoint: &str, err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::with_status(endpoint, status),
            None => Self::transport(endpoint, err.to_string()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(StatusCode::NOT_FOUND)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.endpoint)
    }
}

impl From<ApiError> for DexError {
    fn from(error: ApiError) -> Self {
        match error.status {
            None => DexError::Network(format!("{}: {}", error.endpoint, error.message)),
            Some(_) if error.is_not_found() => DexError::NotFound(error.endpoint),
            Some(status) => DexError::Api {
                status: status.as_u16(),
                endpoint: error.endpoint,
            },
        }
    }
}
