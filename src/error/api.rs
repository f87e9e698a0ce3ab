//! Errors returned by the product API.

use thiserror::Error;

use crate::traits::HttpError;

/// Where a failed call went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorOrigin {
    /// The request never produced a usable response (transport, decoding).
    Client,
    /// The server answered with a non-2xx status.
    Server,
}

/// Failure of a single API call.
///
/// The API layer does not classify errors further than their origin; callers
/// show the message and move on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Error: {message}")]
    Client { message: String },

    #[error("Error code: {status}\nMessage: {message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    pub fn client(message: impl Into<String>) -> Self {
        ApiError::Client {
            message: message.into(),
        }
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        ApiError::Server {
            status,
            message: message.into(),
        }
    }

    pub fn origin(&self) -> ErrorOrigin {
        match self {
            ApiError::Client { .. } => ErrorOrigin::Client,
            ApiError::Server { .. } => ErrorOrigin::Server,
        }
    }

    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Client { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Transport failures never carry a server status; non-2xx responses are
/// mapped to [`ApiError::Server`] by the caller.
impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        ApiError::Client {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Client {
            message: format!("invalid response body: {}", err),
        }
    }
}
