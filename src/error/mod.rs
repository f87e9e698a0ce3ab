//! Error types for the catalog client.
//!
//! Two families of failure exist:
//!
//! | Type | Raised by | Network call made |
//! |------|-----------|-------------------|
//! | [`InputError`] | controller, while checking the code input | No |
//! | [`ApiError`] | API layer, for any failed request | Yes |
//!
//! Transport-level failures from the HTTP seam are [`crate::traits::HttpError`]
//! and convert into [`ApiError`] with `?`.

mod api;
mod input;

pub use api::{ApiError, ErrorOrigin};
pub use input::InputError;

/// Result of a product API call.
pub type ApiResult<T> = Result<T, ApiError>;
