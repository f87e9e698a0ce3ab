//! Prelude module for convenient imports.
//!
//! ```ignore
//! use catalog::prelude::*;
//! ```

// Core application types
pub use crate::app::{AlertKind, App, AppMessage, Dialog, Focus};

// API client and its HTTP seam
pub use crate::api::ProductApi;
pub use crate::traits::{HttpClient, HttpError, Response};

// Model types
pub use crate::models::{Product, ProductDraft};

// Errors
pub use crate::error::{ApiError, ApiResult, InputError};

// UI entry point
pub use crate::ui::render;
