//! AppMessage enum for async communication within the application.

use crate::error::ApiError;
use crate::models::Product;

/// Results posted back to the event loop by spawned API tasks.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Full collection fetched on activation
    ProductsLoaded(Vec<Product>),
    /// Collection fetch failed
    ProductsLoadFailed(ApiError),
    /// Server accepted a new product
    ProductCreated(Product),
    /// Create call failed
    ProductCreateFailed(ApiError),
    /// Server removed the product with this id
    ProductDeleted { id: i64 },
    /// Delete call failed
    ProductDeleteFailed { id: i64, error: ApiError },
    /// Shared loading flag changed
    LoadingChanged(bool),
}

impl AppMessage {
    /// Short name for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            AppMessage::ProductsLoaded(_) => "ProductsLoaded",
            AppMessage::ProductsLoadFailed(_) => "ProductsLoadFailed",
            AppMessage::ProductCreated(_) => "ProductCreated",
            AppMessage::ProductCreateFailed(_) => "ProductCreateFailed",
            AppMessage::ProductDeleted { .. } => "ProductDeleted",
            AppMessage::ProductDeleteFailed { .. } => "ProductDeleteFailed",
            AppMessage::LoadingChanged(_) => "LoadingChanged",
        }
    }
}
