//! Message handling for the App.

use tracing::{debug, error, warn};

use super::{App, AppMessage, Dialog};

/// Inline message after the collection failed to load.
pub const LOAD_FAILED: &str = "Unable to load products";
/// Inline message after a create call failed.
pub const ADD_FAILED: &str = "Unable to add product";

impl App {
    /// Handle an incoming async message
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        // Results that land after teardown must not touch state.
        if self.is_torn_down() {
            debug!("Ignoring {} after teardown", msg.kind());
            return;
        }

        self.mark_dirty();
        match msg {
            AppMessage::ProductsLoaded(products) => {
                debug!("Loaded {} products", products.len());
                self.products = products;
                self.clamp_selection();
            }
            AppMessage::ProductsLoadFailed(err) => {
                error!("Failed to load products: {}", err);
                self.error_message = Some(LOAD_FAILED.to_string());
            }
            AppMessage::ProductCreated(product) => {
                debug!("Product {} created as id {}", product.product_code, product.id);
                self.products.insert(0, product);
                self.selected = 0;
                self.product_code.clear();
                self.clear_error();
                self.is_submitting = false;
                self.dialog = Some(Dialog::success(
                    "Product added",
                    "The product has been added to the catalog",
                ));
            }
            AppMessage::ProductCreateFailed(err) => {
                error!("Failed to create product: {}", err);
                self.error_message = Some(ADD_FAILED.to_string());
                self.is_submitting = false;
                self.dialog = Some(Dialog::error("Could not add product", err.to_string()));
            }
            AppMessage::ProductDeleted { id } => {
                self.products.retain(|p| p.id != id);
                self.clamp_selection();
                self.dialog = Some(Dialog::toast("Product deleted"));
            }
            AppMessage::ProductDeleteFailed { id, error } => {
                warn!("Failed to delete product {}: {}", id, error);
                self.dialog = Some(Dialog::error("Delete failed", error.to_string()));
            }
            AppMessage::LoadingChanged(loading) => {
                self.is_loading = loading;
            }
        }
    }
}
