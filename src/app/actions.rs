//! User-triggered actions: editing the code, adding and deleting products.

use tracing::{debug, info};

use super::{App, AppMessage, Dialog};
use crate::domain::product_code;
use crate::error::InputError;
use crate::models::{Product, ProductDraft};

impl App {
    /// Apply a raw input value: sanitize, regroup, clear any error.
    pub fn on_input_change(&mut self, raw: &str) {
        let cleaned = product_code::sanitize_keystroke(raw);
        self.product_code = product_code::format_while_typing(&cleaned);
        self.clear_error();
    }

    /// Append a typed character to the input.
    pub fn type_char(&mut self, c: char) {
        let mut raw = self.product_code.clone();
        raw.push(c);
        self.on_input_change(&raw);
    }

    /// Remove the last character of the input.
    pub fn backspace(&mut self) {
        let mut raw = self.product_code.clone();
        raw.pop();
        self.on_input_change(&raw);
    }

    pub fn clear_form(&mut self) {
        self.product_code.clear();
        self.clear_error();
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Check the current input against the format and the loaded collection.
    pub fn check_new_code(&self) -> Result<String, InputError> {
        let code = self.product_code.trim();
        if code.is_empty() {
            return Err(InputError::Empty);
        }
        if !product_code::validate(&self.product_code) {
            return Err(InputError::Malformed);
        }
        if self
            .products
            .iter()
            .any(|p| p.product_code == self.product_code)
        {
            return Err(InputError::Duplicate);
        }
        Ok(self.product_code.clone())
    }

    /// Create a product from the current input.
    ///
    /// Input errors are shown inline and no request is made. While a create
    /// call is outstanding further adds are ignored.
    pub fn add_product(&mut self) {
        if self.is_submitting {
            debug!("Add ignored: create already in flight");
            return;
        }

        let code = match self.check_new_code() {
            Ok(code) => code,
            Err(err) => {
                debug!("Rejected product code {:?}: {:?}", self.product_code, err);
                self.error_message = Some(err.to_string());
                return;
            }
        };

        info!("Creating product {}", code);
        self.is_submitting = true;

        let api = self.api.clone();
        let draft = ProductDraft::for_code(&code);
        self.spawn_guarded(async move {
            match api.create_product(&draft).await {
                Ok(product) => AppMessage::ProductCreated(product),
                Err(error) => AppMessage::ProductCreateFailed(error),
            }
        });
    }

    /// Ask for confirmation before deleting `product`.
    pub fn delete_product(&mut self, product: &Product) {
        self.dialog = Some(Dialog::ConfirmDelete {
            product: product.clone(),
        });
    }

    /// Ask to delete the product under the list cursor.
    pub fn request_delete_selected(&mut self) {
        if let Some(product) = self.selected_product().cloned() {
            self.delete_product(&product);
        }
    }

    /// Answer the open confirmation dialog.
    ///
    /// Only an explicit `true` on a pending delete issues the request.
    pub fn resolve_confirmation(&mut self, confirmed: bool) {
        let Some(Dialog::ConfirmDelete { product }) = self.dialog.take() else {
            return;
        };
        if !confirmed {
            debug!("Delete of product {} cancelled", product.id);
            return;
        }

        info!("Deleting product {} ({})", product.id, product.product_code);
        let api = self.api.clone();
        let id = product.id;
        self.spawn_guarded(async move {
            match api.delete_product(id).await {
                Ok(()) => AppMessage::ProductDeleted { id },
                Err(error) => AppMessage::ProductDeleteFailed { id, error },
            }
        });
    }

    /// Close an alert or toast. Confirmations are closed as "cancel".
    pub fn dismiss_dialog(&mut self) {
        match self.dialog {
            Some(Dialog::ConfirmDelete { .. }) => self.resolve_confirmation(false),
            _ => self.dialog = None,
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.products.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
