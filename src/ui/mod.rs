//! UI rendering for the catalog screen
//!
//! The screen is a single view stacked top to bottom:
//! - Header with the API address
//! - Product code input with inline error
//! - Product table with the current selection
//! - Status bar with loading spinner, last error or keybind hints
//!
//! Dialogs (confirmation, alerts, toasts) are drawn on top.

mod catalog;
mod components;
mod dialogs;
mod theme;

pub use catalog::format_timestamp;
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};

use ratatui::Frame;

use crate::app::App;

/// Draw the whole screen for the current state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    catalog::render_catalog(frame, area, app);

    if let Some(dialog) = &app.dialog {
        dialogs::render_dialog(frame, area, dialog);
    }
}
