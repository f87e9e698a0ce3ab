//! Color theme constants for the catalog UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for the focused panel and selected row
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Loading spinner
pub const COLOR_LOADING: Color = Color::Yellow;

/// Success state - green #04B575
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Error state
pub const COLOR_ERROR: Color = Color::Red;

/// Background color for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Background of the highlighted list row
pub const COLOR_SELECTED_BG: Color = Color::Rgb(40, 40, 55);
