//! Reusable UI Components
//!
//! - `InputField` - Text input with focus handling, placeholder and errors
//! - `StatusIndicator` - Spinner, success, and error indicators
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod input_field;
mod status_indicator;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{render_input_field, InputFieldConfig};
pub use status_indicator::{render_status_indicator, StatusIndicatorType};
