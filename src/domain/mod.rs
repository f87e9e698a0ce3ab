//! Domain rules that do not depend on I/O.
//!
//! - [`product_code`] - Format, validation and as-you-type regrouping of product codes

pub mod product_code;

pub use product_code::{format_while_typing, sanitize_keystroke, validate, CODE_CHARS, GROUP_LEN};
