//! Rejections of the product code input, raised before any request is made.

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a product code")]
    Empty,

    #[error(
        "Invalid product code format. Expected XXXX-XXXX-XXXX-XXXX where X is an upper-case letter or digit"
    )]
    Malformed,

    #[error("This product code already exists")]
    Duplicate,
}
