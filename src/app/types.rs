//! Type definitions for the controller state.
//!
//! - [`Focus`] - Which UI component has focus
//! - [`Dialog`] - Modal confirmation, alert or transient toast
//! - [`AlertKind`] - Success or error styling for alerts and toasts

use std::time::{Duration, Instant};

use crate::models::Product;

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(1500);

/// Represents which UI component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Overlay shown on top of the main screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// Ask before deleting `product`. Nothing is sent until confirmed.
    ConfirmDelete { product: Product },
    /// Blocking message, dismissed with Enter or Esc.
    Alert {
        kind: AlertKind,
        title: String,
        text: String,
    },
    /// Non-blocking message that disappears after [`TOAST_DURATION`].
    Toast {
        kind: AlertKind,
        title: String,
        shown_at: Instant,
    },
}

impl Dialog {
    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Dialog::Alert {
            kind: AlertKind::Success,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Dialog::Alert {
            kind: AlertKind::Error,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn toast(title: impl Into<String>) -> Self {
        Dialog::Toast {
            kind: AlertKind::Success,
            title: title.into(),
            shown_at: Instant::now(),
        }
    }

    /// Whether the dialog captures key presses.
    pub fn is_modal(&self) -> bool {
        !matches!(self, Dialog::Toast { .. })
    }

    /// Whether a toast has outlived its display time as of `now`.
    pub fn is_expired(&self, now: Instant) -> bool {
        match self {
            Dialog::Toast { shown_at, .. } => now.duration_since(*shown_at) >= TOAST_DURATION,
            _ => false,
        }
    }
}
