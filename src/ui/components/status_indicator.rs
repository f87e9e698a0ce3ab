//! Status Indicator Component
//!
//! Single-line spinner, error and info indicators for the status bar.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_LOADING};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks per spinner frame at the 16ms event loop rate.
const TICKS_PER_FRAME: u64 = 6;

#[derive(Debug, Clone)]
pub enum StatusIndicatorType {
    /// Spinning indicator; `frame` cycles through [`SPINNER_FRAMES`]
    Spinner { message: String, frame: usize },
    Error { message: String },
    Info { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, tick: u64) -> Self {
        Self::Spinner {
            message: message.into(),
            frame: spinner_frame_for_tick(tick),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

fn spinner_frame_for_tick(tick: u64) -> usize {
    ((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize
}

/// Render a status indicator as a single line.
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Line<'static> {
    let (marker, message, color) = match indicator {
        StatusIndicatorType::Spinner { message, frame } => {
            (get_spinner_char(*frame), message, COLOR_LOADING)
        }
        StatusIndicatorType::Error { message } => ('\u{2717}', message, COLOR_ERROR),
        StatusIndicatorType::Info { message } => {
            return Line::from(Span::styled(
                format!(" {}", message),
                Style::default().fg(COLOR_DIM),
            ));
        }
    };

    Line::from(vec![
        Span::styled(format!(" {} ", marker), Style::default().fg(color)),
        Span::styled(
            message.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}
