//! Input Field Component
//!
//! A labelled text input with focus styling, placeholder and inline error.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Optional error message to display below the input
    pub error: Option<&'a str>,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            error: None,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Rows needed: label, boxed input, and the error line when present.
    pub fn height(&self) -> u16 {
        if self.error.is_some() {
            5
        } else {
            4
        }
    }
}

/// Render an input field and return the height it consumed.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let inner_width = area.width.saturating_sub(4);
    let row = |offset: u16, height: u16| Rect {
        x: area.x + 2,
        y: area.y + offset,
        width: inner_width,
        height,
    };

    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        row(0, 1),
    );

    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let (mut content, text_style) = match config.placeholder {
        Some(placeholder) if config.value.is_empty() && !config.focused => {
            (placeholder.to_string(), Style::default().fg(COLOR_DIM))
        }
        _ if config.focused => (config.value.to_string(), Style::default().fg(Color::White)),
        _ => (config.value.to_string(), Style::default().fg(COLOR_DIM)),
    };
    if config.focused {
        content.push('\u{2588}'); // Block cursor
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(content, text_style))).block(block),
        row(1, 3),
    );

    if let Some(error) = config.error {
        let error_text = Paragraph::new(Line::from(vec![
            Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
            Span::styled(error, Style::default().fg(COLOR_ERROR)),
        ]));
        frame.render_widget(error_text, row(4, 1));
    }

    config.height()
}
