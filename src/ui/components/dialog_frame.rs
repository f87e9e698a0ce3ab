//! Dialog Frame Component
//!
//! A centered frame with rounded borders for confirmations and alerts.
//! Clears the background and sizes itself to the terminal.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIALOG_BG, COLOR_HEADER};

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    /// Border color, defaults to the theme border
    pub accent: Color,
    /// Minimum width
    pub min_width: u16,
    /// Maximum width
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            accent: COLOR_BORDER,
            min_width: 30,
            max_width: 60,
        }
    }

    /// Set the border color
    pub fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

/// Half the screen on wide terminals, nearly all of it on narrow ones.
fn dialog_width(config: &DialogFrameConfig, area_width: u16) -> u16 {
    let available = area_width.saturating_sub(4);
    let preferred = if area_width < 80 {
        available
    } else {
        area_width / 2
    };
    preferred
        .clamp(config.min_width, config.max_width.max(config.min_width))
        .min(available)
}

/// Render a dialog frame centered in `area` and return the inner content area.
pub fn render_dialog_frame(frame: &mut Frame, area: Rect, config: &DialogFrameConfig) -> Rect {
    let width = dialog_width(config, area.width);
    let height = (config.content_height + 2).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(config.accent))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}
