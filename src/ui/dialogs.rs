//! Overlays drawn above the catalog view.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};
use crate::app::{AlertKind, Dialog};

fn kind_color(kind: AlertKind) -> ratatui::style::Color {
    match kind {
        AlertKind::Success => COLOR_SUCCESS,
        AlertKind::Error => COLOR_ERROR,
    }
}

pub(super) fn render_dialog(frame: &mut Frame, area: Rect, dialog: &Dialog) {
    match dialog {
        Dialog::ConfirmDelete { product } => {
            let lines = vec![
                Line::from(""),
                Line::from(vec![
                    Span::raw(" Delete "),
                    Span::styled(
                        product.product_code.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("?"),
                ]),
                Line::from(""),
                Line::from(vec![
                    Span::styled(" [y] ", Style::default().fg(COLOR_ERROR)),
                    Span::raw("Delete   "),
                    Span::styled("[n] ", Style::default().fg(COLOR_DIM)),
                    Span::raw("Cancel"),
                ]),
            ];
            let config = DialogFrameConfig::new("Delete product", lines.len() as u16)
                .accent(COLOR_ERROR);
            let inner = render_dialog_frame(frame, area, &config);
            frame.render_widget(Paragraph::new(lines), inner);
        }
        Dialog::Alert { kind, title, text } => {
            let color = kind_color(*kind);
            let mut lines: Vec<Line> = vec![Line::from("")];
            lines.extend(text.lines().map(|l| Line::from(format!(" {}", l))));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                " Press Enter to close",
                Style::default().fg(COLOR_DIM),
            )));

            let config = DialogFrameConfig::new(title, lines.len() as u16)
                .accent(color)
                .max_width(70);
            let inner = render_dialog_frame(frame, area, &config);
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
        }
        Dialog::Toast { kind, title, .. } => render_toast(frame, area, *kind, title),
    }
}

/// Non-modal message in the top-right corner.
fn render_toast(frame: &mut Frame, area: Rect, kind: AlertKind, title: &str) {
    let color = kind_color(kind);
    let width = (title.chars().count() as u16 + 6).min(area.width);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width,
        height: 3.min(area.height),
    };

    frame.render_widget(Clear, toast_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));
    let text = Paragraph::new(Span::styled(
        title.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(text, toast_area);
}
