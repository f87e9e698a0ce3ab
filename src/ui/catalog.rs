//! Main catalog view: header, code input, product table, status bar.

use chrono::DateTime;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::components::{
    render_input_field, render_status_indicator, InputFieldConfig, StatusIndicatorType,
};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED_BG};
use crate::app::{App, Focus};

const CODE_PLACEHOLDER: &str = "XXXX-XXXX-XXXX-XXXX";

/// Show a server timestamp as `YYYY-MM-DD HH:MM`, or as-is when it does not parse.
pub fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub(super) fn render_catalog(frame: &mut Frame, area: Rect, app: &App) {
    let input = input_config(app);
    let [header_area, input_area, table_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(input.height()),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area, app);
    render_input_field(frame, input_area, &input);
    render_table(frame, table_area, app);
    frame.render_widget(Paragraph::new(status_line(app)), status_area);
}

fn input_config(app: &App) -> InputFieldConfig<'_> {
    InputFieldConfig::new("Product code", &app.product_code)
        .focused(app.focus == Focus::Input && app.dialog.is_none())
        .placeholder(CODE_PLACEHOLDER)
        .error(app.error_message.as_deref())
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(
            " Product Catalog ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.api().base_url().to_string(), Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::List;
    let border_color = if focused { COLOR_ACCENT } else { COLOR_BORDER };

    let block = Block::default()
        .title(Span::styled(
            format!(" Products ({}) ", app.products.len()),
            Style::default().fg(COLOR_HEADER),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    if app.products.is_empty() {
        let text = if app.is_loading {
            "Loading products..."
        } else {
            "No products yet. Type a code above and press Enter."
        };
        let empty = Paragraph::new(Span::styled(text, Style::default().fg(COLOR_DIM))).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["ID", "Product code", "Barcode", "Created"])
        .style(Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD));

    let rows = app.products.iter().map(|p| {
        Row::new(vec![
            Cell::from(p.id.to_string()),
            Cell::from(p.product_code.clone()),
            Cell::from(p.barcode.clone()),
            Cell::from(format_timestamp(&p.created_at)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(21),
            Constraint::Length(21),
            Constraint::Min(16),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(if focused {
        Style::default()
            .bg(COLOR_SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    })
    .highlight_symbol(if focused { "> " } else { "  " });

    let mut state = TableState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn status_line(app: &App) -> Line<'static> {
    let indicator = if app.is_submitting {
        StatusIndicatorType::spinner("Saving", app.tick_count)
    } else if app.is_loading {
        StatusIndicatorType::spinner("Loading", app.tick_count)
    } else if let Some(message) = &app.error_message {
        StatusIndicatorType::error(message.clone())
    } else {
        StatusIndicatorType::info(key_hints(app.focus))
    };
    render_status_indicator(&indicator)
}

fn key_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Input => "Enter add · Esc clear · Tab list · Ctrl+C quit",
        Focus::List => "↑/↓ select · d delete · Tab input · q quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_falls_back_to_raw() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }

    #[test]
    fn test_format_timestamp_parses_rfc3339() {
        assert_eq!(format_timestamp("2024-03-01T10:15:00.000Z"), "2024-03-01 10:15");
        assert_eq!(format_timestamp("2024-03-01T10:15:00+02:00"), "2024-03-01 10:15");
    }

    #[test]
    fn test_key_hints_follow_focus() {
        assert!(key_hints(Focus::Input).contains("Enter add"));
        assert!(key_hints(Focus::List).contains("d delete"));
    }
}
