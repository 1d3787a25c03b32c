//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Border and title colour of a field
fn field_color(field: &FormField, is_active: bool) -> Color {
    if field.invalid {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

/// Short reason shown next to the title of an invalid field
fn invalid_hint(field: &FormField) -> &'static str {
    if field.kind == FieldKind::Email && !field.trimmed().is_empty() {
        "enter a valid email address"
    } else {
        "required"
    }
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let color = field_color(field, is_active);
    let style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    // Text fields show a placeholder when empty; choices and flags always render their state
    let is_text = matches!(field.value, FieldValue::Text(_));
    let display_value = field.display_value();
    let display_str = if is_text && display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active && is_text { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let title = if field.invalid {
        format!(" {} ({}) ", field.title(), invalid_hint(field))
    } else {
        format!(" {} ", field.title())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_is_red() {
        let mut field = FormField::text("name", "Name", false).required();
        field.invalid = true;
        assert_eq!(field_color(&field, true), Color::Red);
        field.invalid = false;
        assert_eq!(field_color(&field, true), Color::Cyan);
        assert_eq!(field_color(&field, false), Color::DarkGray);
    }

    #[test]
    fn test_invalid_hint_for_email() {
        let mut field = FormField::email("email", "Email").required();
        assert_eq!(invalid_hint(&field), "required");
        field.set_text("nope");
        assert_eq!(invalid_hint(&field), "enter a valid email address");
    }
}
