//! Layout components (header, message region, status bar)

use crate::app::App;
use crate::state::{FieldValue, Form, FormField, FormMessage, MessageKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Height of the message region (with borders)
pub const MESSAGE_HEIGHT: u16 = 4;

/// Split the screen into header, form, message region and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Header
            Constraint::Min(0),                 // Form
            Constraint::Length(MESSAGE_HEIGHT), // Message region
            Constraint::Length(1),              // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2], chunks[3])
}

/// Draw the title line
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Fanebust Anleggstjenester ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0x4A, 0x37, 0x28))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " Contact us about your project",
            Style::default().fg(Color::Rgb(0xE0, 0x7B, 0x39)),
        ),
    ]));
    frame.render_widget(header, area);
}

/// Colour of a message by category
fn message_color(kind: MessageKind) -> Color {
    match kind {
        MessageKind::Success => Color::Green,
        MessageKind::Error => Color::Red,
    }
}

/// Draw the message region; empty when there is nothing to report
pub fn draw_message(frame: &mut Frame, area: Rect, message: Option<&FormMessage>) {
    let Some(message) = message else {
        return;
    };

    let color = message_color(message.kind);
    let title = match message.kind {
        MessageKind::Success => " Sent ",
        MessageKind::Error => " Not sent ",
    };

    let paragraph = Paragraph::new(message.text.as_str())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(paragraph, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Transport indicator: green when real emails go out
    let transport = if app.state.transport_name == "simulated" {
        Span::styled(" ○ simulated ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            format!(" ● {} ", app.state.transport_name),
            Style::default().fg(Color::Green),
        )
    };
    spans.push(transport);

    spans.push(Span::styled(
        status_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.quit_hint {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the current focus
fn status_hints(app: &App) -> String {
    if app.state.is_busy() {
        return "Sending your request…".to_string();
    }

    let submit = crate::platform::SUBMIT_SHORTCUT;
    if app.state.form.is_submit_row_active() {
        return format!("Enter:send  {submit}:send  Tab:next  F1:help");
    }

    let form = &app.state.form;
    match form.get_field(form.active_field()) {
        Some(field) => field_hints(field),
        None => format!("Tab:next  S-Tab:prev  {submit}:send  F1:help"),
    }
}

/// Hints for editing a field, by the kind of value it holds
fn field_hints(field: &FormField) -> String {
    let submit = crate::platform::SUBMIT_SHORTCUT;
    match field.value {
        FieldValue::Choice(_) => format!("Space/←→:choose  Tab:next  {submit}:send  F1:help"),
        FieldValue::Flag(_) => format!("Space:toggle  Tab:next  {submit}:send  F1:help"),
        FieldValue::Text(_) if field.is_multiline => {
            format!("Enter:new line  Tab:next  {submit}:send  F1:help")
        }
        FieldValue::Text(_) => format!("Tab:next  S-Tab:prev  {submit}:send  F1:help"),
    }
}
