//! Contact form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of one single-line field box
const FIELD_HEIGHT: u16 = 3;

/// Draw the contact form with its action panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(24), // Action panel
        ])
        .split(area);

    draw_fields(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the form fields
fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // Name
            Constraint::Length(FIELD_HEIGHT), // Email
            Constraint::Length(FIELD_HEIGHT), // Phone
            Constraint::Length(FIELD_HEIGHT), // Address
            Constraint::Length(FIELD_HEIGHT), // Project type
            Constraint::Min(5),               // Description
            Constraint::Length(FIELD_HEIGHT), // Site visit
        ])
        .margin(1)
        .split(area);

    let form_focused = !form.is_submit_row_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Request a quote ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    for (index, (field, chunk)) in form.fields().into_iter().zip(chunks.iter()).enumerate() {
        draw_field(frame, *chunk, field, form.active_field_index == index);
    }
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let control = &app.state.submit_control;
    let is_focused = form.is_submit_row_active();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Send
            Constraint::Length(1),             // spacing
            Constraint::Min(0),                // hints
        ])
        .split(inner_area);

    render_action_button(
        frame,
        chunks[0],
        control.label(),
        is_focused,
        !control.is_disabled(),
        Color::Green,
    );

    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));
    let footnote = if form.has_invalid_fields() {
        Span::styled("Fix the fields in red", Style::default().fg(Color::Red))
    } else {
        Span::styled("* required", Style::default().fg(Color::DarkGray))
    };
    let hints = Paragraph::new(vec![
        Line::from(vec![key("Tab"), Span::raw(" next")]),
        Line::from(vec![key(crate::platform::SUBMIT_SHORTCUT), Span::raw(" send")]),
        Line::from(vec![key("F1"), Span::raw(" help")]),
        Line::from(""),
        Line::from(footnote),
    ])
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(hints, chunks[2]);
}
