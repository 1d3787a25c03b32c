//! Keyboard help dialog

use super::base::{render_dialog, DialogConfig};
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the key reference overlay centered on the screen
pub fn render_help_dialog(frame: &mut Frame) {
    let message = format!(
        "Tab / Shift+Tab: move between fields\n\
         Enter: new line in the description, send on the button\n\
         Space or Left/Right: choose a project type\n\
         Space: tick the site visit box\n\
         {SUBMIT_SHORTCUT}: send the request from anywhere\n\
         Ctrl+C twice: quit\n\n\
         Fields marked * are required."
    );

    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "F1",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to close"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Keys",
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            message: &message,
            hint: Some(hint),
            max_width: 72,
        },
    );
}
