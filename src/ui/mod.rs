//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, form_area, message_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);
    forms::draw(frame, form_area, app);
    layout::draw_message(frame, message_area, app.state.message.as_ref());
    layout::draw_status_bar(frame, status_area, app);

    if app.state.show_help {
        components::render_help_dialog(frame);
    }
}
