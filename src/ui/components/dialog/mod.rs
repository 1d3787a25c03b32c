//! Dialog components for TUI

mod base;
mod help_dialog;

pub use help_dialog::render_help_dialog;
