//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier that turns Enter into "send" from any field
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SEND_ENTER_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SEND_ENTER_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Send shortcut display for help text.
/// Ctrl+S works on all platforms (Cmd+Enter / Ctrl+Enter also work where the terminal reports them)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
