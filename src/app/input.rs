//! Input handling for the Folio TUI
//!
//! Keys are mapped onto `App` methods and nothing else. The help overlay
//! captures input first, then the item viewer, then the browser.

use crate::ui::{App, Overlay};
use crossterm::event::KeyEvent;

mod normal;
mod overlay;

use normal::handle_normal_mode;
use overlay::{handle_help_input, handle_viewer_input};

/// Main key event handler - dispatches to mode-specific handlers
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if app.overlay != Overlay::None {
        return handle_help_input(app, key);
    }

    if app.modal.is_open() {
        return handle_viewer_input(app, key);
    }

    handle_normal_mode(app, key)
}
