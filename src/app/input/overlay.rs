use crate::ui::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Help overlay: scroll or dismiss, everything else is swallowed
pub(super) fn handle_help_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => app.close_overlay(),
        KeyCode::Down | KeyCode::Char('j') => app.overlay_scroll_down(),
        KeyCode::Up | KeyCode::Char('k') => app.overlay_scroll_up(),
        _ => {}
    }
}

/// Item viewer: zoom, hand off to the system viewer, or close
pub(super) fn handle_viewer_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => app.escape(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }
        KeyCode::Char('+') | KeyCode::Char('=') => app.zoom_in(),
        KeyCode::Char('-') | KeyCode::Char('_') => app.zoom_out(),
        KeyCode::Char('r') | KeyCode::Char('0') => app.zoom_reset(),
        KeyCode::Char('o') | KeyCode::Enter => app.open_external(),
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
}
