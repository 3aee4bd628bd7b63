use crate::catalog::Filter;
use crate::ui::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Browser keys: folder grid and folder contents
pub(super) fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Enter | KeyCode::Char('l') => app.activate(),
        KeyCode::Esc => app.escape(),
        KeyCode::Backspace | KeyCode::Char('h') => app.go_back(),
        KeyCode::Tab => app.next_filter(),
        KeyCode::BackTab => app.prev_filter(),
        KeyCode::Char(c @ '0'..='4') => {
            let index = c as usize - '0' as usize;
            if let Some(filter) = Filter::CYCLE.get(index) {
                app.set_filter(*filter);
            }
        }
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
}
