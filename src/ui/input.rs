use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Rows moved by PageUp/PageDown.
pub const PAGE_ROWS: isize = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('r') | KeyCode::F(5) => app.refresh(),
        KeyCode::Up | KeyCode::Char('k') => app.list_mut().move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.list_mut().move_selection(1),
        KeyCode::PageUp => app.list_mut().move_selection(-PAGE_ROWS),
        KeyCode::PageDown => app.list_mut().move_selection(PAGE_ROWS),
        KeyCode::Home | KeyCode::Char('g') => app.list_mut().select_first(),
        KeyCode::End | KeyCode::Char('G') => app.list_mut().select_last(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
