use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_key(key: KeyEvent, app: &mut App) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        // Ctrl+C / Ctrl+Q always quit, even mid-edit
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => app.quit(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.focus_next(),
        KeyCode::Enter => app.toggle_focused(),
        _ if app.focused_is_editing() => handle_editing_key(key, app),
        _ => handle_locked_key(key, app),
    }
}

fn handle_editing_key(key: KeyEvent, app: &mut App) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('u') if ctrl => app.input_clear(),
        KeyCode::Char('n') if ctrl => app.input_fill_now(),
        KeyCode::Char(c) if !ctrl => app.input_char(c),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Delete => app.input_delete(),
        KeyCode::Left => app.input_move_cursor(true),
        KeyCode::Right => app.input_move_cursor(false),
        KeyCode::Home => app.input_cursor_home_end(true),
        KeyCode::End => app.input_cursor_home_end(false),
        _ => {}
    }
}

fn handle_locked_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_timer_size(),
        _ => {}
    }
}
