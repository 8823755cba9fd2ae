use crate::search::SearchBackend;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key<B: SearchBackend>(app: &mut App<B>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'u') {
        app.clear_query();
        return;
    }

    match key.code {
        KeyCode::Enter => {
            // Completion is picked up by the next redraw
            let _ = app.submit();
        }
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Up => app.scroll(-1),
        KeyCode::Down => app.scroll(1),
        KeyCode::PageUp => app.scroll(-10),
        KeyCode::PageDown => app.scroll(10),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.push_char(ch),
        _ => {}
    }
}

pub fn handle_paste<B: SearchBackend>(app: &mut App<B>, text: &str) {
    let text: String = text.chars().filter(|ch| !ch.is_control()).collect();
    if !text.is_empty() {
        app.push_str(&text);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
