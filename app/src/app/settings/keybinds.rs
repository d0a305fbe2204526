// Keybind predicates for the dashboard.
//
// Handlers ask "is this the quit key?" rather than matching raw codes so
// the bindings live in one place.

use crate::input::{KeyCode, KeyEvent, KeyModifiers};

pub fn is_quit(ev: &KeyEvent) -> bool {
    matches!(ev.code, KeyCode::Char('q') | KeyCode::Esc)
        || (ev.modifiers.contains(KeyModifiers::CONTROL) && ev.code == KeyCode::Char('c'))
}

pub fn is_refresh(ev: &KeyEvent) -> bool {
    matches!(ev.code, KeyCode::Char('r') | KeyCode::F(5))
}

pub fn is_toggle_theme(ev: &KeyEvent) -> bool {
    is_char(&ev.code, 't')
}

pub fn is_char(code: &KeyCode, want: char) -> bool {
    matches!(code, &KeyCode::Char(c) if c == want)
}
