//! Map terminal input to dashboard actions.

use crate::app::settings::keybinds;
use crate::app::Action;
use crate::input::InputEvent;

/// Top-level input handler.
pub fn handle_event(ev: &InputEvent) -> Action {
    match ev {
        InputEvent::Key(key) => {
            if keybinds::is_quit(key) {
                Action::Quit
            } else if keybinds::is_refresh(key) {
                Action::PollNow
            } else if keybinds::is_toggle_theme(key) {
                Action::ToggleTheme
            } else {
                Action::None
            }
        }
        // Resizes are picked up by the next draw.
        InputEvent::Resize(_, _) | InputEvent::Other => Action::None,
    }
}
