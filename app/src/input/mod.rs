pub mod async_input;
pub mod keyboard;

pub use async_input::InputStream;
pub use keyboard::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Terminal events the dashboard reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

impl From<crossterm::event::Event> for InputEvent {
    fn from(ev: crossterm::event::Event) -> Self {
        use crossterm::event::Event;
        match ev {
            // Ignore key releases on platforms that report them.
            Event::Key(k) if k.kind != KeyEventKind::Release => InputEvent::Key(k),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}
