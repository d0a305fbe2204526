use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use std::sync::Mutex;

use crate::app::SpotStatus;
use crate::ui::Theme;

#[derive(Clone, Debug)]
pub struct Colors {
	pub theme_name: &'static str,
	pub panel_block_style: Style,
	pub header_style: Style,
	pub footer_style: Style,
	pub tile_free_style: Style,
	pub tile_waiting_style: Style,
	pub tile_wrong_style: Style,
	pub tile_occupied_style: Style,
	pub tile_label_style: Style,
	pub highlight_modifier: Modifier,
	pub gate_style: Style,
	pub banner_alert_style: Style,
	pub banner_ok_style: Style,
	pub pill_style: Style,
	pub arrival_style: Style,
	pub pulse_style: Style,
}

impl Colors {
	/// Tile style for a status; exactly one per status.
	pub fn tile_style(&self, status: SpotStatus) -> Style {
		match status {
			SpotStatus::Free => self.tile_free_style,
			SpotStatus::Waiting => self.tile_waiting_style,
			SpotStatus::WrongPark => self.tile_wrong_style,
			SpotStatus::Occupied => self.tile_occupied_style,
		}
	}

	pub fn from_theme(theme: &Theme) -> Self {
		let on = |bg: Color| Style::default().fg(Color::Black).bg(bg);
		Colors {
			theme_name: theme.name,
			panel_block_style: Style::default().fg(theme.fg).bg(theme.bg),
			header_style: Style::default().fg(theme.bg).bg(theme.accent),
			footer_style: Style::default().fg(theme.fg).bg(theme.bg),
			tile_free_style: on(theme.free),
			tile_waiting_style: on(theme.waiting),
			tile_wrong_style: on(theme.wrong),
			tile_occupied_style: on(theme.occupied),
			tile_label_style: Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
			highlight_modifier: Modifier::BOLD | Modifier::UNDERLINED,
			gate_style: Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
			banner_alert_style: on(theme.alert).add_modifier(Modifier::BOLD),
			banner_ok_style: on(theme.ok).add_modifier(Modifier::BOLD),
			pill_style: Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
			arrival_style: Style::default().fg(theme.fg).bg(theme.bg),
			pulse_style: Style::default().fg(theme.bg).bg(theme.accent).add_modifier(Modifier::BOLD),
		}
	}
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| Mutex::new(Colors::from_theme(&Theme::dark())));

fn lock() -> std::sync::MutexGuard<'static, Colors> {
	CURRENT.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Switch to a built-in theme by name; unknown names are ignored.
pub fn set_theme(name: &str) {
	if let Some(theme) = Theme::by_name(name) {
		set_from_theme(&theme);
	}
}

/// Derive concrete runtime Styles from the provided Theme and store them.
pub fn set_from_theme(theme: &Theme) {
	*lock() = Colors::from_theme(theme);
}

pub fn current() -> Colors {
	lock().clone()
}

/// Flip between the built-in dark and light themes.
pub fn toggle() {
	let next = if current().theme_name == "dark" { Theme::light() } else { Theme::dark() };
	set_from_theme(&next);
}
