use ratatui::style::Color;
use serde::Deserialize;

/// Palette the runtime [`Colors`](crate::ui::colors::Colors) are derived from.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub free: Color,
    pub waiting: Color,
    pub wrong: Color,
    pub occupied: Color,
    pub alert: Color,
    pub ok: Color,
}

#[derive(Deserialize)]
struct Pal {
    bg: String,
    fg: String,
    accent: String,
    free: Option<String>,
    waiting: Option<String>,
    wrong: Option<String>,
    occupied: Option<String>,
    alert: Option<String>,
    ok: Option<String>,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            bg: Color::Rgb(11, 12, 13),
            fg: Color::Gray,
            accent: Color::Cyan,
            free: Color::Rgb(123, 227, 106),
            waiting: Color::Rgb(255, 196, 0),
            wrong: Color::Rgb(186, 104, 200),
            occupied: Color::Rgb(255, 59, 47),
            alert: Color::Rgb(255, 59, 47),
            ok: Color::Rgb(123, 227, 106),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            free: Color::Green,
            waiting: Color::Yellow,
            wrong: Color::Magenta,
            occupied: Color::Red,
            alert: Color::Red,
            ok: Color::Green,
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Parse a `[palette]` table. Status colours missing from the file fall
    /// back to the dark theme's; a file with no palette is the dark theme.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let v: toml::Value = toml::from_str(s)?;
        let base = Self::dark();
        if let Some(p) = v.get("palette") {
            let p: Pal = p.clone().try_into()?;
            let or = |c: &Option<String>, d: Color| c.as_deref().map(parse_hex).unwrap_or(d);
            return Ok(Self {
                name: "custom",
                bg: parse_hex(&p.bg),
                fg: parse_hex(&p.fg),
                accent: parse_hex(&p.accent),
                free: or(&p.free, base.free),
                waiting: or(&p.waiting, base.waiting),
                wrong: or(&p.wrong, base.wrong),
                occupied: or(&p.occupied, base.occupied),
                alert: or(&p.alert, base.alert),
                ok: or(&p.ok, base.ok),
            });
        }
        Ok(base)
    }
}

fn parse_hex(s: &str) -> Color {
    let s = s.trim_start_matches('#');
    if s.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[0..2], 16),
            u8::from_str_radix(&s[2..4], 16),
            u8::from_str_radix(&s[4..6], 16),
        ) {
            return Color::Rgb(r, g, b);
        }
    }
    Color::Reset
}
