use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use crate::app::App;
use crate::ui::colors::current as current_colors;

pub fn header_text(app: &App, endpoint: &str) -> String {
    format!(" parkview | {} | updated {} ", endpoint, app.timestamp)
}

pub fn render(f: &mut Frame, area: Rect, app: &App, endpoint: &str) {
    let colors = current_colors();
    let p = Paragraph::new(header_text(app, endpoint)).style(colors.header_style);
    f.render_widget(p, area);
}
