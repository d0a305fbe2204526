use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use crate::app::App;
use crate::ui::colors::current as current_colors;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let content = format!(
        " q:quit  r:refresh now  t:theme  |  cycles ok:{} failed:{}",
        app.cycles_applied, app.cycles_failed
    );
    let colors = current_colors();
    f.render_widget(Paragraph::new(content).style(colors.footer_style), area);
}
