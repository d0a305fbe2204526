use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use std::time::Instant;

use crate::app::{App, BannerState};
use crate::ui::colors::current as current_colors;

/// Banner, closest-spot pill, arrival box and the meta line.
///
/// When the banner is hidden its rows go to the arrival box.
pub fn render(f: &mut Frame, area: Rect, app: &App, now: Instant) {
    let colors = current_colors();
    let banner_height = if app.banner.is_visible() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(4),
        ])
        .split(area);

    if let Some(text) = app.banner.text() {
        let style = match app.banner {
            BannerState::NoFreeSpots => colors.banner_alert_style,
            _ => colors.banner_ok_style,
        };
        let banner = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(banner, chunks[0]);
    }

    let pill = Paragraph::new(app.closest_pill.as_str())
        .alignment(Alignment::Center)
        .style(colors.pill_style)
        .block(Block::default().borders(Borders::ALL).title(" closest free ").style(colors.panel_block_style));
    f.render_widget(pill, chunks[1]);

    let arrival_style = if app.arrival_pulse.is_active(now) {
        colors.pulse_style
    } else {
        colors.arrival_style
    };
    let arrival = Paragraph::new(app.arrival_id())
        .alignment(Alignment::Center)
        .style(arrival_style)
        .block(Block::default().borders(Borders::ALL).title(" arriving "));
    f.render_widget(arrival, chunks[2]);

    let meta = Paragraph::new(app.meta.as_deref().unwrap_or(""))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).style(colors.panel_block_style));
    f.render_widget(meta, chunks[3]);
}
