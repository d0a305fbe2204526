use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;
use std::time::Instant;

use crate::app::App;

pub mod colors;
pub mod grid;
pub mod themes;
pub mod widgets;

pub use grid::{render_grid, ColumnHeader, GridView, Tile};
pub use themes::Theme;

/// Width given to the grid panel; five columns of `[(r,c)]` captions.
const GRID_WIDTH: u16 = 5 * 12 + 2;

/// Draw one full frame of the dashboard.
pub fn ui(f: &mut Frame, app: &App, endpoint: &str, now: Instant) {
    // header (1), main (min), footer (1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(GRID_WIDTH), Constraint::Min(24)])
        .split(chunks[1]);

    let grid_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(widgets::grid::GRID_HEIGHT), Constraint::Min(0)])
        .split(main[0]);

    widgets::header::render(f, chunks[0], app, endpoint);
    widgets::grid::render(f, grid_area[0], &app.grid);
    widgets::side_panel::render(f, main[1], app, now);
    widgets::footer::render(f, chunks[2], app);
}
