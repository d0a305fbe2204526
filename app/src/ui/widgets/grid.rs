use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{GRID_COLS, GRID_ROWS};
use crate::ui::colors::{current as current_colors, Colors};
use crate::ui::grid::{ColumnHeader, GridColumn, GridView, Tile};

/// Rows used by one tile: caption line and status label line.
pub const TILE_HEIGHT: u16 = 2;
/// Height needed to show the whole grid: borders, header row and tiles.
pub const GRID_HEIGHT: u16 = 2 + 1 + GRID_ROWS as u16 * TILE_HEIGHT;

/// Draw the lot grid into `area`.
pub fn render(f: &mut Frame, area: Rect, grid: &GridView) {
    let colors = current_colors();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" lot ")
        .style(colors.panel_block_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, u32::from(GRID_COLS)); usize::from(GRID_COLS)])
        .split(inner);

    for (column, rect) in grid.columns.iter().zip(cols.iter()) {
        render_column(f, *rect, column, &colors);
    }
}

fn render_column(f: &mut Frame, area: Rect, column: &GridColumn, colors: &Colors) {
    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(std::iter::repeat(Constraint::Length(TILE_HEIGHT)).take(column.tiles.len()));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    // The placeholder header is left blank; the row is still reserved so
    // tiles line up with columns that show the gate.
    if let ColumnHeader::Gate(label) = &column.header {
        let gate = Paragraph::new(label.as_str())
            .style(colors.gate_style)
            .alignment(Alignment::Center);
        f.render_widget(gate, rows[0]);
    }

    for (tile, rect) in column.tiles.iter().zip(rows.iter().skip(1)) {
        let p = Paragraph::new(tile_lines(tile, colors)).alignment(Alignment::Center);
        f.render_widget(p, *rect);
    }
}

/// Caption and label lines for one tile.
pub fn tile_lines(tile: &Tile, colors: &Colors) -> Vec<Line<'static>> {
    let mut style = colors.tile_style(tile.status);
    if tile.highlighted {
        style = style.add_modifier(colors.highlight_modifier);
    }
    vec![
        Line::from(Span::styled(tile.text(), style)),
        Line::from(Span::styled(tile.label.unwrap_or(""), colors.tile_label_style)),
    ]
}
