//! Pure mapping from a spot snapshot to the grid view model.
//!
//! [`render_grid`] rebuilds the whole [`GridView`] on every call; the result
//! depends only on its arguments, never on a previous render.

use crate::app::status::{normalize, SpotStatus};
use crate::app::types::{GateMarker, SpotKey, GRID_COLS, GRID_ROWS};
use crate::fetch::SpotMap;

/// Content of the header cell above a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnHeader {
    /// The entry gate sits above this column.
    Gate(String),
    /// Fixed-height blank cell keeping rows aligned with gated columns.
    Placeholder,
}

/// One rendered spot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub key: SpotKey,
    pub status: SpotStatus,
    /// Status text under the tile; `None` when suppressed.
    pub label: Option<&'static str>,
    pub highlighted: bool,
}

impl Tile {
    /// Tile caption; the highlighted tile is bracketed as its outline.
    pub fn text(&self) -> String {
        if self.highlighted {
            format!("[{}]", self.key.caption())
        } else {
            self.key.caption()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColumn {
    pub col: u8,
    pub header: ColumnHeader,
    pub tiles: Vec<Tile>,
}

/// Full grid: always `GRID_COLS` columns of `GRID_ROWS` tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub columns: Vec<GridColumn>,
}

impl GridView {
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.columns.iter().flat_map(|c| c.tiles.iter())
    }

    pub fn tile(&self, row: u8, col: u8) -> Option<&Tile> {
        self.columns
            .get(usize::from(col))
            .and_then(|c| c.tiles.get(usize::from(row)))
    }
}

impl Default for GridView {
    /// The grid before any snapshot arrived: every spot free.
    fn default() -> Self {
        render_grid(&SpotMap::new(), None, None, None)
    }
}

/// Build the grid for one snapshot.
///
/// * spots missing from `spots` render as free;
/// * when `free_count == Some(0)` occupied tiles carry no label;
/// * only the tile whose key equals `closest` is highlighted.
pub fn render_grid(
    spots: &SpotMap,
    closest: Option<&str>,
    free_count: Option<i64>,
    gate: Option<&GateMarker>,
) -> GridView {
    let lot_full = free_count == Some(0);

    let columns = (0..GRID_COLS)
        .map(|col| {
            let header = match gate {
                Some(g) if g.is_in_col(col) => ColumnHeader::Gate(g.label.clone()),
                _ => ColumnHeader::Placeholder,
            };
            let tiles = (0..GRID_ROWS)
                .map(|row| {
                    let key = SpotKey::new(row, col);
                    let wire = key.to_string();
                    let status = normalize(spots.get(&wire));
                    let label = if lot_full && status == SpotStatus::Occupied {
                        None
                    } else {
                        Some(status.label())
                    };
                    Tile {
                        key,
                        status,
                        label,
                        highlighted: closest == Some(wire.as_str()),
                    }
                })
                .collect();
            GridColumn { col, header, tiles }
        })
        .collect();

    GridView { columns }
}
