use std::fmt;

/// Number of rows in the lot (row indices `0..GRID_ROWS`).
pub const GRID_ROWS: u8 = 10;
/// Number of column groups in the lot (column indices `0..GRID_COLS`).
pub const GRID_COLS: u8 = 5;

/// Address of a single parking spot.
///
/// The wire form used by the status endpoint is `"row,col"` with no
/// spaces or parentheses; `Display` produces exactly that form so keys can
/// be compared against snapshot map keys and the `closest_free` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpotKey {
    pub row: u8,
    pub col: u8,
}

impl SpotKey {
    pub fn new(row: u8, col: u8) -> Self {
        SpotKey { row, col }
    }

    /// Tile caption, e.g. `(3,2)`.
    pub fn caption(&self) -> String {
        format!("({},{})", self.row, self.col)
    }
}

impl fmt::Display for SpotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Last known entry gate position reported by the endpoint.
///
/// `col` is optional because the endpoint may send a gate object without a
/// usable column; such a marker is still cached but matches no column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateMarker {
    pub col: Option<u64>,
    pub row: Option<u64>,
    pub label: String,
}

impl GateMarker {
    pub const DEFAULT_LABEL: &'static str = "gate";

    pub fn at_col(col: u64) -> Self {
        GateMarker {
            col: Some(col),
            row: None,
            label: Self::DEFAULT_LABEL.to_string(),
        }
    }

    pub fn is_in_col(&self, col: u8) -> bool {
        self.col == Some(u64::from(col))
    }
}

/// High level actions produced by the input handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    PollNow,
    ToggleTheme,
    None,
}
