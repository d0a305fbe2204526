pub mod footer;
pub mod grid;
pub mod header;
pub mod side_panel;
