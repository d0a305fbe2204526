pub mod core;
pub mod settings;
pub mod status;
pub mod types;

pub use self::core::banner::BannerState;
pub use self::core::poll_context::PollContext;
pub use self::core::App;
pub use status::SpotStatus;
pub use types::{Action, GateMarker, SpotKey, GRID_COLS, GRID_ROWS};
