pub mod app;
pub mod errors;
pub mod fetch;
pub mod input;
#[path = "runner/mod.rs"]
pub mod runner;
#[path = "ui/mod.rs"]
pub mod ui;

pub use crate::app::{App, BannerState, GateMarker, SpotKey, SpotStatus};
pub use crate::errors::{FetchError, SettingsError};
pub use crate::fetch::{Snapshot, StatusClient};
