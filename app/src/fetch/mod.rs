//! Talking to the status endpoint: the HTTP client and the snapshot decoder.

pub mod client;
pub mod snapshot;

pub use client::StatusClient;
pub use snapshot::{Snapshot, SpotMap};
