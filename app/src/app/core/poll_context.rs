use crate::app::types::GateMarker;

/// Placeholder shown when a value is absent.
pub const PLACEHOLDER: &str = "-";

/// State the poller carries from one cycle to the next.
///
/// Only cycle bodies touch it, and they run one at a time on the UI task.
#[derive(Debug, Clone)]
pub struct PollContext {
    gate: Option<GateMarker>,
    arrival_id: String,
}

impl Default for PollContext {
    fn default() -> Self {
        PollContext {
            gate: None,
            arrival_id: PLACEHOLDER.to_string(),
        }
    }
}

impl PollContext {
    /// Last known gate marker. Never reset once set.
    pub fn gate(&self) -> Option<&GateMarker> {
        self.gate.as_ref()
    }

    /// Overwrite the cached gate when the snapshot carries one.
    pub fn remember_gate(&mut self, gate: Option<&GateMarker>) {
        if let Some(g) = gate {
            self.gate = Some(g.clone());
        }
    }

    /// Currently displayed arrival id (`-` when none).
    pub fn arrival_id(&self) -> &str {
        &self.arrival_id
    }

    /// Store the arrival id to display, returning whether it changed.
    pub fn swap_arrival(&mut self, next: &str) -> bool {
        if self.arrival_id == next {
            return false;
        }
        self.arrival_id = next.to_string();
        true
    }
}
