use std::time::{Duration, Instant};

/// One-shot highlight that runs for a fixed duration after each trigger.
///
/// Triggering while a pulse is already running restarts it from `now`, so
/// rapid successive changes each produce a visible pulse.
#[derive(Debug, Clone)]
pub struct Pulse {
    duration: Duration,
    started: Option<Instant>,
    triggers: u64,
}

impl Pulse {
    pub fn new(duration: Duration) -> Self {
        Pulse {
            duration,
            started: None,
            triggers: 0,
        }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.started = Some(now);
        self.triggers += 1;
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.started
            .map(|s| now.saturating_duration_since(s) < self.duration)
            .unwrap_or(false)
    }

    /// Total number of triggers so far.
    pub fn triggers(&self) -> u64 {
        self.triggers
    }
}
