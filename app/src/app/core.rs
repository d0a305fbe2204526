use std::time::{Duration, Instant};

use chrono::{DateTime, Local, TimeZone, Utc};
use tracing::{debug, warn};

use self::banner::BannerState;
use self::poll_context::{PollContext, PLACEHOLDER};
use self::pulse::Pulse;
use crate::errors::FetchError;
use crate::fetch::Snapshot;
use crate::ui::grid::{render_grid, GridView};

pub mod banner;
pub mod poll_context;
pub mod pulse;

/// Everything the dashboard displays, plus the poller's cross-cycle state.
///
/// The display fields are only ever replaced by [`App::apply_snapshot`],
/// which cannot fail, so the screen always shows one fully applied
/// snapshot. A failed cycle leaves every field as it was.
pub struct App {
    pub grid: GridView,
    pub banner: BannerState,
    /// Closest free spot as `(row,col)`, or `-`.
    pub closest_pill: String,
    /// Local time-of-day of the last applied snapshot, or `-`.
    pub timestamp: String,
    /// `Last update ... | Free spots ...`; only rewritten when the snapshot
    /// carries a numeric free count.
    pub meta: Option<String>,
    pub arrival_pulse: Pulse,
    pub cycles_applied: u64,
    pub cycles_failed: u64,
    ctx: PollContext,
}

impl App {
    /// Default duration of the arrival-id pulse.
    pub const DEFAULT_PULSE: Duration = Duration::from_millis(700);

    pub fn new(pulse: Duration) -> Self {
        App {
            grid: GridView::default(),
            banner: BannerState::Hidden,
            closest_pill: PLACEHOLDER.to_string(),
            timestamp: PLACEHOLDER.to_string(),
            meta: None,
            arrival_pulse: Pulse::new(pulse),
            cycles_applied: 0,
            cycles_failed: 0,
            ctx: PollContext::default(),
        }
    }

    pub fn context(&self) -> &PollContext {
        &self.ctx
    }

    /// Arrival id currently on screen.
    pub fn arrival_id(&self) -> &str {
        self.ctx.arrival_id()
    }

    /// Finish one poll cycle with whatever the fetch produced.
    pub fn apply_cycle(&mut self, result: Result<Snapshot, FetchError>, now: Instant) {
        match result {
            Ok(snap) => self.apply_snapshot(&snap, now),
            Err(e) => {
                self.cycles_failed += 1;
                warn!(error = %e, failed = self.cycles_failed, "status poll failed; keeping previous display");
            }
        }
    }

    pub fn apply_snapshot(&mut self, snap: &Snapshot, now: Instant) {
        self.ctx.remember_gate(snap.gate.as_ref());

        self.grid = render_grid(
            &snap.spots,
            snap.closest_free.as_deref(),
            snap.free_count,
            self.ctx.gate(),
        );
        self.banner = BannerState::derive(snap.free_count, snap.is_full);

        let time = format_time_of_day(snap.ts.as_ref(), &Local);
        if let Some(n) = snap.free_count {
            self.meta = Some(format!("Last update: {} | Free spots: {}", time, n));
        }

        self.closest_pill = closest_pill_text(snap.closest_free.as_deref());

        let arrival = snap.gate_waiting_car.as_deref().unwrap_or(PLACEHOLDER);
        if self.ctx.swap_arrival(arrival) {
            debug!(arrival, "arrival id changed");
            self.arrival_pulse.trigger(now);
        }

        self.timestamp = time;
        self.cycles_applied += 1;
        debug!(
            cycle = self.cycles_applied,
            free_count = ?snap.free_count,
            banner = ?self.banner,
            "snapshot applied"
        );
    }
}

impl Default for App {
    fn default() -> Self {
        App::new(Self::DEFAULT_PULSE)
    }
}

/// `(row,col)` for a closest spot, `-` when none.
pub fn closest_pill_text(closest: Option<&str>) -> String {
    match closest {
        Some(c) if !c.is_empty() => format!("({})", c),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Render a snapshot timestamp as `HH:MM:SS` in `tz`.
pub fn format_time_of_day<Tz>(ts: Option<&DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    ts.map(|t| t.with_timezone(tz).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::status::SpotStatus;
    use crate::app::types::GateMarker;
    use crate::ui::grid::ColumnHeader;
    use serde_json::json;

    fn snap(v: serde_json::Value) -> Snapshot {
        Snapshot::from_value(v).expect("valid snapshot")
    }

    #[test]
    fn closest_pill_formats() {
        assert_eq!(closest_pill_text(Some("0,0")), "(0,0)");
        assert_eq!(closest_pill_text(None), "-");
        assert_eq!(closest_pill_text(Some("")), "-");
    }

    #[test]
    fn time_of_day_in_given_zone() {
        let ts = DateTime::parse_from_rfc3339("2024-05-01T07:08:09Z")
            .expect("ts")
            .with_timezone(&Utc);
        assert_eq!(format_time_of_day(Some(&ts), &Utc), "07:08:09");
        assert_eq!(format_time_of_day(None, &Utc), "-");
    }

    #[test]
    fn gate_persists_across_cycles_without_gate() {
        let mut app = App::default();
        let now = Instant::now();
        app.apply_snapshot(&snap(json!({"gate": {"col": 2}})), now);
        app.apply_snapshot(&snap(json!({"spots": {}})), now);
        assert_eq!(app.context().gate(), Some(&GateMarker::at_col(2)));
        assert_eq!(app.grid.columns[2].header, ColumnHeader::Gate("gate".into()));
        assert_eq!(app.grid.columns[1].header, ColumnHeader::Placeholder);
    }

    #[test]
    fn repeated_arrival_id_pulses_once() {
        let mut app = App::default();
        let now = Instant::now();
        let s = snap(json!({"gate_waiting_car": "car-7"}));
        app.apply_snapshot(&s, now);
        app.apply_snapshot(&s, now + Duration::from_millis(400));
        assert_eq!(app.arrival_pulse.triggers(), 1);
        assert_eq!(app.arrival_id(), "car-7");
    }

    #[test]
    fn arrival_placeholder_when_absent() {
        let mut app = App::default();
        app.apply_snapshot(&snap(json!({})), Instant::now());
        assert_eq!(app.arrival_id(), "-");
        assert_eq!(app.arrival_pulse.triggers(), 0);
    }

    #[test]
    fn failed_cycle_leaves_display_untouched() {
        let mut app = App::default();
        let now = Instant::now();
        app.apply_snapshot(
            &snap(json!({
                "spots": {"3,2": {"status": "OCCUPIED"}},
                "closest_free": "0,0",
                "free_count": 49
            })),
            now,
        );
        let grid_before = app.grid.clone();
        let meta_before = app.meta.clone();

        app.apply_cycle(Err(FetchError::Status(502)), now);
        app.apply_cycle(Err(FetchError::Malformed("eof".into())), now);

        assert_eq!(app.grid, grid_before);
        assert_eq!(app.meta, meta_before);
        assert_eq!(app.closest_pill, "(0,0)");
        assert_eq!(app.banner, BannerState::FreeSpotsAvailable);
        assert_eq!(app.cycles_failed, 2);
        assert_eq!(app.cycles_applied, 1);
    }

    #[test]
    fn meta_only_rewritten_with_free_count() {
        let mut app = App::default();
        let now = Instant::now();
        assert!(app.meta.is_none());
        app.apply_snapshot(&snap(json!({"is_full": true})), now);
        assert!(app.meta.is_none());
        app.apply_snapshot(&snap(json!({"free_count": 3})), now);
        let meta = app.meta.clone().expect("meta");
        assert!(meta.ends_with("Free spots: 3"));
        app.apply_snapshot(&snap(json!({})), now);
        assert_eq!(app.meta.as_deref(), Some(meta.as_str()));
    }

    #[test]
    fn later_result_wins() {
        let mut app = App::default();
        let now = Instant::now();
        app.apply_cycle(Ok(snap(json!({"spots": {"0,0": {"status": "OCCUPIED"}}}))), now);
        app.apply_cycle(Ok(snap(json!({"spots": {}}))), now);
        assert_eq!(app.grid.tile(0, 0).map(|t| t.status), Some(SpotStatus::Free));
    }
}
