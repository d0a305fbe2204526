use std::time::{Duration, Instant};

use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::app::settings::Settings;
use crate::app::{Action, App};
use crate::errors::FetchError;
use crate::fetch::{Snapshot, StatusClient};
use crate::input::InputStream;
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal, Tui};
use crate::ui;

/// Redraw period; keeps the arrival pulse expiring on time between polls.
const REDRAW_PERIOD: Duration = Duration::from_millis(100);

pub type CycleResult = Result<Snapshot, FetchError>;

/// Start one fetch in the background; its result is sent to `tx`.
///
/// Fetches are not awaited by the timer, so a slow or hung request never
/// delays the next tick. Results are applied in the order they arrive.
pub fn spawn_cycle(client: &StatusClient, tx: &UnboundedSender<CycleResult>) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.fetch_snapshot().await;
        // The receiver is gone only during shutdown.
        let _ = tx.send(result);
    });
}

/// Run the dashboard until the user quits. Must be called inside a tokio
/// runtime.
pub async fn run_app(settings: Settings) -> anyhow::Result<()> {
    let client = StatusClient::new(settings.endpoint.clone())?;
    let mut terminal = init_terminal()?;
    let result = drive(&mut terminal, &client, &settings).await;
    // Restore terminal state before reporting any loop error.
    restore_terminal(terminal)?;
    result
}

async fn drive(terminal: &mut Tui, client: &StatusClient, settings: &Settings) -> anyhow::Result<()> {
    let mut app = App::new(settings.pulse());
    let (tx, mut rx) = unbounded_channel::<CycleResult>();
    let mut input = InputStream::new();

    // The first tick fires immediately, so the first poll happens at startup.
    let mut poll_tick = tokio::time::interval(settings.poll_interval());
    poll_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut redraw_tick = tokio::time::interval(REDRAW_PERIOD);
    redraw_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(endpoint = client.endpoint(), interval_ms = settings.poll_interval_ms, "polling started");

    loop {
        terminal.draw(|f| ui::ui(f, &app, client.endpoint(), Instant::now()))?;

        tokio::select! {
            _ = poll_tick.tick() => spawn_cycle(client, &tx),
            Some(result) = rx.recv() => app.apply_cycle(result, Instant::now()),
            maybe_ev = input.next() => {
                let Some(ev) = maybe_ev else {
                    debug!("input stream closed");
                    break;
                };
                match handlers::handle_event(&ev) {
                    Action::Quit => break,
                    Action::PollNow => spawn_cycle(client, &tx),
                    Action::ToggleTheme => ui::colors::toggle(),
                    Action::None => {}
                }
            }
            _ = redraw_tick.tick() => {}
        }
    }

    info!(
        applied = app.cycles_applied,
        failed = app.cycles_failed,
        "polling stopped"
    );
    Ok(())
}
