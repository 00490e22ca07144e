use std::sync::Arc;
use std::time::Duration;

use ratatui::backend::Backend;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::screen::Screen;
use crate::shutdown::ShutdownListener;
use crate::system::{Readings, Telemetry};
use crate::ui;

pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_secs(1);

/// Samples every provider and redraws the dashboard once per `interval`
/// until shutdown. Shutdown is only observed between ticks, so a tick that
/// has started always finishes its frame.
pub async fn run_refresh_loop<T, B>(
    screen: Arc<Screen<B>>,
    mut telemetry: T,
    interval: Duration,
    mut shutdown: ShutdownListener,
) where
    T: Telemetry,
    B: Backend,
{
    info!(?interval, "refresh loop started");
    let mut ticks: u64 = 0;

    while !shutdown.is_triggered() {
        let readings = Readings::sample(&mut telemetry).await;
        screen.show(|buf| ui::draw_dashboard(buf, &readings));
        ticks += 1;
        debug!(tick = ticks, "frame drawn");

        let next_tick = Instant::now() + interval;
        loop {
            // A pending resync repaints before shutdown is honored, so the
            // screen is never left cleared.
            tokio::select! {
                biased;
                () = screen.resync_requested() => {
                    screen.show(|buf| ui::draw_dashboard(buf, &readings));
                }
                () = shutdown.triggered() => {
                    info!(ticks, "refresh loop stopped");
                    return;
                }
                () = tokio::time::sleep_until(next_tick) => break,
            }
        }
    }
    info!(ticks, "refresh loop stopped");
}
