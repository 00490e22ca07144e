use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use crossterm::event::EventStream;
use tracing::{info, warn};

use gostat::config::load_config;
use gostat::event::run_event_loop;
use gostat::refresh::run_refresh_loop;
use gostat::screen::Screen;
use gostat::shutdown;
use gostat::system::collector::Collector;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = load_config();
    #[cfg(feature = "file-log")]
    gostat::logging::init_file_logging(&config.logging)?;

    let interval = config.general.refresh_interval();
    let collector = Collector::new(
        config.network.interface.clone(),
        config.general.docker_timeout(),
    );

    let terminal = ratatui::try_init().wrap_err("failed to initialize terminal screen")?;
    let screen = Arc::new(Screen::new(terminal));
    info!(?interval, size = ?screen.size(), "dashboard started");

    let (shutdown, listener) = shutdown::channel();
    let mut refresh = tokio::spawn(run_refresh_loop(
        Arc::clone(&screen),
        collector,
        interval,
        listener,
    ));

    let result = run_event_loop(EventStream::new(), &screen, &shutdown).await;

    // The loop notices shutdown between ticks; a tick stuck in a provider
    // is cut off instead of holding up teardown.
    let grace = interval + Duration::from_millis(100);
    match tokio::time::timeout(grace, &mut refresh).await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => warn!(error = %err, "refresh loop failed"),
        Err(_) => {
            warn!("refresh loop still busy at shutdown, aborting it");
            refresh.abort();
        }
    }

    ratatui::restore();
    info!("dashboard stopped");

    result.wrap_err("terminal input failed")
}
