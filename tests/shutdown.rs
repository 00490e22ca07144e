use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use futures::future::BoxFuture;
use futures::{FutureExt, StreamExt, stream};
use gostat::event::run_event_loop;
use gostat::refresh::run_refresh_loop;
use gostat::screen::Screen;
use gostat::shutdown;
use gostat::system::snapshot::{
    CpuSnapshot, DiskSnapshot, DockerSnapshot, LoadSnapshot, MemorySnapshot, NetSnapshot,
    SystemSnapshot,
};
use gostat::system::{ProviderError, Reading, Telemetry};
use gostat::ui::TITLE;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

const INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone, Default)]
struct FakeTelemetry {
    ticks: Arc<AtomicUsize>,
}

impl Telemetry for FakeTelemetry {
    fn system(&mut self) -> Reading<SystemSnapshot> {
        self.ticks.fetch_add(1, Ordering::SeqCst);
        Ok(SystemSnapshot {
            hostname: "testhost".to_string(),
            ..SystemSnapshot::default()
        })
    }
    fn cpu(&mut self) -> Reading<CpuSnapshot> {
        Ok(CpuSnapshot { usage_percent: 12.5 })
    }
    fn load(&mut self) -> Reading<LoadSnapshot> {
        Ok(LoadSnapshot::default())
    }
    fn memory(&mut self) -> Reading<MemorySnapshot> {
        Err(ProviderError::NoData { what: "memory" })
    }
    fn disk(&mut self) -> Reading<DiskSnapshot> {
        Ok(DiskSnapshot::default())
    }
    fn network(&mut self) -> Reading<NetSnapshot> {
        Ok(NetSnapshot::default())
    }
    fn docker(&self) -> BoxFuture<'static, Reading<DockerSnapshot>> {
        futures::future::ready(Err(ProviderError::NoData { what: "docker" })).boxed()
    }
}

fn ctrl_c() -> Event {
    Event::Key(KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

fn screen_text(screen: &Screen<TestBackend>) -> String {
    screen.with_backend(|backend| {
        backend
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    })
}

/// Events arrive after `delay`, as if typed while the dashboard runs.
fn delayed_events(
    delay: Duration,
    events: Vec<io::Result<Event>>,
) -> impl futures::Stream<Item = io::Result<Event>> + Unpin {
    let mut events = Some(events);
    stream::once(tokio::time::sleep(delay))
        .flat_map(move |()| stream::iter(events.take().unwrap_or_default()))
        .boxed()
}

#[tokio::test(start_paused = true)]
async fn ctrl_c_stops_refresh_within_one_interval() {
    let screen = Arc::new(Screen::new(Terminal::new(TestBackend::new(100, 30)).unwrap()));
    let telemetry = FakeTelemetry::default();
    let ticks = Arc::clone(&telemetry.ticks);

    let (shutdown, listener) = shutdown::channel();
    let refresh = tokio::spawn(run_refresh_loop(
        Arc::clone(&screen),
        telemetry,
        INTERVAL,
        listener,
    ));

    let events = delayed_events(
        Duration::from_millis(3500),
        vec![Ok(Event::Resize(100, 30)), Ok(ctrl_c())],
    );
    let result = run_event_loop(events, &screen, &shutdown).await;
    assert!(result.is_ok());

    tokio::time::timeout(INTERVAL, refresh)
        .await
        .expect("refresh loop outlived the update interval")
        .expect("refresh loop panicked");

    assert!(ticks.load(Ordering::SeqCst) >= 3);
    let text = screen_text(&screen);
    assert!(text.contains(TITLE));
    assert!(text.contains("HostName: testhost"));
    assert!(text.contains("Docker is not installed or not running."));
}

#[tokio::test(start_paused = true)]
async fn resize_then_quit_repaints_before_exit() {
    let screen = Arc::new(Screen::new(Terminal::new(TestBackend::new(100, 30)).unwrap()));
    let (shutdown, listener) = shutdown::channel();
    let refresh = tokio::spawn(run_refresh_loop(
        Arc::clone(&screen),
        FakeTelemetry::default(),
        INTERVAL,
        listener,
    ));

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(screen_text(&screen).contains(TITLE));

    // Both arrive while the loop sleeps between ticks.
    screen.sync();
    shutdown.trigger();
    assert!(!screen_text(&screen).contains(TITLE));

    refresh.await.expect("refresh loop panicked");
    let text = screen_text(&screen);
    assert!(text.contains(TITLE));
    assert!(text.contains("HostName: testhost"));
}

#[tokio::test(start_paused = true)]
async fn input_error_still_raises_shutdown() {
    let screen = Arc::new(Screen::new(Terminal::new(TestBackend::new(80, 24)).unwrap()));
    let (shutdown, listener) = shutdown::channel();
    let refresh = tokio::spawn(run_refresh_loop(
        Arc::clone(&screen),
        FakeTelemetry::default(),
        INTERVAL,
        listener,
    ));

    let events = delayed_events(
        Duration::from_millis(1200),
        vec![Err(io::Error::other("tty closed"))],
    );
    let result = run_event_loop(events, &screen, &shutdown).await;
    assert_eq!(result.unwrap_err().to_string(), "tty closed");

    tokio::time::timeout(INTERVAL, refresh)
        .await
        .expect("refresh loop outlived the update interval")
        .expect("refresh loop panicked");
}

#[tokio::test(start_paused = true)]
async fn shutdown_before_first_tick_draws_nothing() {
    let screen = Arc::new(Screen::new(Terminal::new(TestBackend::new(40, 12)).unwrap()));
    let (shutdown, listener) = shutdown::channel();
    shutdown.trigger();

    run_refresh_loop(
        Arc::clone(&screen),
        FakeTelemetry::default(),
        INTERVAL,
        listener,
    )
    .await;

    assert!(!screen_text(&screen).contains(TITLE));
}
