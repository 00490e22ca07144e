use std::io;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::{Stream, StreamExt};
use ratatui::backend::Backend;
use tracing::{debug, info};

use crate::screen::Screen;
use crate::shutdown::Shutdown;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Resize,
    Quit,
    Other,
}

impl From<&CrosstermEvent> for Event {
    fn from(event: &CrosstermEvent) -> Self {
        match event {
            CrosstermEvent::Resize(_, _) => Event::Resize,
            CrosstermEvent::Key(key) if is_quit_key(key) => Event::Quit,
            _ => Event::Other,
        }
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Reads terminal input until an exit key arrives. Shutdown is raised on
/// every way out, including input errors and the end of the stream.
pub async fn run_event_loop<S, B>(
    mut events: S,
    screen: &Screen<B>,
    shutdown: &Shutdown,
) -> io::Result<()>
where
    S: Stream<Item = io::Result<CrosstermEvent>> + Unpin,
    B: Backend,
{
    while let Some(event) = events.next().await {
        let event = match event {
            Ok(event) => event,
            Err(err) => {
                shutdown.trigger();
                return Err(err);
            }
        };
        match Event::from(&event) {
            Event::Resize => {
                debug!("terminal resized, resyncing");
                screen.sync();
            }
            Event::Quit => {
                info!("exit key pressed");
                break;
            }
            Event::Other => {}
        }
    }
    shutdown.trigger();
    Ok(())
}
