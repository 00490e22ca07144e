use std::sync::{Mutex, MutexGuard, PoisonError};

use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use tokio::sync::Notify;
use tracing::warn;

/// The terminal, shared by the refresh and event loops. Every operation
/// takes the internal lock, so a frame is always flushed whole.
pub struct Screen<B: Backend> {
    terminal: Mutex<Terminal<B>>,
    resync: Notify,
}

impl<B: Backend> Screen<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Screen {
            terminal: Mutex::new(terminal),
            resync: Notify::new(),
        }
    }

    /// Current size in cells, or `(0, 0)` if the backend cannot tell.
    pub fn size(&self) -> (u16, u16) {
        match self.lock().size() {
            Ok(size) => (size.width, size.height),
            Err(err) => {
                warn!(error = %err, "failed to query terminal size");
                (0, 0)
            }
        }
    }

    /// Draws a frame onto a cleared buffer sized to the terminal and flushes it.
    pub fn show(&self, draw: impl FnOnce(&mut Buffer)) {
        let mut terminal = self.lock();
        if let Err(err) = terminal.draw(|frame| draw(frame.buffer_mut())) {
            warn!(error = %err, "failed to draw frame");
        }
    }

    /// Forces the next frame to repaint every cell and wakes whoever waits
    /// in [`Screen::resync_requested`].
    pub fn sync(&self) {
        {
            let mut terminal = self.lock();
            if let Err(err) = terminal.autoresize() {
                warn!(error = %err, "failed to resize terminal");
            }
            if let Err(err) = terminal.clear() {
                warn!(error = %err, "failed to clear terminal");
            }
        }
        self.resync.notify_one();
    }

    pub async fn resync_requested(&self) {
        self.resync.notified().await;
    }

    /// Runs `f` against the backend, e.g. to inspect a test backend.
    pub fn with_backend<R>(&self, f: impl FnOnce(&B) -> R) -> R {
        f(self.lock().backend())
    }

    fn lock(&self) -> MutexGuard<'_, Terminal<B>> {
        self.terminal.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::style::Style;

    use super::*;
    use crate::ui::canvas::Canvas;

    fn test_screen(width: u16, height: u16) -> Screen<TestBackend> {
        Screen::new(Terminal::new(TestBackend::new(width, height)).unwrap())
    }

    #[test]
    fn reports_backend_size() {
        assert_eq!(test_screen(80, 24).size(), (80, 24));
    }

    #[test]
    fn show_starts_from_a_clear_buffer() {
        let screen = test_screen(4, 1);
        screen.show(|buf| buf.set_cell(0, 0, 'a', Style::default()));
        screen.show(|buf| buf.set_cell(3, 0, 'b', Style::default()));
        screen.with_backend(|backend| {
            backend.assert_buffer_lines(["   b"]);
        });
    }

    #[tokio::test]
    async fn sync_wakes_resync_waiter() {
        let screen = test_screen(4, 1);
        screen.sync();
        tokio::time::timeout(std::time::Duration::from_secs(1), screen.resync_requested())
            .await
            .expect("resync notification was stored");
    }
}
