//! Event handling for the TUI

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Mouse press, drag or release (swipe gestures)
    Mouse(MouseEvent),
    /// Terminal resized
    Resize(u16, u16),
    /// Timer tick (blink timers, clock, notifications)
    Tick,
}

/// Consecutive read failures tolerated before the reader gives up
const MAX_READ_ERRORS: u32 = 5;

/// Pause after a failed read, doubled per consecutive failure
const READ_ERROR_BACKOFF: Duration = Duration::from_millis(50);

/// Tracks back-to-back terminal read failures
#[derive(Debug, Default)]
struct ReadErrors {
    consecutive: u32,
}

impl ReadErrors {
    /// Count a failure; returns the pause before retrying, or `None` to give up
    fn record(&mut self) -> Option<Duration> {
        self.consecutive += 1;
        if self.consecutive >= MAX_READ_ERRORS {
            None
        } else {
            Some(READ_ERROR_BACKOFF * 2u32.pow(self.consecutive - 1))
        }
    }

    fn reset(&mut self) {
        self.consecutive = 0;
    }
}

/// Merges terminal input and the tick timer into one channel
///
/// Runs on the same current-thread runtime as the UI, so handlers never
/// overlap.
pub struct EventHandler {
    /// Receiver for events
    receiver: mpsc::UnboundedReceiver<Event>,
    /// Reader task
    task: JoinHandle<()>,
}

impl EventHandler {
    /// Start reading terminal events and ticking every `tick_rate`
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, receiver) = mpsc::unbounded_channel();

        let task = tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut interval = tokio::time::interval(tick_rate);
            let mut errors = ReadErrors::default();

            loop {
                let event = tokio::select! {
                    _ = interval.tick() => Event::Tick,
                    maybe_event = reader.next() => match maybe_event {
                        Some(Ok(event)) => {
                            errors.reset();
                            match event {
                                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                                    Event::Key(key)
                                }
                                CrosstermEvent::Mouse(mouse) => Event::Mouse(mouse),
                                CrosstermEvent::Resize(width, height) => {
                                    Event::Resize(width, height)
                                }
                                _ => continue,
                            }
                        }
                        Some(Err(e)) => match errors.record() {
                            Some(pause) => {
                                tracing::warn!("Failed to read terminal event: {}", e);
                                tokio::time::sleep(pause).await;
                                continue;
                            }
                            None => {
                                tracing::error!(
                                    "Giving up on terminal input after {} errors: {}",
                                    MAX_READ_ERRORS,
                                    e
                                );
                                break;
                            }
                        },
                        None => break,
                    },
                };

                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { receiver, task }
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_errors_back_off_then_give_up() {
        let mut errors = ReadErrors::default();
        assert_eq!(errors.record(), Some(READ_ERROR_BACKOFF));
        assert_eq!(errors.record(), Some(READ_ERROR_BACKOFF * 2));
        for _ in 2..MAX_READ_ERRORS - 1 {
            assert!(errors.record().is_some());
        }
        assert_eq!(errors.record(), None);
    }

    #[test]
    fn test_successful_read_resets_error_count() {
        let mut errors = ReadErrors::default();
        for _ in 1..MAX_READ_ERRORS {
            assert!(errors.record().is_some());
        }
        errors.reset();
        assert_eq!(errors.record(), Some(READ_ERROR_BACKOFF));
    }
}
