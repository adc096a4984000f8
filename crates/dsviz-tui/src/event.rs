use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use tracing::debug;

use crate::input::{handle_key_event, Action};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Option<AppEvent>> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm 0.27+ sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }

    /// Forward key actions to `tx` from a blocking thread.
    ///
    /// The thread exits at the first tick after the receiver is dropped.
    pub fn spawn(self, tx: mpsc::UnboundedSender<Action>) -> tokio::task::JoinHandle<()> {
        tokio::task::spawn_blocking(move || loop {
            if tx.is_closed() {
                break;
            }
            let action = match self.next() {
                Ok(Some(AppEvent::Key(key))) => handle_key_event(key),
                Ok(Some(AppEvent::Resize(..))) => Action::Redraw,
                Ok(Some(AppEvent::Tick)) | Ok(None) => continue,
                Err(e) => {
                    debug!(error = %e, "Terminal event polling stopped");
                    break;
                }
            };
            if action != Action::None && tx.send(action).is_err() {
                break;
            }
        })
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}
