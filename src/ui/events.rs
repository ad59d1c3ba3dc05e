use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::time::Duration;

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Poll timed out, or an event the UI does not handle arrived.
    Tick,
}

/// Polls the terminal on the calling thread.
pub struct EventHandler;

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for terminal input.
    pub fn next(&self, timeout: Duration) -> io::Result<AppEvent> {
        if !event::poll(timeout)? {
            return Ok(AppEvent::Tick);
        }
        Ok(match event::read()? {
            Event::Key(key) => AppEvent::Key(key),
            Event::Resize(cols, rows) => AppEvent::Resize(cols, rows),
            _ => AppEvent::Tick,
        })
    }
}
