//! Event layer: turns terminal input into messages.
//!
//! Crossterm reads are blocking, so a dedicated thread polls the
//! terminal and forwards events over a channel. The main loop selects
//! on that channel next to lookup completions, which keeps keyboard
//! input live while a request is in flight.

use std::time::Duration;

use crossterm::event::Event;
use tokio::sync::mpsc;

mod handler;
mod keymap;

pub use handler::handle_event;
pub use keymap::{DefaultKeymap, KeyBinding};

/// Spawn the terminal event reader thread.
///
/// The thread exits once the receiving side is dropped.
pub fn spawn_event_channel() -> mpsc::Receiver<Event> {
    let (tx, rx) = mpsc::channel(64);

    std::thread::spawn(move || loop {
        let ready = crossterm::event::poll(Duration::from_millis(100)).unwrap_or(false);
        if !ready {
            continue;
        }

        if let Ok(evt) = crossterm::event::read() {
            if tx.blocking_send(evt).is_err() {
                break;
            }
        }
    });

    rx
}
