//! Application main loop.
//!
//! Single-task loop over three sources: terminal events, lookup
//! completions, and a redraw tick. Lookups run as spawned tasks and
//! report back as messages, so the model is only ever touched here.

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time::{Duration, interval};

use orderscope_core::{LookupTicket, run_lookup};

use crate::event;
use crate::message::{AppMessage, Command};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Run the application main loop.
pub async fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    let mut events = event::spawn_event_channel();
    let (completion_tx, mut completions) = mpsc::channel::<AppMessage>(16);
    let mut tick = interval(Duration::from_millis(100));

    // The starting location may already name an order.
    if let Some(ticket) = app.controller.load_from_current_location() {
        app.sync_input_from_controller();
        spawn_lookup(app, ticket, &completion_tx);
    }

    loop {
        // 1. Draw the current model
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. Check for quit
        if app.should_quit {
            break;
        }

        // 3. Wait for the next message
        let msg = tokio::select! {
            Some(event) = events.recv() => event::handle_event(event, app),
            Some(msg) = completions.recv() => msg,
            _ = tick.tick() => AppMessage::Noop,
        };

        // 4. Apply it, spawning any lookup it asks for
        if let Some(Command::Lookup(ticket)) = update::update(app, msg) {
            spawn_lookup(app, ticket, &completion_tx);
        }
    }

    Ok(())
}

/// Spawn one lookup task; its completion comes back as a message.
fn spawn_lookup(app: &App, ticket: LookupTicket, tx: &mpsc::Sender<AppMessage>) {
    let gateway = app.controller.gateway();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = run_lookup(gateway, &ticket.identifier).await;
        let _ = tx
            .send(AppMessage::LookupDone {
                token: ticket.token,
                outcome,
            })
            .await;
    });
}
