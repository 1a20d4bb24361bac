//! Update layer: consumes messages, mutates the model.
//!
//! The only place that mutates `App`. Messages that need a network
//! round trip return a [`Command`]; the main loop spawns it and feeds
//! the completion back in as another message.

use orderscope_core::{CoreResult, LookupReply};

use crate::message::{AppMessage, Command};
use crate::model::App;

/// Apply one message to the model.
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::ToggleFocus => {
            app.focus = app.focus.toggle();
            None
        }

        // ===== Search input editing =====
        AppMessage::Input(ch) => {
            app.input.insert(ch);
            None
        }
        AppMessage::Backspace => {
            app.input.backspace();
            None
        }
        AppMessage::Delete => {
            app.input.delete();
            None
        }
        AppMessage::CursorLeft => {
            app.input.move_left();
            None
        }
        AppMessage::CursorRight => {
            app.input.move_right();
            None
        }
        AppMessage::CursorHome => {
            app.input.move_home();
            None
        }
        AppMessage::CursorEnd => {
            app.input.move_end();
            None
        }

        AppMessage::Submit => submit(app),

        // ===== Detail tabs =====
        AppMessage::ActivateTab(tab) => {
            app.tabs.activate(tab);
            app.detail_scroll = 0;
            None
        }
        AppMessage::NextTab => {
            app.tabs.next_tab();
            app.detail_scroll = 0;
            None
        }
        AppMessage::PrevTab => {
            app.tabs.prev_tab();
            app.detail_scroll = 0;
            None
        }

        // ===== Detail scrolling =====
        AppMessage::ScrollUp => {
            app.detail_scroll = app.detail_scroll.saturating_sub(1);
            None
        }
        AppMessage::ScrollDown => {
            // Clamped against content height at draw time.
            app.detail_scroll = app.detail_scroll.saturating_add(1);
            None
        }

        // ===== History =====
        AppMessage::HistoryBack => history_back(app),
        AppMessage::HistoryForward => history_forward(app),
        AppMessage::Reload => reload(app),

        AppMessage::LookupDone { token, outcome } => {
            lookup_done(app, token, outcome);
            None
        }

        AppMessage::Noop => None,
    }
}

/// Submit the search box.
///
/// Deliberately not gated on an in-flight lookup: the controller's
/// token guard discards the older completion, so submitting again
/// during loading is safe.
fn submit(app: &mut App) -> Option<Command> {
    app.clear_status();
    app.controller.search(app.input.value()).map(Command::Lookup)
}

fn history_back(app: &mut App) -> Option<Command> {
    app.clear_status();
    if !app.controller.can_navigate_back() {
        app.set_status("Already at the oldest entry");
        return None;
    }
    let ticket = app.controller.navigate_back();
    app.sync_input_from_controller();
    app.detail_scroll = 0;
    ticket.map(Command::Lookup)
}

fn history_forward(app: &mut App) -> Option<Command> {
    app.clear_status();
    if !app.controller.can_navigate_forward() {
        app.set_status("Already at the newest entry");
        return None;
    }
    let ticket = app.controller.navigate_forward();
    app.sync_input_from_controller();
    app.detail_scroll = 0;
    ticket.map(Command::Lookup)
}

fn reload(app: &mut App) -> Option<Command> {
    app.clear_status();
    app.controller
        .load_from_current_location()
        .map(Command::Lookup)
}

fn lookup_done(app: &mut App, token: u64, outcome: CoreResult<LookupReply>) {
    // A stale token leaves the model alone, scroll position included.
    if app.controller.apply_outcome(token, outcome) {
        app.detail_scroll = 0;
    }
}
