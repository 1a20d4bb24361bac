//! Message layer: everything that can happen to the application.
//!
//! The event layer translates terminal input into an `AppMessage`; the
//! main loop feeds lookup completions in as messages too, so the update
//! layer sees a single ordered stream. Commands flow the other way:
//! `update` returns a `Command` when a message requires async work.

use orderscope_core::{CoreResult, LookupReply, LookupTicket};

use crate::model::DetailTab;

/// Application message.
#[derive(Debug)]
pub enum AppMessage {
    /// Exit the application.
    Quit,

    /// Switch focus between search and detail.
    ToggleFocus,

    // ===== Search input editing =====
    Input(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    /// Submit the current input as a search.
    Submit,

    // ===== Detail tabs =====
    ActivateTab(DetailTab),
    NextTab,
    PrevTab,

    // ===== Detail scrolling =====
    ScrollUp,
    ScrollDown,

    // ===== History =====
    /// Browser-style back.
    HistoryBack,
    /// Browser-style forward.
    HistoryForward,
    /// Re-run the lookup for the current location.
    Reload,

    /// A spawned lookup finished.
    LookupDone {
        token: u64,
        outcome: CoreResult<LookupReply>,
    },

    /// Ignore.
    Noop,
}

/// Async work requested by the update layer, executed by the main loop.
#[derive(Debug)]
pub enum Command {
    /// Spawn the lookup this ticket stands for.
    Lookup(LookupTicket),
}
