//! Event handler: translates crossterm events into messages.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::AppMessage;
use crate::model::{App, DetailTab, FocusPanel};

/// Translate a terminal event into a message.
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize: the next draw picks up the new size.
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Only Press events. Release and Repeat double up input on Windows
    // terminals.
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Global shortcuts, regardless of focus.
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::HISTORY_BACK.matches(&key) {
        return AppMessage::HistoryBack;
    }
    if DefaultKeymap::HISTORY_FORWARD.matches(&key) {
        return AppMessage::HistoryForward;
    }
    if DefaultKeymap::RELOAD.matches(&key) {
        return AppMessage::Reload;
    }

    match app.focus {
        FocusPanel::Search => handle_search_keys(key),
        FocusPanel::Detail => handle_detail_keys(key),
    }
}

/// Keys for the search panel: line editing plus submit.
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Submit;
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Backspace,
        KeyCode::Delete => AppMessage::Delete,
        KeyCode::Left => AppMessage::CursorLeft,
        KeyCode::Right => AppMessage::CursorRight,
        KeyCode::Home => AppMessage::CursorHome,
        KeyCode::End => AppMessage::CursorEnd,

        // Some terminals set SHIFT on uppercase characters, so accept
        // both bare and shifted chars as text input.
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Input(ch)
        }

        _ => AppMessage::Noop,
    }
}

/// Keys for the detail panel: tab switching and scrolling.
fn handle_detail_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => AppMessage::PrevTab,
        KeyCode::Right | KeyCode::Char('l') => AppMessage::NextTab,
        KeyCode::Up | KeyCode::Char('k') => AppMessage::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => AppMessage::ScrollDown,
        KeyCode::Char('1') => AppMessage::ActivateTab(DetailTab::Overview),
        KeyCode::Char('2') => AppMessage::ActivateTab(DetailTab::Delivery),
        KeyCode::Char('3') => AppMessage::ActivateTab(DetailTab::Payment),
        KeyCode::Char('4') => AppMessage::ActivateTab(DetailTab::Items),
        _ => AppMessage::Noop,
    }
}
