//! Visibility toggles for the loading/error/result panels.

use crate::types::DisplayState;

/// Panel visibility state.
///
/// The toggles are independent; the lookup controller is responsible for
/// calling hide-operations before show-operations so stale panels never
/// coexist with a new loading state. [`display_state`](Self::display_state)
/// collapses the toggles into the single exclusive mode.
#[derive(Debug)]
pub struct StatusPresenter {
    loading: bool,
    error: Option<String>,
    result_visible: bool,
    search_enabled: bool,
}

impl StatusPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            loading: false,
            error: None,
            result_visible: false,
            search_enabled: true,
        }
    }

    /// Shows the loading panel and disables the search trigger.
    ///
    /// Disabling only guards the trigger control itself; other lookup
    /// sources (Enter key, history traversal) stay live.
    pub fn show_loading(&mut self) {
        self.loading = true;
        self.search_enabled = false;
    }

    /// Hides the loading panel and re-enables the search trigger.
    pub fn hide_loading(&mut self) {
        self.loading = false;
        self.search_enabled = true;
    }

    /// Shows the error panel with `message`.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Hides the error panel.
    pub fn hide_error(&mut self) {
        self.error = None;
    }

    /// Shows the result panel.
    pub fn show_result(&mut self) {
        self.result_visible = true;
    }

    /// Hides the result panel.
    pub fn hide_result(&mut self) {
        self.result_visible = false;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the visible error panel, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn result_visible(&self) -> bool {
        self.result_visible
    }

    /// Whether the search trigger control accepts activation.
    #[must_use]
    pub fn search_enabled(&self) -> bool {
        self.search_enabled
    }

    /// The single exclusive display mode: loading wins, then error, then
    /// result, otherwise idle.
    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        if self.loading {
            DisplayState::Loading
        } else if self.error.is_some() {
            DisplayState::Error
        } else if self.result_visible {
            DisplayState::Result
        } else {
            DisplayState::Idle
        }
    }
}

impl Default for StatusPresenter {
    fn default() -> Self {
        Self::new()
    }
}
