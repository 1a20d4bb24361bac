//! Main application state.

use std::sync::Arc;

use orderscope_core::{LookupController, OrderGateway};

use super::{FocusPanel, InputState, TabsState};

/// Main application state. Mutated only by the update layer, read by
/// the view layer.
pub struct App {
    /// Exit flag.
    pub should_quit: bool,

    /// Which panel has keyboard focus.
    pub focus: FocusPanel,

    /// Search input line.
    pub input: InputState,

    /// Detail view tab selection.
    pub tabs: TabsState,

    /// Scroll offset inside the active detail tab.
    pub detail_scroll: u16,

    /// Lookup state machine: presenter, view model, URL synchronizer.
    pub controller: LookupController,

    /// Transient status bar message.
    pub status_message: Option<String>,
}

impl App {
    pub fn new(gateway: Arc<dyn OrderGateway>, initial_path: &str) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Search,
            input: InputState::new(),
            tabs: TabsState::new(),
            detail_scroll: 0,
            controller: LookupController::new(gateway, initial_path),
            status_message: None,
        }
    }

    /// Mirror the controller's current identifier into the input line,
    /// the way the address bar repopulates a search box after history
    /// traversal.
    pub fn sync_input_from_controller(&mut self) {
        let identifier = self.controller.current_identifier().to_string();
        if !identifier.is_empty() {
            self.input.set_value(identifier);
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
