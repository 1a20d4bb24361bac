//! Model layer: the single source of truth for UI state.
//!
//! Pure data. The update layer is the only place that mutates it; the
//! view layer only reads. The lookup state machine itself lives in
//! `orderscope-core` and is embedded here as `App::controller`.

mod app;
mod focus;
mod input;
mod tabs;

pub use app::App;
pub use focus::FocusPanel;
pub use input::InputState;
pub use tabs::{DetailTab, TabsState};
