//! View layer: renders the model.
//!
//! Reads the model and draws it. The one mutation is the detail scroll
//! offset, clamped during drawing because only the view knows the
//! rendered content height.

mod components;
mod layout;
pub mod theme;

pub use layout::render;
