//! Reusable view components.

pub mod address;
pub mod detail;
pub mod search;
pub mod statusbar;
