//! Infrastructure helpers with no business logic: the terminal session.

mod terminal;

pub use terminal::{Term, TerminalSession};
