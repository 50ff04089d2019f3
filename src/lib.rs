//! A pocket calculator for the terminal.
//!
//! The [`engine`] module is the calculator itself: a state machine fed one
//! key at a time, evaluating left to right with no operator precedence. The
//! rest of the crate is the terminal front end around it.

pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod keypad;
pub mod keys;
pub mod logging;
pub mod repl;
pub mod session;
pub mod theme;
pub mod view;

pub use engine::{Calculator, Event, Operator};
pub use error::{Error, Result};
