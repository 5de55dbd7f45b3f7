//! Interactive checklist running in the terminal.
//!
//! This module connects the terminal to the core dispatcher: it translates
//! crossterm key events into key identifiers, feeds them to the dispatcher and
//! redraws the rendered checklist after every change.
//!
//! # User Interface
//!
//! The interface supports:
//! - Arrow keys or vim-style (j/k) navigation
//! - Space to mark or unmark a repository
//! - Enter to clone the marked repositories
//! - '?' to expand or collapse the help
//! - 'q', Escape or Ctrl+C to quit

pub mod input;
pub mod ui;

pub use input::{key_identifier, TerminalKeys};
pub use ui::prompt_for_selection;
