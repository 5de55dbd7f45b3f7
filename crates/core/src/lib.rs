//! PC Load Letter Core Library
//!
//! This crate provides the core functionality for pc-load-letter, an
//! interactive terminal checklist for cloning a fixed catalog of remote
//! repositories. It contains everything except the terminal itself.
//!
//! # Key Features
//!
//! - **Catalog**: Built-in repository list, or one loaded and validated from YAML
//! - **Selection Model**: Pure cursor, toggle, help and quit transitions
//! - **Key Bindings**: Static key-to-action table with short and full help
//! - **Dispatcher**: Applies key presses to the selection one at a time
//! - **Rendering**: Fixed-height text layout of the checklist
//! - **Cloning**: Sequential clone of the confirmed selection, failures isolated per entry
//!
//! # Examples
//!
//! Driving a session from a list of key identifiers:
//!
//! ```
//! use pc_load_letter_core::catalog::Catalog;
//! use pc_load_letter_core::dispatcher::{Dispatcher, Outcome};
//! use pc_load_letter_core::keybindings::KeyBindingRegistry;
//!
//! let catalog = Catalog::default();
//! let registry = KeyBindingRegistry::default();
//! let mut dispatcher = Dispatcher::new(&registry, &catalog);
//!
//! let keys = ["down", "space", "enter"].map(Ok::<_, pc_load_letter_core::error::Error>);
//! let outcome = dispatcher.run(keys, |_| Ok(()))?;
//!
//! assert_eq!(outcome, Outcome::Confirm([1].into()));
//! # Ok::<(), pc_load_letter_core::error::Error>(())
//! ```

pub mod catalog;
pub mod cloning;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod keybindings;
pub mod render;
pub mod selection;
