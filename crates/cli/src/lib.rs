//! PC Load Letter CLI Library
//!
//! This crate provides the terminal frontend for pc-load-letter: argument
//! parsing, the interactive checklist and the post-confirm clone summary.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`checklist`]: Terminal setup, key translation and drawing
//! - [`summary`]: Text summary of a clone batch
//!
//! # Examples
//!
//! ```bash
//! # Pick from the built-in catalog, clone into ~/repos/personal/clone
//! pll
//!
//! # Pick from a custom catalog and clone somewhere else
//! pll --catalog-path ~/catalog.yml --clone-root ~/src
//!
//! # Show what would be cloned without cloning
//! pll --dry-run
//! ```

pub mod checklist;
pub mod cli_args;
pub mod summary;
