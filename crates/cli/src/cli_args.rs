//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use clap::Parser;

/// Command-line arguments for the `pll` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use pc_load_letter_cli::cli_args::Args;
///
/// let args = Args::parse_from(["pll", "--dry-run"]);
/// assert!(args.dry_run);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to a catalog YAML listing the repositories to offer.
    ///
    /// If not provided, the built-in catalog is used.
    #[arg(long, short = 'c')]
    pub catalog_path: Option<String>,

    /// Directory to clone the selected repositories into.
    ///
    /// If not provided, defaults to `~/repos/personal/clone`.
    #[arg(long, short = 'r')]
    pub clone_root: Option<String>,

    /// Perform a dry run, which just prints what would be cloned without cloning.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,
}
