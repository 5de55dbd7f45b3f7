use std::collections::BTreeSet;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use pc_load_letter_cli::checklist;
use pc_load_letter_cli::cli_args::Args;
use pc_load_letter_cli::summary::summary_lines;
use pc_load_letter_core::catalog::{load_catalog, Catalog, RepositoryEntry};
use pc_load_letter_core::cloning::{CloneDispatcher, DryRunCloner, GitCloner};
use pc_load_letter_core::config::{self, DEFAULT_VIEW_HEIGHT};
use pc_load_letter_core::dispatcher::Outcome;
use pc_load_letter_core::error::Result;
use pc_load_letter_core::keybindings::KeyBindingRegistry;
use pc_load_letter_core::render::render;

/// Load the catalog given on the command line, or fall back to the built-in one
fn initialize_catalog(args: &Args) -> Result<Catalog> {
    match config::get_catalog_path(&args.catalog_path) {
        Some(catalog_path) => {
            debug!("Catalog path: `{}`", catalog_path);
            load_catalog(&catalog_path)
        }
        None => {
            debug!("Using the built-in catalog");
            Ok(Catalog::default())
        }
    }
}

fn announce_clone(entry: &RepositoryEntry, _destination: &Path) {
    println!("Selected repository: {} at {}", entry.name, entry.url);
}

fn clone_selected(args: &Args, catalog: &Catalog, selected: &BTreeSet<usize>) -> Result<()> {
    let clone_root = config::get_clone_root(&args.clone_root);
    debug!("Clone root: {:?}", clone_root);

    let report = if args.dry_run {
        info!("Dry run is specified, nothing will be cloned.");
        CloneDispatcher::new(DryRunCloner).dispatch_with_progress(
            selected,
            catalog,
            clone_root.as_deref(),
            announce_clone,
        )?
    } else {
        CloneDispatcher::new(GitCloner::new()).dispatch_with_progress(
            selected,
            catalog,
            clone_root.as_deref(),
            announce_clone,
        )?
    };

    for line in summary_lines(&report, args.dry_run) {
        println!("{line}");
    }

    Ok(())
}

fn execute() -> Result<()> {
    let args = Args::parse();
    let catalog = initialize_catalog(&args)?;
    let registry = KeyBindingRegistry::default();

    let (outcome, state) = checklist::prompt_for_selection(&catalog, &registry)?;
    print!("{}", render(&state, &catalog, &registry, DEFAULT_VIEW_HEIGHT));

    match outcome {
        Outcome::Confirm(selected) => clone_selected(&args, &catalog, &selected),
        _ => Ok(()),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
