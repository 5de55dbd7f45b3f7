//! Cloning of the repositories chosen in a session.
//!
//! [`CloneDispatcher`] walks the confirmed selection in catalog order and hands
//! each entry to a [`Cloner`]. A failed clone is logged and recorded, and the
//! remaining entries are still attempted.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{error, info, warn};

use crate::catalog::{Catalog, RepositoryEntry};
use crate::error::{Error, Result};

/// Materialises a remote repository at a local path.
pub trait Cloner {
    /// # Errors
    ///
    /// Returns an error if the repository could not be cloned to `destination`.
    fn clone_repository(&self, url: &str, destination: &Path) -> Result<()>;
}

/// Clones with the `git` executable found on `PATH`.
#[derive(Debug, Clone)]
pub struct GitCloner {
    program: String,
}

impl GitCloner {
    #[must_use]
    pub fn new() -> Self {
        Self::with_program("git")
    }

    #[must_use]
    pub fn with_program(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl Default for GitCloner {
    fn default() -> Self {
        Self::new()
    }
}

impl Cloner for GitCloner {
    fn clone_repository(&self, url: &str, destination: &Path) -> Result<()> {
        prepare_destination(destination)?;

        let status = Command::new(&self.program)
            .arg("clone")
            .arg(url)
            .arg(destination)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::clone_failed(url, destination.to_path_buf(), e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::clone_failed(
                url,
                destination.to_path_buf(),
                format!("`{} clone` exited with {status}", self.program),
            ))
        }
    }
}

/// Logs what would be cloned without touching the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunCloner;

impl Cloner for DryRunCloner {
    fn clone_repository(&self, url: &str, destination: &Path) -> Result<()> {
        info!("Dry run: would clone `{url}` into `{}`", destination.display());
        Ok(())
    }
}

/// Creates the parent of `destination` and refuses to clone over a
/// non-empty directory.
///
/// # Errors
///
/// Returns [`Error::DestinationNotEmpty`] if `destination` exists and is not
/// an empty directory, or an IO error if the parent cannot be created.
pub fn prepare_destination(destination: &Path) -> Result<()> {
    if destination.exists() {
        let is_empty_dir = destination.is_dir()
            && fs::read_dir(destination)
                .map_err(|e| {
                    Error::io_error(
                        "clone destination".to_string(),
                        destination.display().to_string(),
                        e,
                    )
                })?
                .next()
                .is_none();

        if !is_empty_dir {
            return Err(Error::DestinationNotEmpty(destination.to_path_buf()));
        }
    }

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            Error::io_error(
                "clone destination".to_string(),
                parent.display().to_string(),
                e,
            )
        })?;
    }

    Ok(())
}

/// What happened to one selected repository.
#[derive(Debug)]
pub struct CloneOutcome {
    pub name: String,
    pub url: String,
    pub destination: PathBuf,
    pub result: Result<()>,
}

#[derive(Debug, Default)]
pub struct CloneReport {
    pub outcomes: Vec<CloneOutcome>,
}

impl CloneReport {
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

pub struct CloneDispatcher<C: Cloner> {
    cloner: C,
}

impl<C: Cloner> CloneDispatcher<C> {
    pub fn new(cloner: C) -> Self {
        Self { cloner }
    }

    /// Clones every selected entry into `clone_root`, in ascending index order.
    ///
    /// `clone_root` is `None` when the user's home directory could not be
    /// resolved; nothing is attempted in that case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HomeDirectoryUnavailable`] if `clone_root` is `None`.
    /// Failures of individual clones are reported in the [`CloneReport`].
    pub fn dispatch(
        &self,
        selected: &BTreeSet<usize>,
        catalog: &Catalog,
        clone_root: Option<&Path>,
    ) -> Result<CloneReport> {
        self.dispatch_with_progress(selected, catalog, clone_root, |_, _| {})
    }

    /// Same as [`CloneDispatcher::dispatch`], calling `on_start` with each
    /// entry and its destination right before it is cloned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HomeDirectoryUnavailable`] if `clone_root` is `None`.
    pub fn dispatch_with_progress<F>(
        &self,
        selected: &BTreeSet<usize>,
        catalog: &Catalog,
        clone_root: Option<&Path>,
        mut on_start: F,
    ) -> Result<CloneReport>
    where
        F: FnMut(&RepositoryEntry, &Path),
    {
        let clone_root = clone_root.ok_or(Error::HomeDirectoryUnavailable)?;
        let mut report = CloneReport::default();

        for &index in selected {
            let Some(entry) = catalog.get(index) else {
                warn!(
                    "Skipping selected index {index}, the catalog has {} entries",
                    catalog.len()
                );
                continue;
            };

            let destination = clone_root.join(&entry.name);
            info!("Selected repository: {} at {}", entry.name, entry.url);
            on_start(entry, &destination);

            let result = self.cloner.clone_repository(&entry.url, &destination);
            if let Err(e) = &result {
                error!("{e}");
            }

            report.outcomes.push(CloneOutcome {
                name: entry.name.clone(),
                url: entry.url.clone(),
                destination,
                result,
            });
        }

        Ok(report)
    }
}
