//! Repository catalog definitions, loading and validation.
//!
//! The catalog is the fixed, ordered list of repositories offered for cloning
//! during a session. Entries are identified by their position, so a catalog is
//! never reordered or mutated once built.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::Error::{EmptyUrl, InvalidName, NonUniqueName};
use crate::error::{Error, Result};

const GITHUB_REMOTERABBIT: &str = "https://github.com/remoterabbit";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryEntry {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
}

impl RepositoryEntry {
    pub fn new(name: &str, url: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            description: description.to_string(),
        }
    }
}

impl Display for RepositoryEntry {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        if self.description.is_empty() {
            formatter.write_str(&self.name)
        } else {
            write!(formatter, "{} - {}", self.name, self.description)
        }
    }
}

/// Read-only, ordered collection of [`RepositoryEntry`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<RepositoryEntry>,
}

impl Catalog {
    /// Builds a catalog, validating names and URLs.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is invalid or repeated, or a URL is empty.
    /// An empty list is accepted here; only catalog files are required to be
    /// non-empty.
    pub fn new(entries: Vec<RepositoryEntry>) -> Result<Self> {
        validate_entries(&entries)?;
        Ok(Self { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RepositoryEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RepositoryEntry> {
        self.entries.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            entries: vec![
                RepositoryEntry::new(
                    "Dot_Files",
                    &format!("{GITHUB_REMOTERABBIT}/dot_files"),
                    "All the dot files (kind of)",
                ),
                RepositoryEntry::new(
                    "Tmux",
                    &format!("{GITHUB_REMOTERABBIT}/tmux"),
                    "Dots for tmux setup.",
                ),
                RepositoryEntry::new(
                    "zsh",
                    &format!("{GITHUB_REMOTERABBIT}/zsh"),
                    "Dots for zsh setup.",
                ),
            ],
        }
    }
}

impl Index<usize> for Catalog {
    type Output = RepositoryEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." {
        return Err(InvalidName(name.to_string()));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(InvalidName(name.to_string()));
    }

    Ok(())
}

fn validate_entries(entries: &[RepositoryEntry]) -> Result<()> {
    let mut names = HashSet::new();

    for entry in entries {
        validate_name(&entry.name)?;

        if entry.url.trim().is_empty() {
            return Err(EmptyUrl(entry.name.clone()));
        }

        if !names.insert(entry.name.as_str()) {
            return Err(NonUniqueName(entry.name.clone()));
        }
    }

    Ok(())
}

/// Loads and validates a catalog from a YAML file.
///
/// The file holds a list of entries with `name`, `url` and an optional
/// `description`.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The YAML is malformed or doesn't match the expected structure
/// - The file contains no entries
/// - A name is invalid or repeated, or a URL is empty
///
/// # Examples
///
/// ```no_run
/// use pc_load_letter_core::catalog::load_catalog;
///
/// let catalog = load_catalog("/home/me/.pc-load-letter/catalog.yml")?;
/// println!("Loaded {} repositories", catalog.len());
/// # Ok::<(), pc_load_letter_core::error::Error>(())
/// ```
pub fn load_catalog(catalog_path: &str) -> Result<Catalog> {
    let reader = File::open(catalog_path)
        .map_err(|e| Error::io_error("catalog".to_string(), catalog_path.to_string(), e))?;

    let entries: Vec<RepositoryEntry> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "catalog".to_string(),
            catalog_path.to_string(),
            e,
        )
    })?;

    if entries.is_empty() {
        return Err(Error::empty_catalog(catalog_path.to_string()));
    }

    Catalog::new(entries)
}
