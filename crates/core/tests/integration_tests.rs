//! Integration tests for pc-load-letter-core
//!
//! These tests drive whole sessions: catalog loading, key dispatch, rendering
//! and the clone pass, with a recording cloner standing in for git.

use pc_load_letter_core::{
    catalog::{load_catalog, Catalog, RepositoryEntry},
    cloning::{CloneDispatcher, Cloner},
    config::{clone_root_in, DEFAULT_VIEW_HEIGHT},
    dispatcher::{Dispatcher, Outcome},
    error::{Error, Result},
    keybindings::KeyBindingRegistry,
    render::render,
};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Default)]
struct RecordingCloner {
    calls: RefCell<Vec<(String, PathBuf)>>,
    failing_urls: Vec<String>,
}

impl Cloner for RecordingCloner {
    fn clone_repository(&self, url: &str, destination: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push((url.to_string(), destination.to_path_buf()));

        if self.failing_urls.iter().any(|u| u == url) {
            return Err(Error::clone_failed(
                url,
                destination.to_path_buf(),
                "remote hung up".to_string(),
            ));
        }
        Ok(())
    }
}

fn abc_catalog() -> Catalog {
    Catalog::new(vec![
        RepositoryEntry::new("A", "https://example.com/a", "first"),
        RepositoryEntry::new("B", "https://example.com/b", "second"),
        RepositoryEntry::new("C", "https://example.com/c", "third"),
    ])
    .unwrap()
}

fn run_session(catalog: &Catalog, keys: &[&str]) -> (Outcome, Vec<String>) {
    let registry = KeyBindingRegistry::default();
    let mut dispatcher = Dispatcher::new(&registry, catalog);
    let mut frames = Vec::new();

    let outcome = dispatcher
        .run(keys.iter().map(|k| Ok::<_, Error>(*k)), |state| {
            frames.push(render(state, catalog, &registry, DEFAULT_VIEW_HEIGHT));
            Ok(())
        })
        .unwrap();

    (outcome, frames)
}

/// Down, Down, Space, Enter clones exactly the third entry
#[test]
fn test_select_last_entry_and_confirm() {
    let catalog = abc_catalog();
    let (outcome, frames) = run_session(&catalog, &["down", "down", "space", "enter"]);

    let selected = match outcome {
        Outcome::Confirm(selected) => selected,
        other => panic!("expected confirm, got {other:?}"),
    };
    assert_eq!(selected, BTreeSet::from([2]));
    assert_eq!(frames.last().unwrap(), "Bye!\n");
    assert!(frames[2].contains("  > [X] C - third"));

    let home = Path::new("/home/tester");
    let dispatcher = CloneDispatcher::new(RecordingCloner::default());
    let report = dispatcher
        .dispatch(&selected, &catalog, Some(&clone_root_in(home)))
        .unwrap();

    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(report.outcomes[0].name, "C");
    assert_eq!(
        report.outcomes[0].destination,
        PathBuf::from("/home/tester/repos/personal/clone/C")
    );
    assert_eq!(report.outcomes[0].url, "https://example.com/c");
}

/// Enter without any selection still ends the session and clones nothing
#[test]
fn test_confirm_without_selection() {
    let catalog = abc_catalog();
    let (outcome, frames) = run_session(&catalog, &["enter"]);

    assert_eq!(outcome, Outcome::Confirm(BTreeSet::new()));
    assert_eq!(frames, vec!["Bye!\n".to_string()]);

    let cloner = RecordingCloner::default();
    let dispatcher = CloneDispatcher::new(cloner);
    let report = dispatcher
        .dispatch(&BTreeSet::new(), &catalog, Some(Path::new("/clones")))
        .unwrap();
    assert!(report.outcomes.is_empty());
}

/// A failing clone does not stop the next one
#[test]
fn test_failed_clone_does_not_abort_batch() {
    let catalog = abc_catalog();
    let (outcome, _) = run_session(&catalog, &["space", "j", "j", "space", "enter"]);

    let selected = match outcome {
        Outcome::Confirm(selected) => selected,
        other => panic!("expected confirm, got {other:?}"),
    };
    assert_eq!(selected, BTreeSet::from([0, 2]));

    let dispatcher = CloneDispatcher::new(RecordingCloner {
        failing_urls: vec!["https://example.com/a".to_string()],
        ..RecordingCloner::default()
    });
    let report = dispatcher
        .dispatch(&selected, &catalog, Some(Path::new("/clones")))
        .unwrap();

    assert_eq!(report.outcomes.len(), 2);
    assert!(matches!(
        report.outcomes[0].result,
        Err(Error::CloneFailed { .. })
    ));
    assert!(report.outcomes[1].result.is_ok());
    assert_eq!(report.outcomes[1].name, "C");
}

/// Quitting ends the session without handing anything to the clone pass
#[test]
fn test_quit_discards_selection() {
    let catalog = abc_catalog();
    let (outcome, frames) = run_session(&catalog, &["space", "q", "enter"]);

    assert_eq!(outcome, Outcome::Quit);
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1], "Bye!\n");
}

/// Toggling help keeps the frame height constant and leaves the list alone
#[test]
fn test_help_toggle_keeps_layout() {
    let catalog = abc_catalog();
    let (_, frames) = run_session(&catalog, &["j", "space", "?", "?"]);

    let heights: Vec<usize> = frames.iter().map(|f| f.lines().count()).collect();
    assert_eq!(heights, vec![DEFAULT_VIEW_HEIGHT; 4]);

    assert!(frames[2].contains("enter move along"));
    assert!(!frames[3].contains("enter move along"));

    let list = |frame: &String| -> Vec<String> {
        frame
            .lines()
            .filter(|l| l.contains(" - "))
            .map(str::to_string)
            .collect()
    };
    assert_eq!(list(&frames[1]), list(&frames[2]));
    assert_eq!(list(&frames[2]), list(&frames[3]));
}

/// Loading a catalog from YAML and driving a session over it
#[test]
fn test_catalog_file_workflow() {
    let yaml_content = r#"
- name: "dotfiles"
  url: "https://example.com/dotfiles"
  description: "All the dot files"
- name: "nvim"
  url: "https://example.com/nvim"
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    let catalog = load_catalog(&temp_path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[1].description, "");

    let (outcome, _) = run_session(&catalog, &["down", "down", "down", "space", "enter"]);
    assert_eq!(outcome, Outcome::Confirm(BTreeSet::from([1])));
}

/// A catalog file longer than the default view keeps its height when help is toggled
#[test]
fn test_long_catalog_file_keeps_height_across_help_toggle() {
    let yaml_content: String = (0..8)
        .map(|i| format!("- name: \"repo{i}\"\n  url: \"https://example.com/repo{i}\"\n"))
        .collect();

    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    let catalog = load_catalog(&temp_path).unwrap();
    assert_eq!(catalog.len(), 8);

    let (_, frames) = run_session(&catalog, &["j", "?", "j", "?"]);

    let heights: Vec<usize> = frames.iter().map(|f| f.lines().count()).collect();
    assert_eq!(heights, vec![3 + 8 + 4; 4]);
    assert!(frames[1].contains("enter move along"));
    assert!(frames[3].ends_with("? toggle help • q quit\n"));
}

#[test]
fn test_empty_catalog_file_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "[]").unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    assert!(matches!(
        load_catalog(&temp_path),
        Err(Error::EmptyCatalog { .. })
    ));
}

#[test]
fn test_malformed_catalog_file_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "- name: [unterminated").unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    assert!(matches!(load_catalog(&temp_path), Err(Error::Yaml { .. })));
}

#[test]
fn test_missing_catalog_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yml");

    let result = load_catalog(path.to_str().unwrap());
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_catalog_file_with_duplicate_names_rejected() {
    let yaml_content = r#"
- name: "same"
  url: "https://example.com/one"
- name: "same"
  url: "https://example.com/two"
"#;
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    assert!(matches!(
        load_catalog(&temp_path),
        Err(Error::NonUniqueName(name)) if name == "same"
    ));
}
