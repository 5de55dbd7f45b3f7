//! Turns key identifiers into selection transitions.
//!
//! The dispatcher owns the single [`SelectionState`] of a session. Keys are
//! processed one at a time, each to completion, and once the state reaches
//! `quitting` the dispatcher stops accepting input.

use std::collections::BTreeSet;

use log::debug;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::keybindings::KeyBindingRegistry;
use crate::selection::{self, Action, SelectionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Terminated,
}

/// Result of handling one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The key matched no action, or the session is already over
    Ignored,
    /// The state changed and should be redrawn
    Updated,
    Quit,
    /// The session ended with these catalog indexes to clone
    Confirm(BTreeSet<usize>),
}

impl Outcome {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Quit | Outcome::Confirm(_))
    }
}

pub struct Dispatcher<'a> {
    registry: &'a KeyBindingRegistry,
    catalog: &'a Catalog,
    state: SelectionState,
    phase: Phase,
}

impl<'a> Dispatcher<'a> {
    #[must_use]
    pub fn new(registry: &'a KeyBindingRegistry, catalog: &'a Catalog) -> Self {
        Self {
            registry,
            catalog,
            state: SelectionState::new(),
            phase: Phase::Active,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Handles a single key identifier.
    pub fn handle_key(&mut self, key: &str) -> Outcome {
        if self.phase == Phase::Terminated {
            debug!("Ignoring key `{key}` after the session ended");
            return Outcome::Ignored;
        }

        let Some(action) = self.registry.action_for(key) else {
            debug!("No action bound to key `{key}`");
            return Outcome::Ignored;
        };

        debug!("Key `{key}` mapped to {action:?}");
        self.apply(action)
    }

    fn apply(&mut self, action: Action) -> Outcome {
        let len = self.catalog.len();

        let (snapshot, next) = match action {
            Action::Confirm => selection::request_confirm(&self.state),
            _ => (None, selection::apply(&self.state, action, len)),
        };

        self.state = next;

        if self.state.quitting {
            self.phase = Phase::Terminated;
            return match snapshot {
                Some(selected) => Outcome::Confirm(selected),
                None => Outcome::Quit,
            };
        }

        Outcome::Updated
    }

    /// Feeds keys to the dispatcher until the session ends or input runs out.
    ///
    /// `on_change` is called with the new state after every update, including
    /// the final quitting state. Input errors stop the loop and are returned.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `keys` or `on_change`.
    pub fn run<I, K, F>(&mut self, keys: I, mut on_change: F) -> Result<Outcome>
    where
        I: IntoIterator<Item = Result<K>>,
        K: AsRef<str>,
        F: FnMut(&SelectionState) -> Result<()>,
    {
        for key in keys {
            let outcome = self.handle_key(key?.as_ref());

            if outcome == Outcome::Ignored {
                continue;
            }

            on_change(&self.state)?;

            if outcome.is_terminal() {
                return Ok(outcome);
            }
        }

        Ok(Outcome::Ignored)
    }
}
