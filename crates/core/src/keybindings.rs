//! Key binding table mapping physical keys to [`Action`]s.
//!
//! Keys are identified by plain strings (`"k"`, `"up"`, `"ctrl+c"`, `"space"`),
//! so this table does not depend on any terminal library. The frontend is
//! responsible for turning its key events into these identifiers.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::selection::Action;

/// Keys accepted for one action, plus the text shown for it in help.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub action: Action,
    pub keys: Vec<&'static str>,
    pub help_key: &'static str,
    pub help_description: &'static str,
}

impl Binding {
    pub fn new(
        action: Action,
        keys: &[&'static str],
        help_key: &'static str,
        help_description: &'static str,
    ) -> Self {
        Self {
            action,
            keys: keys.to_vec(),
            help_key,
            help_description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeyBindingRegistry {
    bindings: Vec<Binding>,
    lookup: HashMap<&'static str, Action>,
}

impl KeyBindingRegistry {
    /// Builds a registry from bindings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKeyBinding`] if a key appears in more than one
    /// binding, as dispatch would otherwise depend on table order.
    pub fn new(bindings: Vec<Binding>) -> Result<Self> {
        let mut lookup = HashMap::new();
        for binding in &bindings {
            for key in &binding.keys {
                if lookup.insert(*key, binding.action).is_some() {
                    return Err(Error::DuplicateKeyBinding((*key).to_string()));
                }
            }
        }

        Ok(Self { bindings, lookup })
    }

    #[must_use]
    pub fn action_for(&self, key: &str) -> Option<Action> {
        self.lookup.get(key).copied()
    }

    #[must_use]
    pub fn binding(&self, action: Action) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.action == action)
    }

    /// Bindings worth showing at all times.
    #[must_use]
    pub fn short_help(&self) -> Vec<&Binding> {
        self.bindings_for(&[Action::ToggleHelp, Action::Quit])
    }

    /// Every binding, grouped into columns.
    #[must_use]
    pub fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            self.bindings_for(&[
                Action::MoveUp,
                Action::MoveDown,
                Action::ToggleSelect,
                Action::Confirm,
            ]),
            self.bindings_for(&[Action::ToggleHelp, Action::Quit]),
        ]
    }

    fn bindings_for(&self, actions: &[Action]) -> Vec<&Binding> {
        actions.iter().filter_map(|a| self.binding(*a)).collect()
    }
}

impl Default for KeyBindingRegistry {
    fn default() -> Self {
        // The default table is covered by a test for duplicate keys.
        let bindings = default_bindings();
        let lookup = bindings
            .iter()
            .flat_map(|b| b.keys.iter().map(move |k| (*k, b.action)))
            .collect();
        Self { bindings, lookup }
    }
}

fn default_bindings() -> Vec<Binding> {
    vec![
        Binding::new(Action::MoveUp, &["k", "up"], "↑/k", "move up"),
        Binding::new(Action::MoveDown, &["j", "down"], "↓/j", "move down"),
        Binding::new(Action::ToggleSelect, &["space"], "space", "select"),
        Binding::new(Action::Confirm, &["enter"], "enter", "move along"),
        Binding::new(Action::ToggleHelp, &["?"], "?", "toggle help"),
        Binding::new(Action::Quit, &["q", "esc", "ctrl+c"], "q", "quit"),
    ]
}
