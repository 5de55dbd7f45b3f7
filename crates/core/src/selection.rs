//! Selection state and its transitions.
//!
//! Every transition takes the current [`SelectionState`] and returns the next
//! one; nothing here performs I/O. The catalog length is passed alongside the
//! state because the catalog itself is read-only context.

use std::collections::BTreeSet;

/// Logical actions the dispatcher can apply to a [`SelectionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    ToggleSelect,
    ToggleHelp,
    Confirm,
    Quit,
}

/// Direction to move the cursor through the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Complete state of the checklist for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Index of the highlighted catalog entry
    pub cursor: usize,
    /// Catalog indexes marked for cloning
    pub selected: BTreeSet<usize>,
    /// Whether the full help block is shown
    pub help_expanded: bool,
    /// Terminal flag, no transition applies once set
    pub quitting: bool,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }
}

/// Moves the cursor one entry, stopping at either end of the catalog.
#[must_use]
pub fn move_cursor(state: &SelectionState, direction: Direction, len: usize) -> SelectionState {
    let mut state = state.clone();
    if state.quitting || len == 0 {
        return state;
    }

    match direction {
        Direction::Up => {
            if state.cursor > 0 {
                state.cursor -= 1;
            }
        }
        Direction::Down => {
            if state.cursor + 1 < len {
                state.cursor += 1;
            }
        }
    }

    state
}

/// Adds `index` to the selection, or removes it if already present.
///
/// Indexes outside the catalog are ignored.
#[must_use]
pub fn toggle_selection(state: &SelectionState, index: usize, len: usize) -> SelectionState {
    let mut state = state.clone();
    if state.quitting || index >= len {
        return state;
    }

    if !state.selected.remove(&index) {
        state.selected.insert(index);
    }

    state
}

#[must_use]
pub fn toggle_help(state: &SelectionState) -> SelectionState {
    let mut state = state.clone();
    if !state.quitting {
        state.help_expanded = !state.help_expanded;
    }
    state
}

#[must_use]
pub fn request_quit(state: &SelectionState) -> SelectionState {
    let mut state = state.clone();
    state.quitting = true;
    state
}

/// Snapshots the selection for cloning and ends the session.
///
/// Returns `None` for the snapshot when the session had already ended, so a
/// confirm can never hand off twice.
#[must_use]
pub fn request_confirm(state: &SelectionState) -> (Option<BTreeSet<usize>>, SelectionState) {
    if state.quitting {
        return (None, state.clone());
    }

    (Some(state.selected.clone()), request_quit(state))
}

/// Applies a single action, ignoring any confirm snapshot.
#[must_use]
pub fn apply(state: &SelectionState, action: Action, len: usize) -> SelectionState {
    match action {
        Action::MoveUp => move_cursor(state, Direction::Up, len),
        Action::MoveDown => move_cursor(state, Direction::Down, len),
        Action::ToggleSelect => toggle_selection(state, state.cursor, len),
        Action::ToggleHelp => toggle_help(state),
        Action::Confirm => request_confirm(state).1,
        Action::Quit => request_quit(state),
    }
}
