//! Text layout of the checklist.
//!
//! [`render`] is a pure function of the selection state, catalog and key
//! bindings. The frontend only decides how the text reaches the screen.

use itertools::Itertools;

use crate::catalog::Catalog;
use crate::keybindings::{Binding, KeyBindingRegistry};
use crate::selection::SelectionState;

pub const TITLE: &str = "PC Load Letter";
pub const FAREWELL: &str = "Bye!\n";

const LIST_INDENT: &str = "  ";
const SHORT_HELP_SEPARATOR: &str = " • ";
const COLUMN_SEPARATOR: &str = "    ";
// Blank line, title, blank line
const HEADER_LINES: usize = 3;

/// Number of lines the checklist occupies for this catalog.
///
/// This is at least `minimum`, and always tall enough for the list with the
/// full help expanded, so toggling help never changes the height.
#[must_use]
pub fn view_height(catalog: &Catalog, registry: &KeyBindingRegistry, minimum: usize) -> usize {
    let help_rows = full_help_lines(registry).len().max(1);
    minimum.max(HEADER_LINES + catalog.len() + help_rows)
}

/// Renders the checklist into text [`view_height`] lines tall, with `height`
/// as the minimum.
#[must_use]
pub fn render(
    state: &SelectionState,
    catalog: &Catalog,
    registry: &KeyBindingRegistry,
    height: usize,
) -> String {
    if state.quitting {
        return FAREWELL.to_string();
    }

    let mut lines = vec![String::new(), TITLE.to_string(), String::new()];

    for (i, entry) in catalog.iter().enumerate() {
        let cursor = if i == state.cursor { ">" } else { " " };
        let checked = if state.is_selected(i) { "[X]" } else { "[ ]" };
        lines.push(format!(
            "{LIST_INDENT}{cursor} {checked} {} - {}",
            entry.name, entry.description
        ));
    }

    let help = if state.help_expanded {
        full_help_lines(registry)
    } else {
        vec![short_help_line(registry)]
    };

    let height = view_height(catalog, registry, height);
    let padding = height.saturating_sub(lines.len() + help.len());
    lines.extend(std::iter::repeat(String::new()).take(padding));
    lines.extend(help);

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn help_entry(binding: &Binding) -> String {
    format!("{} {}", binding.help_key, binding.help_description)
}

fn short_help_line(registry: &KeyBindingRegistry) -> String {
    registry
        .short_help()
        .into_iter()
        .map(help_entry)
        .join(SHORT_HELP_SEPARATOR)
}

// Groups are laid out as columns side by side.
fn full_help_lines(registry: &KeyBindingRegistry) -> Vec<String> {
    let columns: Vec<Vec<String>> = registry
        .full_help()
        .into_iter()
        .map(|group| group.into_iter().map(help_entry).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .map(|column| column.iter().map(|c| c.chars().count()).max().unwrap_or(0))
        .collect();

    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);

    (0..rows)
        .map(|row| {
            columns
                .iter()
                .zip(&widths)
                .map(|(column, &width)| {
                    let cell = column.get(row).map_or("", String::as_str);
                    format!("{cell:<width$}")
                })
                .join(COLUMN_SEPARATOR)
                .trim_end()
                .to_string()
        })
        .collect()
}
