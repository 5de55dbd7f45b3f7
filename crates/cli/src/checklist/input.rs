use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pc_load_letter_core::error::Result;

/// Translates a key event into the identifier used by the key binding table.
///
/// Returns `None` for keys that have no identifier, such as media keys.
#[must_use]
pub fn key_identifier(key_event: &KeyEvent) -> Option<String> {
    let identifier = match key_event.code {
        KeyCode::Char(c) if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            format!("ctrl+{}", c.to_ascii_lowercase())
        }
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "shift+tab".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdown".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        _ => return None,
    };

    Some(identifier)
}

/// Blocking stream of key identifiers read from the terminal.
///
/// Only key presses are yielded; releases, mouse, focus, paste and resize
/// events are skipped. The stream never ends on its own.
pub struct TerminalKeys;

impl Iterator for TerminalKeys {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match event::read() {
                Err(e) => return Some(Err(e.into())),
                Ok(Event::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
                    if let Some(identifier) = key_identifier(&key_event) {
                        return Some(Ok(identifier));
                    }
                }
                Ok(_) => {}
            }
        }
    }
}
