use std::io::{stdout, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{queue, ExecutableCommand};
use log::debug;

use pc_load_letter_core::catalog::Catalog;
use pc_load_letter_core::config::DEFAULT_VIEW_HEIGHT;
use pc_load_letter_core::dispatcher::{Dispatcher, Outcome};
use pc_load_letter_core::error::Result;
use pc_load_letter_core::keybindings::KeyBindingRegistry;
use pc_load_letter_core::render::{render, TITLE};
use pc_load_letter_core::selection::SelectionState;

use super::input::TerminalKeys;

const TITLE_COLOR: Color = Color::Rgb {
    r: 0xFF,
    g: 0x69,
    b: 0xB4,
};

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Restore the terminal on drop, even when unwinding from an error
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

fn draw(text: &str) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    for line in text.lines() {
        if line == TITLE {
            queue!(
                stdout,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(TITLE_COLOR),
                Print(line),
                SetAttribute(Attribute::Reset),
                SetForegroundColor(Color::Reset),
            )?;
        } else {
            queue!(stdout, Print(line))?;
        }
        queue!(stdout, cursor::MoveToNextLine(1))?;
    }

    stdout.flush()?;
    Ok(())
}

/// Shows the checklist until the user quits or confirms.
///
/// Returns how the session ended along with the final state. The terminal is
/// restored before returning, so the caller can print normally.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, read from or drawn to.
pub fn prompt_for_selection(
    catalog: &Catalog,
    registry: &KeyBindingRegistry,
) -> Result<(Outcome, SelectionState)> {
    let mut stdout = stdout();

    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode is disabled
    stdout.execute(cursor::Hide)?;

    let mut dispatcher = Dispatcher::new(registry, catalog);
    draw(&render(dispatcher.state(), catalog, registry, DEFAULT_VIEW_HEIGHT))?;

    let outcome = dispatcher.run(TerminalKeys, |state| {
        draw(&render(state, catalog, registry, DEFAULT_VIEW_HEIGHT))
    })?;

    debug!("Checklist finished with {outcome:?}");
    Ok((outcome, dispatcher.state().clone()))
}
