//! Terminal ownership for the shell: raw mode and the alternate screen are
//! claimed for the lifetime of one closure and released however it exits.

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs `body` against a freshly claimed terminal.
///
/// The screen is restored when the closure returns and also when it
/// unwinds: the restore guard sits on the stack below `body`.
pub fn with_terminal<T>(body: impl FnOnce(&mut Tui) -> Result<T>) -> Result<T> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let _restore = RestoreOnDrop;

    let mut tui = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    body(&mut tui)
}

struct RestoreOnDrop;

impl Drop for RestoreOnDrop {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
    }
}
