use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};

/// Restores the terminal on drop and from the panic hook, whichever runs first.
pub struct TerminalGuard {
    cleanup: Arc<Mutex<Option<Box<dyn FnOnce() + Send + 'static>>>>,
}

impl TerminalGuard {
    fn new() -> Self {
        Self {
            cleanup: Arc::new(Mutex::new(None)),
        }
    }

    fn set_cleanup<F: FnOnce() + Send + 'static>(&self, cleanup: F) {
        if let Ok(mut slot) = self.cleanup.lock() {
            *slot = Some(Box::new(cleanup));
        }
    }

    fn install_panic_hook(&self) {
        let cleanup = Arc::clone(&self.cleanup);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if let Ok(mut slot) = cleanup.lock() {
                if let Some(cleanup) = slot.take() {
                    cleanup();
                }
            }
            default_hook(info);
        }));
    }

    /// Runs one setup step. On success the cleanup widens to `cleanup`; on
    /// failure the previous cleanup stays armed and runs when the guard drops.
    fn advance<C>(&self, step: impl FnOnce() -> io::Result<()>, cleanup: C) -> io::Result<()>
    where
        C: FnOnce() + Send + 'static,
    {
        step()?;
        self.set_cleanup(cleanup);
        Ok(())
    }

    fn restore(&self) {
        if let Ok(mut slot) = self.cleanup.lock() {
            if let Some(cleanup) = slot.take() {
                cleanup();
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

fn restore_terminal(screen: bool, mouse: bool) -> impl FnOnce() + Send + 'static {
    move || {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        if mouse {
            let _ = stdout.execute(DisableMouseCapture);
        }
        if screen {
            let _ = stdout.execute(LeaveAlternateScreen);
            let _ = stdout.execute(Show);
        }
    }
}

/// Enters raw mode and the alternate screen. Each step that succeeds widens
/// the guard's cleanup, so a failure part way restores what was already set.
pub fn setup_terminal(
    mouse: bool,
) -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::new();
    guard.set_cleanup(restore_terminal(false, false));

    let mut stdout = io::stdout();
    guard.advance(
        || stdout.execute(EnterAlternateScreen).map(|_| ()),
        restore_terminal(true, false),
    )?;
    if mouse {
        guard.advance(
            || stdout.execute(EnableMouseCapture).map(|_| ()),
            restore_terminal(true, true),
        )?;
    }
    stdout.execute(Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    guard.install_panic_hook();

    Ok((terminal, guard))
}
