use crate::config::UiConfig;
use crate::store::ScoreStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

/// Run the interactive counter until the user quits.
pub fn run(store: ScoreStore, ui: &UiConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(ui.mouse)?;
    let tick_rate = ui.tick_rate();
    let mut app = App::new(store);
    let events = EventHandler::new(tick_rate);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(score = app.score(), "ui started");

    loop {
        if app.take_dirty() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(score = app.score(), "ui stopped");
    drop(guard);
    Ok(())
}
