use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ratatui::layout::Rect;

use crate::store::{ScoreStore, Subscription};
use crate::ui::controls::Control;
use crate::ui::layout::control_at;
use crate::ui::score::ScoreIntent;

/// View shell around the score store.
///
/// Subscribes on construction; every notification marks the view dirty so
/// the runtime redraws on the next loop iteration.
pub struct App {
    store: ScoreStore,
    subscription: Subscription,
    dirty: Arc<AtomicBool>,
    should_quit: bool,
    size: Option<(u16, u16)>,
}

impl App {
    pub fn new(store: ScoreStore) -> Self {
        let dirty = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&dirty);
        let subscription = store.subscribe(move || flag.store(true, Ordering::Release));
        Self {
            store,
            subscription,
            dirty,
            should_quit: false,
            size: None,
        }
    }

    pub fn score(&self) -> i64 {
        self.store.state().score
    }

    pub fn dispatch(&self, intent: ScoreIntent) {
        self.store.dispatch(intent);
    }

    pub fn press(&self, control: Control) {
        self.dispatch(control.intent());
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.dirty.store(true, Ordering::Release);
    }

    /// Press the control under a left click, if any.
    pub fn on_click(&self, column: u16, row: u16) -> Option<Control> {
        let (cols, rows) = self.size?;
        let control = control_at(Rect::new(0, 0, cols, rows), column, row)?;
        self.press(control);
        Some(control)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.subscription.unsubscribe();
    }
}
