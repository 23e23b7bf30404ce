use crate::ui::app::App;
use crate::ui::controls::Control;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up | KeyCode::Right => {
            app.press(Control::Increment)
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down | KeyCode::Left => {
            app.press(Control::Decrement)
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        if let Some(control) = app.on_click(mouse.column, mouse.row) {
            tracing::trace!(?control, "button clicked");
        }
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
