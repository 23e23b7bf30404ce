use ratatui::layout::{Position, Rect};

use crate::ui::controls::Control;

pub const CONTROLS_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;
pub const BUTTON_WIDTH: u16 = 9;
pub const BUTTON_GAP: u16 = 2;

/// Splits the screen into (score, controls, footer), top to bottom.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let footer_height = FOOTER_HEIGHT.min(area.height);
    let controls_height = CONTROLS_HEIGHT.min(area.height.saturating_sub(footer_height));
    let score_height = area
        .height
        .saturating_sub(footer_height + controls_height);
    let score = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: score_height,
    };
    let controls = Rect {
        x: area.x,
        y: area.y + score_height,
        width: area.width,
        height: controls_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + score_height + controls_height,
        width: area.width,
        height: footer_height,
    };
    (score, controls, footer)
}

/// Button rectangles inside the controls row, centered horizontally.
/// Returns (decrement, increment).
pub fn control_regions(area: Rect) -> (Rect, Rect) {
    let width = BUTTON_WIDTH.min(area.width.saturating_sub(BUTTON_GAP) / 2);
    let total = width * 2 + BUTTON_GAP.min(area.width);
    let left = area.x + area.width.saturating_sub(total) / 2;
    let decrement = Rect {
        x: left,
        y: area.y,
        width,
        height: area.height,
    };
    let increment = Rect {
        x: left + width + BUTTON_GAP,
        y: area.y,
        width,
        height: area.height,
    };
    (decrement, increment)
}

/// Control under the cell (`column`, `row`) of a screen of size `area`.
pub fn control_at(area: Rect, column: u16, row: u16) -> Option<Control> {
    let (_, controls, _) = layout_regions(area);
    let (decrement, increment) = control_regions(controls);
    let position = Position::new(column, row);
    if decrement.contains(position) {
        Some(Control::Decrement)
    } else if increment.contains(position) {
        Some(Control::Increment)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_without_overlap() {
        let area = Rect::new(0, 0, 40, 20);
        let (score, controls, footer) = layout_regions(area);
        assert_eq!(score.height, 14);
        assert_eq!(controls.y, 14);
        assert_eq!(footer.y, 17);
        assert_eq!(score.height + controls.height + footer.height, area.height);
    }

    #[test]
    fn tiny_screen_gives_footer_priority() {
        let (score, controls, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(footer.height, 2);
        assert_eq!(controls.height, 0);
        assert_eq!(score.height, 0);
    }

    #[test]
    fn buttons_are_centered() {
        let (decrement, increment) = control_regions(Rect::new(0, 10, 40, 3));
        assert_eq!(decrement.width, BUTTON_WIDTH);
        assert_eq!(decrement.x, 10);
        assert_eq!(increment.x, 21);
        assert_eq!(increment.right() - decrement.x, 2 * BUTTON_WIDTH + BUTTON_GAP);
    }

    #[test]
    fn narrow_row_shrinks_buttons() {
        let (decrement, increment) = control_regions(Rect::new(0, 0, 12, 3));
        assert_eq!(decrement.width, 5);
        assert!(increment.right() <= 12);
    }

    #[test]
    fn hit_testing_finds_buttons() {
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(control_at(area, 12, 15), Some(Control::Decrement));
        assert_eq!(control_at(area, 25, 15), Some(Control::Increment));
        assert_eq!(control_at(area, 19, 15), None);
        assert_eq!(control_at(area, 12, 5), None);
    }
}
