use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::score::ScoreIntent;
use crate::ui::theme::{ACCENT, BUTTON_BORDER};

/// One of the two buttons under the score.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Control {
    Decrement,
    Increment,
}

impl Control {
    /// Intent dispatched when the button is pressed.
    pub fn intent(self) -> ScoreIntent {
        match self {
            Control::Decrement => ScoreIntent::decrement_one(),
            Control::Increment => ScoreIntent::increment_one(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::Decrement => "-",
            Control::Increment => "+",
        }
    }
}

pub struct Controls;

impl Default for Controls {
    fn default() -> Self {
        Self::new()
    }
}

impl Controls {
    pub fn new() -> Self {
        Self
    }

    pub fn button(&self, control: Control) -> Paragraph<'static> {
        Paragraph::new(control.label())
            .alignment(Alignment::Center)
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BUTTON_BORDER)),
            )
    }
}
