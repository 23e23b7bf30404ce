use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key bindings in display order, matching the button order on screen.
const KEY_HINTS: [(&str, &str); 3] = [
    ("-/←", "decrement"),
    ("+/→", "increment"),
    ("q", "quit"),
];

const SEPARATOR: &str = " │ ";

/// Bottom bar: key hints on the left, version on the bottom border.
pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    fn hints() -> Line<'static> {
        let key_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, text_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {action}"), text_style));
        }
        Line::from(spans)
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let version = Line::from(format!(" tally v{VERSION} "))
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
            .right_aligned();

        Paragraph::new(Self::hints()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title_bottom(version),
        )
    }
}
