use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, SCORE_NEGATIVE, SCORE_POSITIVE};

/// Bordered panel showing the current score, centered.
pub struct ScoreDisplay {
    value: i64,
}

impl ScoreDisplay {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let color = match self.value {
            v if v > 0 => SCORE_POSITIVE,
            v if v < 0 => SCORE_NEGATIVE,
            _ => HEADER_TEXT,
        };
        // Inner height minus the single text line, split evenly above.
        let padding = area.height.saturating_sub(3) / 2;
        let mut lines: Vec<Line<'static>> = vec![Line::from(""); padding as usize];
        lines.push(Line::from(Span::styled(
            self.value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));

        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(Span::styled(" Score ", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
