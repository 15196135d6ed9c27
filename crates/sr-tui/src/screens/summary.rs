//! Summary screen: final score and the replay prompt.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use sr_core::{Clock, RoundEnd};

use crate::app::TuiApp;

/// Status bar text.
pub const STATUS_HINT: &str = "y:play again  n:quit  s:setup  ?:help";

/// Draw the end-of-round report.
pub fn draw<C: Clock>(frame: &mut Frame, app: &TuiApp<C>, area: Rect) {
    let block = Block::default()
        .title(" Game Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line<'static>> = Vec::new();
    match app.session.summary() {
        Ok(summary) => {
            let (headline, color) = match summary.ended_by {
                RoundEnd::Completed => ("All problems answered!", Color::Green),
                RoundEnd::TimeExpired => ("Time's up!", Color::Red),
            };
            lines.push(Line::from(Span::styled(
                headline,
                Style::default().fg(color).bold(),
            )));
            lines.push(Line::from(""));
            for text in summary.to_string().lines() {
                lines.push(Line::from(text.to_string()));
            }
        }
        Err(_) => lines.push(Line::from("No round played yet.")),
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Play Again? (y/n)",
        Style::default().fg(Color::Cyan),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
