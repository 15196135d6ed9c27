//! Setup screen: difficulty radio and problem count.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use sr_core::{Clock, Difficulty};

use crate::app::TuiApp;

/// Status bar text.
pub const STATUS_HINT: &str =
    "\u{2190}/\u{2192}:difficulty  0-9:problems  Enter:start  ?:help  q:quit";

/// Draw the setup form.
pub fn draw<C: Clock>(frame: &mut Frame, app: &TuiApp<C>, area: Rect) {
    let block = Block::default()
        .title(" Addition Game ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Difficulty
            Constraint::Length(1), // Label
            Constraint::Length(3), // Count field
            Constraint::Min(0),    // Hint
        ])
        .split(inner);

    let mut lines = vec![Line::from(Span::styled(
        "Choose Difficulty:",
        Style::default().fg(Color::DarkGray),
    ))];
    for d in Difficulty::ALL {
        lines.push(radio_line(d, d == app.difficulty));
    }
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Number of Problems:",
            Style::default().fg(Color::DarkGray),
        )),
        chunks[1],
    );

    let field_area = Rect {
        width: chunks[2].width.min(20),
        ..chunks[2]
    };
    let focused = app.popup.is_none() && !app.show_help;
    app.count_field.draw(frame, field_area, "", focused);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Press Enter to start!",
            Style::default().fg(Color::Green),
        )),
        chunks[3],
    );
}

fn radio_line(difficulty: Difficulty, selected: bool) -> Line<'static> {
    let (marker, style) = if selected {
        ("(\u{2022}) ", Style::default().fg(Color::Yellow).bold())
    } else {
        ("( ) ", Style::default().fg(Color::White))
    };
    Line::from(Span::styled(
        format!("  {marker}{}", difficulty.label()),
        style,
    ))
}
