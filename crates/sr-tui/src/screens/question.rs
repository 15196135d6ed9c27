//! Question screen: the current problem, the answer field and the countdown.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use sr_core::Clock;

use crate::app::{LastAnswer, TuiApp};

/// Status bar text.
pub const STATUS_HINT: &str = "0-9:answer  Enter:submit  Esc:abandon  ?:help  Ctrl+C:quit";

/// Seconds left at which the countdown turns red.
const LOW_TIME_SECS: u64 = 10;

/// Draw the question screen.
pub fn draw<C: Clock>(frame: &mut Frame, app: &TuiApp<C>, area: Rect) {
    let session = &app.session;
    let block = Block::default()
        .title(format!(
            " Problem {} of {} ",
            session.problems_asked(),
            session.problem_count()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Prompt
            Constraint::Length(3), // Answer field
            Constraint::Length(2), // Feedback
            Constraint::Min(0),    // Score and timer
        ])
        .split(inner);

    let prompt = session
        .current_problem()
        .map(|p| p.prompt())
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Span::styled(
            prompt,
            Style::default().fg(Color::White).bold(),
        ))
        .alignment(Alignment::Center),
        chunks[0],
    );

    let field_area = Rect {
        width: chunks[1].width.min(20),
        x: chunks[1].x + chunks[1].width.saturating_sub(20) / 2,
        ..chunks[1]
    };
    let focused = app.popup.is_none() && !app.show_help;
    app.answer_field.draw(frame, field_area, " Answer ", focused);

    let feedback = match app.last_answer {
        Some(LastAnswer::Correct(p)) => Span::styled(
            format!("\u{2714} {p} = {}", p.answer()),
            Style::default().fg(Color::Green),
        ),
        Some(LastAnswer::Wrong(p)) => Span::styled(
            format!("\u{2718} {p} = {}", p.answer()),
            Style::default().fg(Color::Red),
        ),
        None => Span::raw(""),
    };
    frame.render_widget(
        Paragraph::new(feedback).alignment(Alignment::Center),
        chunks[2],
    );

    let remaining = session.remaining_secs();
    let time_style = if remaining <= LOW_TIME_SECS {
        Style::default().fg(Color::Red).bold()
    } else {
        Style::default().fg(Color::White)
    };
    let lines = vec![
        Line::from(Span::styled(
            format!("Score: {}", session.score()),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(format!("Time left: {remaining}s"), time_style)),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[3],
    );
}
