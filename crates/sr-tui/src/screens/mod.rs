//! Screen identifiers and the top-level draw function.

pub mod question;
pub mod setup;
pub mod summary;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use sr_core::Clock;

use crate::app::TuiApp;

/// Which screen is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    /// Difficulty and problem-count selection.
    Setup,
    /// A problem awaiting an answer, with the countdown.
    Question,
    /// End-of-round report and replay prompt.
    Summary,
}

impl ScreenId {
    /// Title shown in the header bar.
    pub fn title(self) -> &'static str {
        match self {
            Self::Setup => "New Round",
            Self::Question => "Round in Progress",
            Self::Summary => "Game Summary",
        }
    }
}

/// Draw the whole frame for the current app state.
pub fn draw<C: Clock>(frame: &mut Frame, app: &TuiApp<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let header = Line::from(vec![
        Span::styled("Sumrush", Style::default().fg(Color::Yellow).bold()),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.screen.title(), Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    match app.screen {
        ScreenId::Setup => setup::draw(frame, app, chunks[1]),
        ScreenId::Question => question::draw(frame, app, chunks[1]),
        ScreenId::Summary => summary::draw(frame, app, chunks[1]),
    }

    let hint = match app.screen {
        ScreenId::Setup => setup::STATUS_HINT,
        ScreenId::Question => question::STATUS_HINT,
        ScreenId::Summary => summary::STATUS_HINT,
    };
    let status = Paragraph::new(hint).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[2]);

    if app.show_help {
        crate::shared::draw_help_popup(frame);
    }
    if let Some(popup) = &app.popup {
        popup.draw(frame);
    }
}
