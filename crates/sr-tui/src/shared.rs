//! Shared widgets for the screens: text fields, popups, layout helpers.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// A single-line input with a cursor.
///
/// A digits-only field drops every other keystroke. That is a convenience
/// for the player; the session still validates whatever is submitted.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    /// Current text.
    pub text: String,
    /// Cursor position within the text (byte offset).
    pub cursor: usize,
    digits_only: bool,
}

impl TextField {
    /// A field that only accepts ASCII digits.
    pub fn digits() -> Self {
        Self {
            digits_only: true,
            ..Self::default()
        }
    }

    /// Replace the text and move the cursor to the end.
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    /// Empty the field.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor. Returns `false` if it was filtered out.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.digits_only && !c.is_ascii_digit() {
            return false;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the character at the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    /// Move cursor left.
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    /// Move cursor right.
    pub fn cursor_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    /// Move cursor to start.
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end.
    pub fn cursor_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Draw the field in a bordered box and place the terminal cursor.
    pub fn draw(&self, frame: &mut Frame, area: Rect, title: &str, focused: bool) {
        let color = if focused {
            Color::Green
        } else {
            Color::DarkGray
        };
        let input = Paragraph::new(self.text.as_str()).block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(input, area);

        if focused {
            // +1 for the left border
            let cursor_x = area.x + 1 + self.text[..self.cursor].chars().count() as u16;
            if cursor_x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
            }
        }
    }
}

/// A modal message box, dismissed with Enter or Esc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    /// Box title.
    pub title: String,
    /// Message body.
    pub message: String,
}

impl Popup {
    /// Create a popup.
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    /// Draw the popup centered over the whole frame.
    pub fn draw(&self, frame: &mut Frame) {
        let area = centered_rect(50, 30, frame.area());
        let text = vec![
            Line::from(self.message.as_str()),
            Line::from(""),
            Line::from(Span::styled(
                "Enter/Esc to dismiss",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let popup = Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" {} ", self.title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(Clear, area);
        frame.render_widget(popup, area);
    }
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw the keyboard help overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Setup:"),
        Line::from("  \u{2190}/\u{2192} e h   Choose difficulty"),
        Line::from("  0-9         Number of problems"),
        Line::from("  Enter       Start the round"),
        Line::from(""),
        Line::from("Question:"),
        Line::from("  0-9         Type the answer"),
        Line::from("  Enter       Submit"),
        Line::from("  Esc         Abandon the round"),
        Line::from(""),
        Line::from("Summary:"),
        Line::from("  y / n       Play again / quit"),
        Line::from("  s           Back to setup"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  Ctrl+C      Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
