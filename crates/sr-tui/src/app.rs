//! Application state: the quiz session plus everything the screens need.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use sr_core::{
    AnswerOutcome, Clock, Difficulty, NextProblem, Problem, QuizConfig, QuizError, QuizSession,
    SystemClock, TimerStatus,
};

use crate::screens::ScreenId;
use crate::shared::{Popup, TextField};
use crate::ticker::Ticker;

/// Feedback on the previous answer, shown under the answer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastAnswer {
    /// The answer to this problem was right.
    Correct(Problem),
    /// The answer to this problem was wrong.
    Wrong(Problem),
}

/// Main application state for the terminal UI.
pub struct TuiApp<C: Clock = SystemClock> {
    /// The quiz engine; the only owner of round state.
    pub session: QuizSession<C>,
    /// Currently visible screen.
    pub screen: ScreenId,
    /// Difficulty selected on the setup screen.
    pub difficulty: Difficulty,
    /// Problem-count input on the setup screen.
    pub count_field: TextField,
    /// Answer input on the question screen.
    pub answer_field: TextField,
    /// Feedback on the previous answer of this round.
    pub last_answer: Option<LastAnswer>,
    /// Modal error message, if any.
    pub popup: Option<Popup>,
    /// Whether to show the help overlay.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Countdown tick schedule, armed only while a round runs.
    pub ticker: Ticker,
}

impl TuiApp {
    /// Create an app on the system clock.
    pub fn new(config: &QuizConfig) -> Self {
        Self::with_session(QuizSession::from_config(config), config)
    }
}

impl<C: Clock> TuiApp<C> {
    /// Create an app around an existing session, prefilling the setup form
    /// from `config`.
    pub fn with_session(session: QuizSession<C>, config: &QuizConfig) -> Self {
        let mut count_field = TextField::digits();
        count_field.set(&config.problem_count.to_string());
        Self {
            session,
            screen: ScreenId::Setup,
            difficulty: config.difficulty,
            count_field,
            answer_field: TextField::digits(),
            last_answer: None,
            popup: None,
            show_help: false,
            should_quit: false,
            ticker: Ticker::default(),
        }
    }

    /// Route a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.popup.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.popup = None;
            }
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }
        if key.code == KeyCode::Char('?') {
            self.show_help = true;
            return;
        }

        match self.screen {
            ScreenId::Setup => self.handle_setup_key(key),
            ScreenId::Question => self.handle_question_key(key),
            ScreenId::Summary => self.handle_summary_key(key),
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Tab
            | KeyCode::BackTab => self.difficulty = self.difficulty.toggle(),
            KeyCode::Char('e') => self.difficulty = Difficulty::Easy,
            KeyCode::Char('h') => self.difficulty = Difficulty::Hard,
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => {
                self.count_field.push_char(c);
            }
            KeyCode::Backspace => self.count_field.backspace(),
            KeyCode::Delete => self.count_field.delete_char(),
            KeyCode::Home => self.count_field.cursor_home(),
            KeyCode::End => self.count_field.cursor_end(),
            KeyCode::Enter => self.start_round(),
            _ => {}
        }
    }

    fn handle_question_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_answer(),
            KeyCode::Esc => self.abandon_round(),
            KeyCode::Char(c) => {
                self.answer_field.push_char(c);
            }
            KeyCode::Backspace => self.answer_field.backspace(),
            KeyCode::Delete => self.answer_field.delete_char(),
            KeyCode::Left => self.answer_field.cursor_left(),
            KeyCode::Right => self.answer_field.cursor_right(),
            KeyCode::Home => self.answer_field.cursor_home(),
            KeyCode::End => self.answer_field.cursor_end(),
            _ => {}
        }
    }

    fn handle_summary_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.start_round(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('s') => self.screen = ScreenId::Setup,
            _ => {}
        }
    }

    /// Start a round with the setup screen's settings.
    pub fn start_round(&mut self) {
        match self
            .session
            .start_game(self.difficulty, &self.count_field.text)
        {
            Ok(_) => {
                self.answer_field.clear();
                self.last_answer = None;
                self.screen = ScreenId::Question;
                self.ticker.arm(Instant::now());
            }
            Err(e) => {
                debug!(error = %e, "round not started");
                self.popup = Some(Popup::new(
                    "Invalid Input",
                    "Please enter a valid number of problems.",
                ));
            }
        }
    }

    /// Submit the answer field to the session.
    pub fn submit_answer(&mut self) {
        let problem = self.session.current_problem();
        match self.session.submit_answer(&self.answer_field.text) {
            Ok(AnswerOutcome::Answered { correct, next, .. }) => {
                self.answer_field.clear();
                self.last_answer = problem.map(|p| {
                    if correct {
                        LastAnswer::Correct(p)
                    } else {
                        LastAnswer::Wrong(p)
                    }
                });
                if next == NextProblem::RoundComplete {
                    self.end_round();
                }
            }
            Ok(AnswerOutcome::TimeExpired { .. }) => self.end_round(),
            Err(QuizError::InvalidAnswer(_)) => {
                self.popup = Some(Popup::new("Invalid Input", "Please enter a valid number."));
            }
            Err(e) => self.popup = Some(Popup::new("Error", &e.to_string())),
        }
    }

    /// Handle one countdown tick.
    pub fn on_tick(&mut self) {
        match self.session.tick() {
            Ok(TimerStatus::Running { .. }) => {}
            Ok(TimerStatus::Expired { .. }) => self.end_round(),
            Err(_) => self.ticker.disarm(),
        }
    }

    /// Fire the ticker if its deadline has passed, re-arming it only while
    /// the round is still running.
    pub fn tick_if_due(&mut self, now: Instant) {
        if !self.ticker.is_due(now) {
            return;
        }
        self.on_tick();
        if self.session.is_active() && self.screen == ScreenId::Question {
            self.ticker.arm(now);
        } else {
            self.ticker.disarm();
        }
    }

    fn end_round(&mut self) {
        self.ticker.disarm();
        self.answer_field.clear();
        self.screen = ScreenId::Summary;
    }

    fn abandon_round(&mut self) {
        self.session.reset();
        self.ticker.disarm();
        self.answer_field.clear();
        self.last_answer = None;
        self.screen = ScreenId::Setup;
    }
}
