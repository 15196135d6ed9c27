//! Quiz session engine for Sumrush.
//!
//! A round asks a fixed number of randomly generated addition problems
//! against a shared time budget. [`QuizSession`] owns all round state and is
//! driven by a UI through three calls: [`QuizSession::start_game`],
//! [`QuizSession::submit_answer`] and [`QuizSession::tick`]. The clock and
//! the random-number source are injected so rounds can be replayed exactly.

pub mod clock;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod outcome;
pub mod problem;
pub mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::QuizConfig;
pub use difficulty::Difficulty;
pub use error::{QuizError, QuizResult};
pub use outcome::{AnswerOutcome, RoundEnd, RoundStart, Summary, TimerStatus};
pub use problem::{NextProblem, Problem};
pub use session::{QuizSession, SessionStatus, TIME_LIMIT};
