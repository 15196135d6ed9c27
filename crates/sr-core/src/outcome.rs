//! Values reported back to the UI by session operations.

use std::time::Duration;

use serde::Serialize;

use crate::problem::{NextProblem, Problem};

/// Returned by a successful `start_game`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStart {
    /// The first problem of the round.
    pub problem: Problem,
    /// The full time budget of the round.
    pub time_limit: Duration,
}

/// Result of submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The answer was in time and has been scored.
    Answered {
        /// Whether it matched the sum.
        correct: bool,
        /// Score after this answer.
        score: u32,
        /// The following problem, or the end of the round.
        next: NextProblem,
    },
    /// The budget ran out before the answer arrived; it was not scored.
    TimeExpired {
        /// Final score.
        score: u32,
    },
}

/// Result of a timer tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerStatus {
    /// Time remains.
    Running {
        /// Whole seconds left.
        remaining_secs: u64,
    },
    /// The budget is used up and the round is over.
    Expired {
        /// Final score.
        score: u32,
        /// Time taken, equal to the time limit.
        time_taken_secs: f64,
    },
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundEnd {
    /// Every problem was answered.
    Completed,
    /// The time budget ran out.
    TimeExpired,
}

impl std::fmt::Display for RoundEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::TimeExpired => write!(f, "time expired"),
        }
    }
}

/// End-of-round report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Correct answers.
    pub score: u32,
    /// Problems in the round.
    pub problem_count: u32,
    /// Time taken, capped at the limit and rounded to hundredths.
    pub time_taken_secs: f64,
    /// Time budget of the round.
    pub time_limit_secs: u64,
    /// How the round ended.
    pub ended_by: RoundEnd,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.time_limit_secs {
            60 => write!(f, "Score within 1 minute")?,
            secs => write!(f, "Score within {secs} seconds")?,
        }
        writeln!(f, ": {}/{}", self.score, self.problem_count)?;
        write!(f, "Time Taken: {} seconds", self.time_taken_secs)
    }
}
