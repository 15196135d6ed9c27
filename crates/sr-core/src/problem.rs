//! Addition problems.

use serde::Serialize;

/// A single addition problem: `left + right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Problem {
    /// First addend.
    pub left: u32,
    /// Second addend.
    pub right: u32,
}

impl Problem {
    /// Create a problem from two addends.
    pub fn new(left: u32, right: u32) -> Self {
        Self { left, right }
    }

    /// The correct answer.
    pub fn answer(self) -> u32 {
        self.left + self.right
    }

    /// The question as shown to the player.
    pub fn prompt(self) -> String {
        format!("What is {self}?")
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {}", self.left, self.right)
    }
}

/// What follows an answered problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextProblem {
    /// Another problem to display.
    Problem(Problem),
    /// Every problem of the round has been asked.
    RoundComplete,
}

impl NextProblem {
    /// The next problem, if the round continues.
    pub fn problem(self) -> Option<Problem> {
        match self {
            Self::Problem(p) => Some(p),
            Self::RoundComplete => None,
        }
    }
}
