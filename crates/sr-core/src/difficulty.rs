//! Difficulty levels and their operand ranges.

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::Serialize;

use crate::error::QuizError;

/// Selects the inclusive range both addends are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Operands in 1..=10.
    #[default]
    Easy,
    /// Operands in 1..=100.
    Hard,
}

impl Difficulty {
    /// All difficulties in display order.
    pub const ALL: [Difficulty; 2] = [Difficulty::Easy, Difficulty::Hard];

    /// The inclusive operand range for this difficulty.
    pub fn operand_range(self) -> RangeInclusive<u32> {
        match self {
            Self::Easy => 1..=10,
            Self::Hard => 1..=100,
        }
    }

    /// Human-readable label including the range, e.g. "Easy (1-10)".
    pub fn label(self) -> String {
        let range = self.operand_range();
        let name = match self {
            Self::Easy => "Easy",
            Self::Hard => "Hard",
        };
        format!("{name} ({}-{})", range.start(), range.end())
    }

    /// The other difficulty.
    pub fn toggle(self) -> Self {
        match self {
            Self::Easy => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" => Ok(Self::Easy),
            "hard" | "h" => Ok(Self::Hard),
            other => Err(QuizError::UnknownDifficulty(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges() {
        assert_eq!(Difficulty::Easy.operand_range(), 1..=10);
        assert_eq!(Difficulty::Hard.operand_range(), 1..=100);
    }

    #[test]
    fn labels() {
        assert_eq!(Difficulty::Easy.label(), "Easy (1-10)");
        assert_eq!(Difficulty::Hard.label(), "Hard (1-100)");
    }

    #[test]
    fn parse() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("h".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "medium".parse::<Difficulty>(),
            Err(QuizError::UnknownDifficulty("medium".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
        }
    }

    #[test]
    fn toggle() {
        assert_eq!(Difficulty::Easy.toggle(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.toggle(), Difficulty::Easy);
    }
}
