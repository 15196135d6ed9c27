//! Configuration for a quiz session.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::difficulty::Difficulty;
use crate::session::TIME_LIMIT;

/// Settings a UI starts from.
///
/// `difficulty` and `problem_count` are the initial values offered to the
/// player; the session itself receives them through `start_game`.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// RNG seed for reproducible problems. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Initial difficulty selection.
    pub difficulty: Difficulty,
    /// Initial number of problems per round.
    pub problem_count: u32,
    /// Time budget shared by all problems of a round.
    pub time_limit: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            seed: None,
            difficulty: Difficulty::Easy,
            problem_count: 5,
            time_limit: TIME_LIMIT,
        }
    }
}

impl QuizConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the initial difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the initial problem count.
    pub fn with_problem_count(mut self, count: u32) -> Self {
        self.problem_count = count;
        self
    }

    /// Set the time budget in whole seconds (at least 1).
    pub fn with_time_limit(mut self, secs: u64) -> Self {
        self.time_limit = Duration::from_secs(secs.max(1));
        self
    }

    /// Build the random-number source described by this config.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn default_config() {
        let cfg = QuizConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.difficulty, Difficulty::Easy);
        assert_eq!(cfg.problem_count, 5);
        assert_eq!(cfg.time_limit, Duration::from_secs(60));
    }

    #[test]
    fn builder_methods() {
        let cfg = QuizConfig::default()
            .with_seed(7)
            .with_difficulty(Difficulty::Hard)
            .with_problem_count(12)
            .with_time_limit(30);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.difficulty, Difficulty::Hard);
        assert_eq!(cfg.problem_count, 12);
        assert_eq!(cfg.time_limit, Duration::from_secs(30));
    }

    #[test]
    fn time_limit_clamped() {
        let cfg = QuizConfig::default().with_time_limit(0);
        assert_eq!(cfg.time_limit, Duration::from_secs(1));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = QuizConfig::default().with_seed(99);
        let mut r1 = cfg.rng();
        let mut r2 = cfg.rng();
        let b: Vec<u32> = (0..8).map(|_| r1.random_range(1..=100)).collect();
        let c: Vec<u32> = (0..8).map(|_| r2.random_range(1..=100)).collect();
        assert_eq!(b, c);
    }
}
