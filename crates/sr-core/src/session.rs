//! Quiz session state machine.
//!
//! `QuizSession` moves through `NotStarted → InProgress → Completed |
//! TimeExpired`. A new `start_game` call re-enters `InProgress` from any
//! state, so one instance serves every round a player plays.

use std::time::Duration;

use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::config::QuizConfig;
use crate::difficulty::Difficulty;
use crate::error::{QuizError, QuizResult};
use crate::outcome::{AnswerOutcome, RoundEnd, RoundStart, Summary, TimerStatus};
use crate::problem::{NextProblem, Problem};

/// Time budget of a round.
pub const TIME_LIMIT: Duration = Duration::from_secs(60);

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No round has been started yet.
    NotStarted,
    /// A round is running and a problem is on screen.
    InProgress,
    /// The time budget ran out.
    TimeExpired,
    /// Every problem was answered in time.
    Completed,
}

impl SessionStatus {
    /// Whether the round has ended.
    pub fn is_finished(self) -> bool {
        matches!(self, Self::TimeExpired | Self::Completed)
    }
}

/// A timed round of addition problems.
pub struct QuizSession<C: Clock = SystemClock, R: Rng = StdRng> {
    clock: C,
    rng: R,
    time_limit: Duration,
    difficulty: Difficulty,
    problem_count: u32,
    score: u32,
    problems_asked: u32,
    current: Option<Problem>,
    started_at: Duration,
    finished_after: Option<Duration>,
    status: SessionStatus,
}

impl QuizSession {
    /// Create a session on the system clock with the config's RNG and time limit.
    pub fn from_config(config: &QuizConfig) -> Self {
        Self::with_parts(SystemClock::new(), config.rng(), config.time_limit)
    }
}

impl<C: Clock, R: Rng> QuizSession<C, R> {
    /// Create a session from an explicit clock, RNG and time budget.
    pub fn with_parts(clock: C, rng: R, time_limit: Duration) -> Self {
        Self {
            clock,
            rng,
            time_limit,
            difficulty: Difficulty::Easy,
            problem_count: 0,
            score: 0,
            problems_asked: 0,
            current: None,
            started_at: Duration::ZERO,
            finished_after: None,
            status: SessionStatus::NotStarted,
        }
    }

    /// Current lifecycle state.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Whether a round is in progress.
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::InProgress
    }

    /// Correct answers so far in this round.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Problems shown so far in this round, including the current one.
    pub fn problems_asked(&self) -> u32 {
        self.problems_asked
    }

    /// Problems in this round.
    pub fn problem_count(&self) -> u32 {
        self.problem_count
    }

    /// The problem awaiting an answer, if a round is in progress.
    pub fn current_problem(&self) -> Option<Problem> {
        self.current
    }

    /// Difficulty of the current or last round.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Time budget per round.
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Whole seconds left on the countdown, without changing any state.
    pub fn remaining_secs(&self) -> u64 {
        let elapsed = match self.status {
            SessionStatus::NotStarted => Duration::ZERO,
            SessionStatus::InProgress => self.elapsed(),
            SessionStatus::TimeExpired | SessionStatus::Completed => {
                self.finished_after.unwrap_or(self.time_limit)
            }
        };
        self.time_limit.as_secs().saturating_sub(elapsed.as_secs())
    }

    /// Start a round from a raw problem-count string.
    ///
    /// On error nothing changes, so a running or finished round stays as it was.
    pub fn start_game(
        &mut self,
        difficulty: Difficulty,
        problem_count: &str,
    ) -> QuizResult<RoundStart> {
        let count = parse_problem_count(problem_count)?;
        self.start_round(difficulty, count)
    }

    /// Start a round from an already parsed problem count.
    pub fn start_round(
        &mut self,
        difficulty: Difficulty,
        problem_count: u32,
    ) -> QuizResult<RoundStart> {
        if problem_count == 0 {
            return Err(QuizError::InvalidConfiguration(
                "problem count must be at least 1".to_string(),
            ));
        }

        self.difficulty = difficulty;
        self.problem_count = problem_count;
        self.score = 0;
        self.problems_asked = 0;
        self.current = None;
        self.finished_after = None;
        self.started_at = self.clock.now();
        self.status = SessionStatus::InProgress;
        debug!(%difficulty, problem_count, "round started");

        let problem = self.draw_problem();
        Ok(RoundStart {
            problem,
            time_limit: self.time_limit,
        })
    }

    /// Submit the player's answer to the current problem.
    ///
    /// An answer arriving after the budget has run out ends the round and is
    /// not scored. An unparseable answer leaves the problem in place.
    pub fn submit_answer(&mut self, value: &str) -> QuizResult<AnswerOutcome> {
        let problem = match (self.status, self.current) {
            (SessionStatus::InProgress, Some(problem)) => problem,
            _ => return Err(QuizError::SessionNotActive),
        };

        if self.elapsed() > self.time_limit {
            self.finish(SessionStatus::TimeExpired);
            return Ok(AnswerOutcome::TimeExpired { score: self.score });
        }

        let answer = parse_answer(value)?;
        let correct = answer == i64::from(problem.answer());
        if correct {
            self.score += 1;
        }
        debug!(%problem, answer, correct, score = self.score, "answer submitted");

        let next = self.next_problem();
        Ok(AnswerOutcome::Answered {
            correct,
            score: self.score,
            next,
        })
    }

    /// Advance the countdown. Expires the round once no whole second remains.
    pub fn tick(&mut self) -> QuizResult<TimerStatus> {
        if !self.is_active() {
            return Err(QuizError::SessionNotActive);
        }

        let remaining_secs = self.remaining_secs();
        if remaining_secs > 0 {
            return Ok(TimerStatus::Running { remaining_secs });
        }

        self.finish(SessionStatus::TimeExpired);
        Ok(TimerStatus::Expired {
            score: self.score,
            time_taken_secs: self.time_taken_secs(),
        })
    }

    /// Drop any round, running or finished, and return to `NotStarted`.
    pub fn reset(&mut self) {
        if self.is_active() {
            debug!(
                score = self.score,
                problems_asked = self.problems_asked,
                "round abandoned"
            );
        }
        self.score = 0;
        self.problems_asked = 0;
        self.problem_count = 0;
        self.current = None;
        self.finished_after = None;
        self.status = SessionStatus::NotStarted;
    }

    /// End-of-round report; only available once the round has ended.
    pub fn summary(&self) -> QuizResult<Summary> {
        let ended_by = match self.status {
            SessionStatus::Completed => RoundEnd::Completed,
            SessionStatus::TimeExpired => RoundEnd::TimeExpired,
            SessionStatus::NotStarted | SessionStatus::InProgress => {
                return Err(QuizError::RoundNotFinished);
            }
        };
        Ok(Summary {
            score: self.score,
            problem_count: self.problem_count,
            time_taken_secs: self.time_taken_secs(),
            time_limit_secs: self.time_limit.as_secs(),
            ended_by,
        })
    }

    /// Draw the next problem, or complete the round when all have been asked.
    fn next_problem(&mut self) -> NextProblem {
        if self.problems_asked >= self.problem_count {
            self.finish(SessionStatus::Completed);
            return NextProblem::RoundComplete;
        }
        NextProblem::Problem(self.draw_problem())
    }

    fn draw_problem(&mut self) -> Problem {
        let range = self.difficulty.operand_range();
        let left = self.rng.random_range(range.clone());
        let right = self.rng.random_range(range);
        let problem = Problem::new(left, right);
        self.current = Some(problem);
        self.problems_asked += 1;
        problem
    }

    fn finish(&mut self, status: SessionStatus) {
        self.status = status;
        self.current = None;
        self.finished_after = Some(self.elapsed());
        info!(
            status = ?status,
            score = self.score,
            problem_count = self.problem_count,
            "round ended"
        );
    }

    fn elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.started_at)
    }

    fn time_taken_secs(&self) -> f64 {
        let taken = self
            .finished_after
            .unwrap_or_else(|| self.elapsed())
            .min(self.time_limit);
        (taken.as_secs_f64() * 100.0).round() / 100.0
    }
}

/// Parse a problem count typed by the player.
pub fn parse_problem_count(raw: &str) -> QuizResult<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QuizError::InvalidConfiguration(
            "problem count is required".to_string(),
        ));
    }
    let n: i64 = trimmed.parse().map_err(|_| {
        QuizError::InvalidConfiguration(format!("'{trimmed}' is not a whole number"))
    })?;
    if n <= 0 {
        return Err(QuizError::InvalidConfiguration(format!(
            "problem count must be at least 1, got {n}"
        )));
    }
    u32::try_from(n)
        .map_err(|_| QuizError::InvalidConfiguration(format!("problem count {n} is too large")))
}

fn parse_answer(raw: &str) -> QuizResult<i64> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|_| {
        if trimmed.is_empty() {
            QuizError::InvalidAnswer("no answer given".to_string())
        } else {
            QuizError::InvalidAnswer(format!("'{trimmed}' is not a number"))
        }
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;

    use super::*;
    use crate::clock::ManualClock;

    type TestSession = QuizSession<ManualClock, StdRng>;

    fn session(seed: u64) -> (TestSession, ManualClock) {
        let clock = ManualClock::new();
        let s = QuizSession::with_parts(clock.clone(), StdRng::seed_from_u64(seed), TIME_LIMIT);
        (s, clock)
    }

    fn answer_correctly(s: &mut TestSession) -> AnswerOutcome {
        let p = s.current_problem().unwrap();
        s.submit_answer(&p.answer().to_string()).unwrap()
    }

    fn answer_wrongly(s: &mut TestSession) -> AnswerOutcome {
        let p = s.current_problem().unwrap();
        s.submit_answer(&(p.answer() + 1).to_string()).unwrap()
    }

    fn assert_invariants(s: &TestSession) {
        assert!(s.score() <= s.problems_asked());
        assert!(s.problems_asked() <= s.problem_count());
        assert_eq!(s.current_problem().is_some(), s.is_active());
    }

    #[test]
    fn new_session_not_started() {
        let (s, _) = session(1);
        assert_eq!(s.status(), SessionStatus::NotStarted);
        assert_eq!(s.score(), 0);
        assert_eq!(s.problems_asked(), 0);
        assert!(s.current_problem().is_none());
        assert_eq!(s.remaining_secs(), 60);
    }

    #[test]
    fn start_game_returns_first_problem_and_budget() {
        let (mut s, _) = session(1);
        let start = s.start_game(Difficulty::Easy, "3").unwrap();
        assert_eq!(start.time_limit, Duration::from_secs(60));
        let range = Difficulty::Easy.operand_range();
        assert!(range.contains(&start.problem.left));
        assert!(range.contains(&start.problem.right));
        assert_eq!(s.current_problem(), Some(start.problem));
        assert_eq!(s.status(), SessionStatus::InProgress);
        assert_eq!(s.problems_asked(), 1);
        assert_eq!(s.problem_count(), 3);
    }

    #[test]
    fn start_game_trims_count() {
        let (mut s, _) = session(1);
        s.start_game(Difficulty::Hard, "  4 ").unwrap();
        assert_eq!(s.problem_count(), 4);
        assert_eq!(s.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn zero_count_rejected() {
        let (mut s, _) = session(1);
        let err = s.start_game(Difficulty::Hard, "0").unwrap_err();
        assert!(matches!(err, QuizError::InvalidConfiguration(_)));
        assert_eq!(s.status(), SessionStatus::NotStarted);
    }

    #[test]
    fn bad_counts_rejected() {
        let (mut s, _) = session(1);
        for raw in ["", "   ", "-2", "abc", "2.5", "1e3", "99999999999"] {
            let err = s.start_game(Difficulty::Easy, raw).unwrap_err();
            assert!(
                matches!(err, QuizError::InvalidConfiguration(_)),
                "{raw:?} gave {err:?}"
            );
            assert_eq!(s.status(), SessionStatus::NotStarted);
        }
    }

    #[test]
    fn failed_restart_leaves_running_round_untouched() {
        let (mut s, _) = session(1);
        s.start_game(Difficulty::Easy, "3").unwrap();
        answer_correctly(&mut s);
        let before = s.current_problem();

        assert!(s.start_game(Difficulty::Hard, "nope").is_err());
        assert_eq!(s.status(), SessionStatus::InProgress);
        assert_eq!(s.score(), 1);
        assert_eq!(s.problems_asked(), 2);
        assert_eq!(s.current_problem(), before);
        assert_eq!(s.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn easy_round_all_correct_completes() {
        let (mut s, clock) = session(3);
        s.start_game(Difficulty::Easy, "3").unwrap();

        let outcome = answer_correctly(&mut s);
        let AnswerOutcome::Answered {
            correct,
            score,
            next,
        } = outcome
        else {
            panic!("expected answered, got {outcome:?}");
        };
        assert!(correct);
        assert_eq!(score, 1);
        assert!(next.problem().is_some());
        assert_eq!(s.problems_asked(), 2);

        clock.advance(Duration::from_secs(4));
        answer_correctly(&mut s);
        clock.advance(Duration::from_millis(7_340));
        let last = answer_correctly(&mut s);
        assert_eq!(
            last,
            AnswerOutcome::Answered {
                correct: true,
                score: 3,
                next: NextProblem::RoundComplete
            }
        );

        assert_eq!(s.status(), SessionStatus::Completed);
        assert!(s.current_problem().is_none());
        let summary = s.summary().unwrap();
        assert_eq!(summary.score, 3);
        assert_eq!(summary.problem_count, 3);
        assert_eq!(summary.ended_by, RoundEnd::Completed);
        assert_eq!(summary.time_taken_secs, 11.34);
    }

    #[test]
    fn wrong_answer_advances_without_scoring() {
        let (mut s, _) = session(5);
        s.start_game(Difficulty::Hard, "2").unwrap();
        let outcome = answer_wrongly(&mut s);
        assert!(matches!(
            outcome,
            AnswerOutcome::Answered {
                correct: false,
                score: 0,
                ..
            }
        ));
        assert_eq!(s.score(), 0);
        assert_eq!(s.problems_asked(), 2);
        assert!(s.current_problem().is_some());
    }

    #[test]
    fn negative_answer_is_a_valid_wrong_answer() {
        let (mut s, _) = session(5);
        s.start_game(Difficulty::Easy, "2").unwrap();
        let outcome = s.submit_answer("-4").unwrap();
        assert!(matches!(
            outcome,
            AnswerOutcome::Answered { correct: false, .. }
        ));
        assert_eq!(s.problems_asked(), 2);
    }

    #[test]
    fn invalid_answer_keeps_problem() {
        let (mut s, _) = session(8);
        s.start_game(Difficulty::Easy, "2").unwrap();
        let problem = s.current_problem();

        for raw in ["", "abc", "4.0", "1 2"] {
            let err = s.submit_answer(raw).unwrap_err();
            assert!(matches!(err, QuizError::InvalidAnswer(_)), "{raw:?}");
        }
        assert_eq!(s.score(), 0);
        assert_eq!(s.problems_asked(), 1);
        assert_eq!(s.current_problem(), problem);
        assert!(s.is_active());

        // Still usable afterwards.
        answer_correctly(&mut s);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn answer_with_whitespace_accepted() {
        let (mut s, _) = session(8);
        s.start_game(Difficulty::Easy, "1").unwrap();
        let p = s.current_problem().unwrap();
        let outcome = s.submit_answer(&format!(" {} \n", p.answer())).unwrap();
        assert!(matches!(
            outcome,
            AnswerOutcome::Answered { correct: true, .. }
        ));
    }

    #[test]
    fn submit_before_start_is_rejected() {
        let (mut s, _) = session(1);
        assert_eq!(s.submit_answer("3"), Err(QuizError::SessionNotActive));
        assert_eq!(s.tick(), Err(QuizError::SessionNotActive));
    }

    #[test]
    fn submit_after_completion_is_rejected() {
        let (mut s, _) = session(1);
        s.start_game(Difficulty::Easy, "1").unwrap();
        answer_correctly(&mut s);
        assert_eq!(s.submit_answer("3"), Err(QuizError::SessionNotActive));
        assert_eq!(s.tick(), Err(QuizError::SessionNotActive));
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn late_answer_is_discarded() {
        let (mut s, clock) = session(2);
        s.start_game(Difficulty::Easy, "3").unwrap();
        answer_correctly(&mut s);
        clock.advance(Duration::from_secs(61));

        let p = s.current_problem().unwrap();
        let outcome = s.submit_answer(&p.answer().to_string()).unwrap();
        assert_eq!(outcome, AnswerOutcome::TimeExpired { score: 1 });
        assert_eq!(s.status(), SessionStatus::TimeExpired);
        assert_eq!(s.score(), 1);

        let summary = s.summary().unwrap();
        assert_eq!(summary.ended_by, RoundEnd::TimeExpired);
        assert_eq!(summary.time_taken_secs, 60.0);
    }

    #[test]
    fn late_garbage_answer_still_expires() {
        let (mut s, clock) = session(2);
        s.start_game(Difficulty::Easy, "3").unwrap();
        clock.advance(Duration::from_secs(75));
        assert_eq!(
            s.submit_answer("oops"),
            Ok(AnswerOutcome::TimeExpired { score: 0 })
        );
    }

    #[test]
    fn answer_exactly_at_limit_counts() {
        let (mut s, clock) = session(2);
        s.start_game(Difficulty::Easy, "2").unwrap();
        clock.advance(TIME_LIMIT);
        let outcome = answer_correctly(&mut s);
        assert!(matches!(
            outcome,
            AnswerOutcome::Answered { correct: true, .. }
        ));
    }

    #[test]
    fn tick_counts_down() {
        let (mut s, clock) = session(4);
        s.start_game(Difficulty::Easy, "5").unwrap();
        assert_eq!(s.tick(), Ok(TimerStatus::Running { remaining_secs: 60 }));

        clock.advance(Duration::from_millis(1_500));
        assert_eq!(s.tick(), Ok(TimerStatus::Running { remaining_secs: 59 }));

        clock.advance(Duration::from_secs(58));
        assert_eq!(s.tick(), Ok(TimerStatus::Running { remaining_secs: 1 }));
        assert_eq!(s.problems_asked(), 1);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn tick_expires_round() {
        let (mut s, clock) = session(4);
        s.start_game(Difficulty::Easy, "1").unwrap();
        for _ in 0..59 {
            clock.advance(Duration::from_secs(1));
            assert!(matches!(s.tick(), Ok(TimerStatus::Running { .. })));
        }
        clock.advance(Duration::from_secs(1));
        assert_eq!(
            s.tick(),
            Ok(TimerStatus::Expired {
                score: 0,
                time_taken_secs: 60.0
            })
        );
        assert_eq!(s.status(), SessionStatus::TimeExpired);
        assert_eq!(s.remaining_secs(), 0);
        assert!(s.current_problem().is_none());

        let summary = s.summary().unwrap();
        assert_eq!(summary.score, 0);
        assert_eq!(summary.time_taken_secs, 60.0);

        // The timer must not touch a finished round.
        assert_eq!(s.tick(), Err(QuizError::SessionNotActive));
    }

    #[test]
    fn summary_is_stable_after_round_ends() {
        let (mut s, clock) = session(4);
        s.start_game(Difficulty::Easy, "1").unwrap();
        clock.advance(Duration::from_millis(2_500));
        answer_correctly(&mut s);
        let first = s.summary().unwrap();
        clock.advance(Duration::from_secs(300));
        assert_eq!(s.summary().unwrap(), first);
        assert_eq!(first.time_taken_secs, 2.5);
    }

    #[test]
    fn summary_before_end_is_rejected() {
        let (mut s, _) = session(4);
        assert_eq!(s.summary(), Err(QuizError::RoundNotFinished));
        s.start_game(Difficulty::Easy, "1").unwrap();
        assert_eq!(s.summary(), Err(QuizError::RoundNotFinished));
    }

    #[test]
    fn time_taken_rounded_to_hundredths() {
        let (mut s, clock) = session(4);
        s.start_game(Difficulty::Easy, "1").unwrap();
        clock.advance(Duration::from_millis(7_891));
        answer_wrongly(&mut s);
        assert_eq!(s.summary().unwrap().time_taken_secs, 7.89);
    }

    #[test]
    fn restart_after_completion_resets_state() {
        let (mut s, clock) = session(6);
        s.start_game(Difficulty::Easy, "2").unwrap();
        answer_correctly(&mut s);
        answer_correctly(&mut s);
        assert_eq!(s.status(), SessionStatus::Completed);

        clock.advance(Duration::from_secs(100));
        let start = s.start_game(Difficulty::Hard, "4").unwrap();
        assert_eq!(s.status(), SessionStatus::InProgress);
        assert_eq!(s.score(), 0);
        assert_eq!(s.problems_asked(), 1);
        assert_eq!(s.problem_count(), 4);
        assert_eq!(s.current_problem(), Some(start.problem));
        assert_eq!(s.remaining_secs(), 60);
        assert_eq!(s.summary(), Err(QuizError::RoundNotFinished));
    }

    #[test]
    fn restart_after_expiry_resets_clock() {
        let (mut s, clock) = session(6);
        s.start_game(Difficulty::Easy, "2").unwrap();
        clock.advance(Duration::from_secs(90));
        assert!(matches!(s.tick(), Ok(TimerStatus::Expired { .. })));

        s.start_game(Difficulty::Easy, "2").unwrap();
        assert_eq!(s.tick(), Ok(TimerStatus::Running { remaining_secs: 60 }));
        assert!(matches!(
            answer_correctly(&mut s),
            AnswerOutcome::Answered { correct: true, .. }
        ));
    }

    #[test]
    fn reset_discards_running_round() {
        let (mut s, clock) = session(4);
        s.start_game(Difficulty::Easy, "3").unwrap();
        answer_correctly(&mut s);
        clock.advance(Duration::from_secs(20));
        s.reset();
        assert_eq!(s.status(), SessionStatus::NotStarted);
        assert_eq!(s.score(), 0);
        assert_eq!(s.problems_asked(), 0);
        assert!(s.current_problem().is_none());
        assert_eq!(s.remaining_secs(), 60);
        assert_eq!(s.tick(), Err(QuizError::SessionNotActive));
        assert_eq!(s.submit_answer("4"), Err(QuizError::SessionNotActive));
        assert_eq!(s.summary(), Err(QuizError::RoundNotFinished));
        assert_invariants(&s);
    }

    #[test]
    fn restart_mid_round_starts_fresh() {
        let (mut s, _) = session(6);
        s.start_game(Difficulty::Easy, "5").unwrap();
        answer_correctly(&mut s);
        s.start_game(Difficulty::Easy, "5").unwrap();
        assert_eq!(s.score(), 0);
        assert_eq!(s.problems_asked(), 1);
    }

    #[test]
    fn same_seed_same_problems() {
        let (mut a, _) = session(77);
        let (mut b, _) = session(77);
        a.start_game(Difficulty::Hard, "5").unwrap();
        b.start_game(Difficulty::Hard, "5").unwrap();
        for _ in 0..4 {
            assert_eq!(a.current_problem(), b.current_problem());
            answer_correctly(&mut a);
            answer_wrongly(&mut b);
        }
        assert_eq!(a.current_problem(), b.current_problem());
    }

    #[test]
    fn parse_problem_count_cases() {
        assert_eq!(parse_problem_count("5"), Ok(5));
        assert_eq!(parse_problem_count(" +7 "), Ok(7));
        assert!(parse_problem_count("0").is_err());
        assert!(parse_problem_count("-1").is_err());
        assert!(parse_problem_count("five").is_err());
    }

    #[test]
    fn long_round_reaches_both_range_ends() {
        for difficulty in Difficulty::ALL {
            let range = difficulty.operand_range();
            let (mut s, _) = session(3);
            s.start_round(difficulty, 5000).unwrap();
            let mut seen = std::collections::HashSet::new();
            while let Some(p) = s.current_problem() {
                seen.insert(p.left);
                seen.insert(p.right);
                s.submit_answer("0").unwrap();
            }
            assert!(
                seen.contains(range.start()),
                "{difficulty}: lowest operand never drawn"
            );
            assert!(
                seen.contains(range.end()),
                "{difficulty}: highest operand never drawn"
            );
        }
    }

    proptest! {
        #[test]
        fn operands_stay_in_range(seed in any::<u64>(), hard in any::<bool>(), count in 1u32..40) {
            let difficulty = if hard { Difficulty::Hard } else { Difficulty::Easy };
            let range = difficulty.operand_range();
            let (mut s, _) = session(seed);
            s.start_round(difficulty, count).unwrap();
            while let Some(p) = s.current_problem() {
                prop_assert!(range.contains(&p.left));
                prop_assert!(range.contains(&p.right));
                s.submit_answer("0").unwrap();
            }
            prop_assert_eq!(s.status(), SessionStatus::Completed);
            prop_assert_eq!(s.problems_asked(), count);
        }

        #[test]
        fn invariants_hold_for_any_play(
            seed in any::<u64>(),
            count in 1u32..12,
            moves in proptest::collection::vec(0u8..5, 0..40),
        ) {
            let (mut s, clock) = session(seed);
            s.start_round(Difficulty::Easy, count).unwrap();
            assert_invariants(&s);
            for m in moves {
                let before = (s.score(), s.problems_asked());
                match m {
                    0 if s.is_active() => {
                        answer_correctly(&mut s);
                        prop_assert!(s.score() == before.0 + 1 || !s.is_active());
                    }
                    1 if s.is_active() => {
                        answer_wrongly(&mut s);
                        prop_assert_eq!(s.score(), before.0);
                    }
                    2 => {
                        let _ = s.submit_answer("x");
                        prop_assert_eq!((s.score(), s.problems_asked()), before);
                    }
                    3 => clock.advance(Duration::from_secs(7)),
                    _ => {
                        let _ = s.tick();
                    }
                }
                assert_invariants(&s);
                if s.status().is_finished() {
                    let summary = s.summary().unwrap();
                    prop_assert!(summary.time_taken_secs <= 60.0);
                }
            }
        }
    }
}
