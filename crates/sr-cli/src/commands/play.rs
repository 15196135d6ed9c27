use std::io::{self, BufRead, Write};

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use sr_core::{
    AnswerOutcome, Clock, Difficulty, NextProblem, QuizConfig, QuizError, QuizSession, Summary,
    TimerStatus,
};
use tracing::debug;

use super::{ask, read_line, say};

/// Settings for `sumrush play`, straight from the command line.
pub struct PlayOptions {
    /// Difficulty of every round.
    pub difficulty: Difficulty,
    /// Raw problem count; the session validates it.
    pub count: String,
    /// Fixed RNG seed, for reproducible problems.
    pub seed: Option<u64>,
    /// Time budget per round in seconds.
    pub time_limit: u64,
    /// Print the summary as JSON instead of a table.
    pub json: bool,
    /// Offer another round after each summary.
    pub replay: bool,
}

pub fn run(opts: &PlayOptions) -> Result<(), String> {
    let mut config = QuizConfig::default()
        .with_difficulty(opts.difficulty)
        .with_time_limit(opts.time_limit);
    if let Some(seed) = opts.seed {
        config = config.with_seed(seed);
    }
    let mut session = QuizSession::from_config(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    play(&mut session, opts, &mut stdin.lock(), &mut stdout.lock())
}

/// Play rounds until the player declines a replay or input runs out.
fn play<C: Clock>(
    session: &mut QuizSession<C>,
    opts: &PlayOptions,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), String> {
    say(
        out,
        format!(
            "  {} Sumrush: {}, {}s on the clock",
            "Starting".bold(),
            opts.difficulty.label(),
            session.time_limit().as_secs()
        ),
    )?;
    say(out, "  Type each answer and press Enter.\n")?;

    let mut count = opts.count.clone();
    loop {
        while let Err(e) = session.start_game(opts.difficulty, &count) {
            say(out, e.to_string().yellow())?;
            ask(out, "Number of problems: ")?;
            count = read_line(input)?.ok_or("no valid problem count given")?;
        }

        if !play_round(session, input, out)? {
            debug!(
                problems_asked = session.problems_asked(),
                "input closed mid-round"
            );
            say(out, "\nRound abandoned.")?;
            return Ok(());
        }

        let summary = session.summary().map_err(|e| e.to_string())?;
        print_summary(&summary, opts.json, out)?;

        if !opts.replay {
            return Ok(());
        }
        ask(out, "\nPlay again? (y/n) ")?;
        match read_line(input)? {
            Some(reply) if is_yes(&reply) => say(out, "")?,
            _ => return Ok(()),
        }
    }
}

/// Ask problems until the round ends. Returns `false` if input ran out first.
fn play_round<C: Clock>(
    session: &mut QuizSession<C>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<bool, String> {
    loop {
        let remaining = match session.tick().map_err(|e| e.to_string())? {
            TimerStatus::Running { remaining_secs } => remaining_secs,
            TimerStatus::Expired { .. } => {
                say(out, "Time's up!".red().bold())?;
                return Ok(true);
            }
        };
        let Some(problem) = session.current_problem() else {
            return Ok(true);
        };

        ask(out, format!("[{remaining:>2}s] {} ", problem.prompt()))?;
        let Some(line) = read_line(input)? else {
            return Ok(false);
        };

        match session.submit_answer(&line) {
            Ok(AnswerOutcome::Answered {
                correct,
                score,
                next,
            }) => {
                if correct {
                    say(out, format!("{} score {score}", "Correct!".green()))?;
                } else {
                    say(
                        out,
                        format!(
                            "{} {problem} = {}, score {score}",
                            "Wrong:".red(),
                            problem.answer()
                        ),
                    )?;
                }
                if next == NextProblem::RoundComplete {
                    return Ok(true);
                }
            }
            Ok(AnswerOutcome::TimeExpired { .. }) => {
                say(out, "Time's up! That answer came too late.".red().bold())?;
                return Ok(true);
            }
            Err(e @ QuizError::InvalidAnswer(_)) => say(out, e.to_string().yellow())?,
            Err(e) => return Err(e.to_string()),
        }
    }
}

fn print_summary(summary: &Summary, json: bool, out: &mut impl Write) -> Result<(), String> {
    if json {
        let text = serde_json::to_string_pretty(summary).map_err(|e| e.to_string())?;
        return say(out, text);
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Score", "Time taken", "Ended by"]);
    table.add_row(vec![
        format!("{}/{}", summary.score, summary.problem_count),
        format!("{}s", summary.time_taken_secs),
        summary.ended_by.to_string(),
    ]);

    say(out, "")?;
    say(out, summary)?;
    say(out, table)
}

fn is_yes(reply: &str) -> bool {
    matches!(reply.to_lowercase().as_str(), "y" | "yes")
}
