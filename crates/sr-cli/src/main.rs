//! CLI frontend for Sumrush, the timed addition quiz.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use sr_core::Difficulty;
use sr_tui::logging::{self, LogTarget};

#[derive(Parser)]
#[command(
    name = "sumrush",
    about = "Sumrush: answer as many addition problems as you can in a minute",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play on the command line, one answer per line
    Play {
        /// Difficulty: easy (1-10) or hard (1-100)
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,

        /// Number of problems per round
        #[arg(short = 'n', long, default_value = "5", allow_hyphen_values = true)]
        count: String,

        /// RNG seed for reproducible problems
        #[arg(long)]
        seed: Option<u64>,

        /// Time budget per round in seconds
        #[arg(long, default_value = "60")]
        time_limit: u64,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Exit after one round instead of offering a replay
        #[arg(long)]
        no_replay: bool,
    },

    /// Launch the full-screen terminal UI
    Tui {
        /// Initial difficulty
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,

        /// Initial number of problems per round
        #[arg(short = 'n', long, default_value = "5")]
        count: u32,

        /// RNG seed for reproducible problems
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the difficulty levels and their operand ranges
    Ranges,
}

fn main() {
    let cli = Cli::parse();

    // The terminal UI owns the screen, so it only ever logs to a file.
    let target = match (&cli.command, cli.log_file) {
        (_, Some(path)) => LogTarget::File(path),
        (Commands::Tui { .. }, None) => LogTarget::Off,
        (_, None) => LogTarget::Stderr,
    };

    let result = logging::init(target, cli.verbose).and_then(|()| match cli.command {
        Commands::Play {
            difficulty,
            count,
            seed,
            time_limit,
            json,
            no_replay,
        } => commands::play::run(&commands::play::PlayOptions {
            difficulty,
            count,
            seed,
            time_limit,
            json,
            replay: !no_replay,
        }),
        Commands::Tui {
            difficulty,
            count,
            seed,
        } => commands::tui::run(difficulty, count, seed),
        Commands::Ranges => commands::ranges::run(),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
