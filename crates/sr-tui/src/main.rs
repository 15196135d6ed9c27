//! Standalone TUI binary for Sumrush.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use sr_core::{Difficulty, QuizConfig};
use sr_tui::logging::{self, LogTarget};

#[derive(Parser)]
#[command(
    name = "sr-tui",
    about = "Timed addition quiz in the terminal",
    version
)]
struct Args {
    /// Initial difficulty (easy or hard)
    #[arg(short, long, default_value = "easy")]
    difficulty: Difficulty,

    /// Initial number of problems per round
    #[arg(short = 'n', long, default_value = "5")]
    count: u32,

    /// RNG seed for reproducible problems
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal itself is never logged to)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let target = args.log_file.map_or(LogTarget::Off, LogTarget::File);
    if let Err(e) = logging::init(target, args.verbose) {
        eprintln!("error: {e}");
        process::exit(1);
    }

    let mut config = QuizConfig::default()
        .with_difficulty(args.difficulty)
        .with_problem_count(args.count);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let app = sr_tui::app::TuiApp::new(&config);
    if let Err(e) = sr_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
