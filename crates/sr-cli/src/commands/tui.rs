use sr_core::{Difficulty, QuizConfig};
use sr_tui::app::TuiApp;

pub fn run(difficulty: Difficulty, count: u32, seed: Option<u64>) -> Result<(), String> {
    let mut config = QuizConfig::default()
        .with_difficulty(difficulty)
        .with_problem_count(count);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    sr_tui::terminal::run(TuiApp::new(&config))
}
