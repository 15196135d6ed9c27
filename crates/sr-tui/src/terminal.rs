//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::Instant;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use sr_core::Clock;

use crate::app::TuiApp;
use crate::screens;

/// Launch the TUI application.
pub fn run<C: Clock>(mut app: TuiApp<C>) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop.
///
/// While a round runs, input is polled with a timeout up to the next tick
/// deadline; otherwise the loop blocks on input.
fn run_loop<C: Clock>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp<C>,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| screens::draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        let has_event = match app.ticker.time_until(Instant::now()) {
            Some(timeout) => event::poll(timeout).map_err(|e| format!("event error: {e}"))?,
            None => true,
        };
        if has_event {
            let event = event::read().map_err(|e| format!("event error: {e}"))?;
            handle_event(app, event);
        }

        app.tick_if_due(Instant::now());
    }
}

/// Handle a crossterm event. Resizes only need the redraw at the top of the loop.
fn handle_event<C: Clock>(app: &mut TuiApp<C>, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
        _ => {}
    }
}
