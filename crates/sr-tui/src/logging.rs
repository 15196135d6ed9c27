//! Tracing subscriber setup shared by the binaries.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Where log output goes.
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// No subscriber is installed.
    Off,
    /// Standard error (line-mode commands).
    Stderr,
    /// Append to a file; the only option while the terminal UI owns the screen.
    File(PathBuf),
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` with `verbose`
/// and `warn` without.
pub fn init(target: LogTarget, verbose: bool) -> Result<(), String> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match target {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| format!("logging error: {e}")),
        LogTarget::File(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| format!("cannot open log file {}: {e}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| format!("logging error: {e}"))
        }
    }
}
