//! Stderr logger for the binaries.
//!
//! Stdout belongs to the game: the interactive board and the `sim` JSON
//! summary are both read from it, so every log record is written to stderr
//! instead. Lines look like `WARN  solo_battleship::placement: ...`.

#![cfg(feature = "std")]

use std::env;
use std::io::{self, Write};

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level (`off`, `error` ... `trace`).
pub const LOG_ENV: &str = "SOLO_BATTLESHIP_LOG";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // A closed stderr must not take the game down with it.
        let _ = writeln!(io::stderr().lock(), "{}", format_line(record));
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

fn format_line(record: &Record) -> String {
    format!("{:<5} {}: {}", record.level(), record.target(), record.args())
}

/// Level named by `value`, case-insensitive and trimmed. Unset or
/// unrecognised values fall back to `warn`.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the stderr logger at the level named by [`LOG_ENV`].
///
/// Calling it again after a logger is installed does nothing.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
