#![cfg(feature = "std")]

//! Stderr logging for the terminal front-end. Log lines go to stderr so they
//! never interleave with the board drawn on stdout.

use std::env;
use std::io::{self, Write};

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level (`error` through `trace`, or `off`).
pub const LOG_ENV: &str = "PIRATES_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // Game modules log as `pirates_revenge::game`; show just `game`.
        let target = record.target();
        let module = target.rsplit("::").next().unwrap_or(target);
        let mut err = io::stderr().lock();
        let _ = writeln!(err, "{:<5} [{}] {}", record.level(), module, record.args());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level setting, falling back to `info` when it is missing or unknown.
pub fn level_from(setting: Option<&str>) -> LevelFilter {
    setting
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level named by [`LOG_ENV`] and return
/// that level. Later calls leave the first logger in place.
pub fn init_logging() -> LevelFilter {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
    level
}
