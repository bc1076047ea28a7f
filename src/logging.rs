#![cfg(feature = "std")]

//! Stderr logger for the `log` facade, filtered by `BATTLEGRID_LOG`.

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "BATTLEGRID_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Initialize logging with a level taken from `BATTLEGRID_LOG`.
/// Defaults to `info` if the variable is not set or invalid. Output goes to
/// stderr so it never mixes with rendered boards or JSON on stdout.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
