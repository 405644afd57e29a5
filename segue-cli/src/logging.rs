use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::OnceLock;

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

fn level_from_env(value: Option<&str>) -> LevelFilter {
    match value.map(|level| level.to_lowercase()).as_deref() {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Install the stderr logger, level taken from `RUST_LOG` (default `info`).
///
/// `quiet` caps the level at `warn` so only problems reach the terminal.
pub fn init(quiet: bool) {
    let mut level = level_from_env(std::env::var("RUST_LOG").ok().as_deref());
    if quiet {
        level = level.min(LevelFilter::Warn);
    }

    let logger_ref = LOGGER.get_or_init(|| StderrLogger { level });
    if log::set_logger(logger_ref).is_ok() {
        log::set_max_level(logger_ref.level);
    }
}
