//! The logger installed into every process this library preloads into.
//! Writes to stderr since there is no console to speak of: the host is
//! an arbitrary, already-running program.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Once, OnceLock};

struct GlobalLogger;

impl Log for GlobalLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let saved_errno = errno::errno();

        let color = match record.level() {
            Level::Error => 31, // Red
            Level::Warn => 93,  // BrightYellow
            Level::Info => 34,  // Blue
            Level::Debug => 32, // Green
            Level::Trace => 90, // BrightBlack
        };

        eprintln!(
            "\u{1B}[95m[{}]\u{1B}[0m \u{1B}[{}m{}\u{1B}[37m | {}\u{1B}[0m",
            pid(),
            color,
            normalized_level(record.level()),
            record.args(),
        );

        errno::set_errno(saved_errno);
    }

    fn flush(&self) {}
}

fn normalized_level(level: Level) -> &'static str {
    match level {
        Level::Error => "ERRO",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBG",
        Level::Trace => "TRAC",
    }
}

static PID: OnceLock<u32> = OnceLock::new();

fn pid() -> u32 {
    *PID.get_or_init(std::process::id)
}

static LOGGER_INSTANCE: GlobalLogger = GlobalLogger;
static INIT: Once = Once::new();

/// Install the logger and set its level, mapping the 0-4 scale used by
/// `RUNLAND_EXEC__LOG_LEVEL` onto `log`'s five levels. Safe to call more
/// than once: a preloaded `.so` may be initialized from more than one
/// translation unit, or a re-exec'd child may run the constructor again.
pub fn init(log_level: u8) {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER_INSTANCE);
    });

    log::set_max_level(level_filter_for(log_level));
}

fn level_filter_for(log_level: u8) -> LevelFilter {
    match log_level {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_filter_mapping_matches_the_0_to_4_scale() {
        assert_eq!(level_filter_for(0), LevelFilter::Off);
        assert_eq!(level_filter_for(1), LevelFilter::Info);
        assert_eq!(level_filter_for(2), LevelFilter::Debug);
        assert_eq!(level_filter_for(3), LevelFilter::Trace);
        assert_eq!(level_filter_for(4), LevelFilter::Trace);
    }

    #[test]
    fn init_is_idempotent() {
        init(1);
        init(2);
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }

    #[test]
    fn pid_is_cached_and_stable() {
        let a = pid();
        let b = pid();
        assert_eq!(a, b);
        assert_eq!(a, std::process::id());
    }
}
