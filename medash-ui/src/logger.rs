//! `log` backend writing to the browser console.
//!
//! Records go out as `[timestamp] LEVEL target - message`, errors through
//! `console.error` and warnings through `console.warn` so they stand out in
//! dev tools.

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Metadata, Record};

pub struct ConsoleLogger;
pub static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let now: DateTime<Utc> = Utc::now();
        let line = format_line(&now, record.level(), record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => gloo_console::error!(line),
            Level::Warn => gloo_console::warn!(line),
            Level::Info => gloo_console::info!(line),
            Level::Debug | Level::Trace => gloo_console::debug!(line),
        }
    }

    fn flush(&self) {}
}

fn format_line(now: &DateTime<Utc>, level: Level, target: &str, message: &str) -> String {
    format!("[{}] {} {} - {}", now.to_rfc3339(), level, target, message)
}

/// Install the console logger. Safe to call more than once; later calls
/// only change the level.
pub fn init(level: LevelFilter) {
    // Err means a logger is already installed, which is fine.
    let _ = log::set_logger(&CONSOLE_LOGGER);
    log::set_max_level(level);
}

/// Route Rust panics through the logger before the module aborts.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        log::error!("panic: {info}");
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn line_layout() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(
            format_line(&now, Level::Warn, "medash_ui::behaviors::chart", "bad payload"),
            "[2024-03-01T12:30:00+00:00] WARN medash_ui::behaviors::chart - bad payload"
        );
    }
}
