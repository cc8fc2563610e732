//! Logging bridge
//!
//! Routes all `log::info!()` etc. to stderr, and mirrors to a file when
//! FILEDECK_LOG_FILE names one. Level precedence: CLI `--log-level`,
//! then RUST_LOG, then the config file.

use std::fs::OpenOptions;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{Level, LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;

use filedeck_config::LogLevel;

struct Bridge {
    file: Option<Mutex<std::fs::File>>,
}

impl Log for Bridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{}] [{}] {}\n",
            timestamp(),
            level_str(record.level()),
            record.target(),
            record.args()
        );
        eprint!("{line}");
        if let Some(file) = &self.file {
            let mut file = file.lock();
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            let _ = file.lock().flush();
        }
    }
}

fn level_str(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN ",
        Level::Info => "INFO ",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Level named by RUST_LOG, if set and recognized
fn env_level() -> Option<LevelFilter> {
    let value = std::env::var("RUST_LOG").ok()?;
    LogLevel::parse(&value).map(Into::into)
}

/// Install the bridge. `cli_level` (from --log-level) wins over RUST_LOG,
/// which wins over `config_level`. Safe to call once; a second call is a
/// silent no-op because the global logger is already set.
pub fn init(cli_level: Option<LevelFilter>, config_level: LevelFilter) {
    let level = cli_level.or_else(env_level).unwrap_or(config_level);

    let file = std::env::var("FILEDECK_LOG_FILE").ok().and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
            .map(Mutex::new)
    });

    if log::set_boxed_logger(Box::new(Bridge { file })).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_names_use_the_shared_level_parser() {
        assert_eq!(
            LogLevel::parse("INFO").map(LevelFilter::from),
            Some(LevelFilter::Info)
        );
        assert_eq!(
            LogLevel::parse(" trace ").map(LevelFilter::from),
            Some(LevelFilter::Trace)
        );
        assert_eq!(LogLevel::parse("loud").map(LevelFilter::from), None);
    }
}
