use std::io::{self, Write};
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

/// Logger writing timestamped records to stderr, leaving stdout for the converted output
struct StderrLogger {
    level: LevelFilter,
    stderr: Mutex<io::Stderr>,
}

impl StderrLogger {
    fn new(level: LevelFilter) -> Self {
        StderrLogger {
            level,
            stderr: Mutex::new(io::stderr()),
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut stderr) = self.stderr.lock() {
                let _ = writeln!(
                    stderr,
                    "[{}] [{}] {}",
                    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut stderr) = self.stderr.lock() {
            let _ = stderr.flush();
        }
    }
}

/// Initialize the stderr logger at `level`
pub fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(StderrLogger::new(level)))
        .map(|()| log::set_max_level(level))
}
