use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};

/// Plain-file logger used when the CLI is asked to keep a log alongside
/// its output instead of writing to stderr.
pub struct FileLogger {
    file: Mutex<File>,
    max_level: Level,
}

impl FileLogger {
    pub fn new(path: &Path, max_level: Level) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
            max_level,
        })
    }
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let _ = writeln!(
                file,
                "{} [{}] {}: {}",
                timestamp,
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

pub fn init(path: &Path, max_level: Level) -> anyhow::Result<()> {
    let logger = FileLogger::new(path, max_level)?;
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(max_level.to_level_filter());
    Ok(())
}

/// Filter applied when logging goes to stderr via env_logger.
pub fn level_filter(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
