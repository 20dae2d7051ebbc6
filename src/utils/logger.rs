//! Logger utility for application-wide logging
//!
//! A `log::Log` implementation writing every record to a log file and
//! echoing records at or above a console level to stderr, so stdout stays
//! reserved for command output.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use log::{LevelFilter, Log, Metadata, Record};

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Records up to this level go to the file
    file_level: LevelFilter,
    /// Records up to this level are echoed to stderr
    console_level: LevelFilter,
}

impl Logger {
    /// Creates a logger writing debug and above to `log_file`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file, truncated if it exists
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            file_level: LevelFilter::Debug,
            console_level: LevelFilter::Warn,
        })
    }

    /// Sets the level echoed to stderr
    pub fn with_console_level(mut self, level: LevelFilter) -> Self {
        self.console_level = level;
        self
    }

    /// Writes one line to the log file
    pub fn log(&self, message: &str) -> io::Result<()> {
        if let Some(file) = &mut *self.lock_file() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    fn lock_file(&self) -> MutexGuard<'_, Option<File>> {
        // A panic mid-write leaves the file usable
        self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn max_level(&self) -> LevelFilter {
        self.file_level.max(self.console_level)
    }

    /// Installs a logger as the global `log` backend
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    /// * `verbose` - Echo debug records to stderr instead of warnings only
    pub fn init_global_logger(log_file: &str, verbose: bool) -> io::Result<()> {
        let console_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
        let global_logger = Logger::new(log_file)?.with_console_level(console_level);
        let max_level = global_logger.max_level();

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(max_level);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = format!("[{}] {}", record.level(), record.args());
        if record.level() <= self.file_level {
            let _ = self.log(&message);
        }
        if record.level() <= self.console_level {
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        if let Some(file) = &mut *self.lock_file() {
            let _ = file.flush();
        }
    }
}
