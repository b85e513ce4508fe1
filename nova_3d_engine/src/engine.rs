/// Nova3D Engine - global logger holder
///
/// Transforms, cameras and scenes are plain values owned by the caller;
/// the only process-wide state is the logger the `engine_*!` macros write to.
/// It lives in a `OnceLock<RwLock<..>>` so it can be swapped at runtime.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger_lock() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::new())))
}

// ===== PUBLIC API =====

/// Engine-wide services.
///
/// # Example
///
/// ```no_run
/// use nova_3d_engine::nova3d::Engine;
/// use nova_3d_engine::nova3d::log::{DefaultLogger, LogSeverity};
///
/// Engine::set_logger(DefaultLogger::with_min_severity(LogSeverity::Trace));
/// Engine::log(LogSeverity::Info, "app", "started".to_string());
/// Engine::reset_logger();
/// ```
pub struct Engine;

impl Engine {
    /// Replace the global logger
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nova_3d_engine::nova3d::Engine;
    /// use nova_3d_engine::nova3d::log::{Logger, LogEntry};
    ///
    /// struct Silent;
    ///
    /// impl Logger for Silent {
    ///     fn log(&self, _entry: &LogEntry) {}
    /// }
    ///
    /// Engine::set_logger(Silent);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(DefaultLogger::new());
        }
    }

    /// Log without file:line information
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    ///
    /// # Arguments
    ///
    /// * `severity` - Log severity level
    /// * `source` - Source module (e.g., "nova3d::Scene")
    /// * `message` - Log message
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log with file:line information (for ERROR logs)
    ///
    /// Used by the engine_error! macro to include source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
