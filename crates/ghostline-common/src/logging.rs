//! Unified logging system for ghostline
//!
//! Wraps `tracing-subscriber` with:
//! - single initialization point (level + destination)
//! - file output under `.ghostline/logs` with cleanup (newest 10 kept)
//! - error cause-chain formatting

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Minimum log level accepted by [`init`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    /// Parse a log level from a case-insensitive string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Some(LogLevel::Debug),
            "INFO" => Some(LogLevel::Info),
            "WARN" => Some(LogLevel::Warn),
            "ERROR" => Some(LogLevel::Error),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn as_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Logging configuration options
pub struct LogOptions {
    /// Print to stderr instead of writing a log file
    pub print: bool,
    /// Development mode keeps a stable `dev.log` filename
    pub dev: bool,
    /// Minimum log level
    pub level: LogLevel,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            print: true,
            dev: false,
            level: LogLevel::Info,
        }
    }
}

static LOG_PATH: Mutex<Option<PathBuf>> = Mutex::new(None);

/// Initialize the logging system
///
/// With `print` set, log lines go to stderr. Otherwise a log file is
/// created under `.ghostline/logs` in the current directory and old log
/// files beyond the newest 10 are removed. Calling `init` more than once
/// keeps the first subscriber; later calls only refresh the log file.
pub fn init(options: LogOptions) -> io::Result<()> {
    let max_level = options.level.as_tracing_level();

    if options.print {
        let _ = tracing_subscriber::fmt()
            .with_max_level(max_level)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init();
        return Ok(());
    }

    let log_dir = std::env::current_dir()?.join(".ghostline").join("logs");
    fs::create_dir_all(&log_dir)?;

    let filename = if options.dev {
        "dev.log".to_string()
    } else {
        format!("{}.log", chrono::Utc::now().format("%Y-%m-%dT%H%M%S"))
    };
    let path = log_dir.join(filename);
    let file = File::create(&path)?;
    cleanup(&log_dir)?;

    let _ = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    if let Ok(mut log_path) = LOG_PATH.lock() {
        *log_path = Some(path);
    }

    Ok(())
}

/// Get the current log file path, if logging to a file
pub fn file() -> Option<PathBuf> {
    LOG_PATH.lock().ok().and_then(|path| path.clone())
}

/// Remove log files beyond the newest 10
fn cleanup(log_dir: &Path) -> io::Result<()> {
    let mut log_files: Vec<_> = fs::read_dir(log_dir)?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension()? == "log" {
                let modified = fs::metadata(&path).ok()?.modified().ok()?;
                Some((path, modified))
            } else {
                None
            }
        })
        .collect();

    log_files.sort_by(|a, b| b.1.cmp(&a.1));

    for (path, _) in log_files.iter().skip(10) {
        let _ = fs::remove_file(path);
    }

    Ok(())
}

/// Format an error with its cause chain
pub fn format_error(error: &dyn std::error::Error) -> String {
    format_error_recursive(error, 0)
}

fn format_error_recursive(error: &dyn std::error::Error, depth: usize) -> String {
    const MAX_DEPTH: usize = 10;

    if depth >= MAX_DEPTH {
        return error.to_string();
    }

    let base = error.to_string();
    if let Some(source) = error.source() {
        format!(
            "{} Caused by: {}",
            base,
            format_error_recursive(source, depth + 1)
        )
    } else {
        base
    }
}
