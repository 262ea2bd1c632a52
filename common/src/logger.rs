use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::Local;
use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    fn label(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            other => Err(format!("Unknown log level: {}", other)),
        }
    }
}

pub struct Logger {
    prefix: Option<String>,
    max_level: LogLevel,
}

impl Logger {
    fn new(prefix: Option<String>, max_level: LogLevel) -> Self {
        Self { prefix, max_level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.max_level
    }

    pub fn format_line(&self, level: LogLevel, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        if let Some(ref prefix) = self.prefix {
            format!(
                "[{}][{}][{}][{}:{}] {}",
                timestamp,
                level.label(),
                prefix,
                file_name,
                line,
                message
            )
        } else {
            format!(
                "[{}][{}][{}:{}] {}",
                timestamp,
                level.label(),
                file_name,
                line,
                message
            )
        }
    }

    pub fn log(&self, level: LogLevel, file: &str, line: u32, message: &str) {
        if !self.enabled(level) {
            return;
        }
        // stdout belongs to the rendered board
        let _ = writeln!(
            std::io::stderr().lock(),
            "{}",
            self.format_line(level, file, line, message)
        );
    }
}

pub fn init_logger(prefix: Option<String>, max_level: LogLevel) {
    LOGGER.get_or_init(|| Logger::new(prefix, max_level));
}

/// Messages logged before `init_logger` are dropped, which keeps library
/// code quiet inside unit tests.
pub fn log(level: LogLevel, file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Debug, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Error, file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_threshold() {
        let logger = Logger::new(None, LogLevel::Info);
        assert!(logger.enabled(LogLevel::Error));
        assert!(logger.enabled(LogLevel::Info));
        assert!(!logger.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_format_line_strips_directories() {
        let logger = Logger::new(Some("Swift Falcon".to_string()), LogLevel::Debug);
        let line = logger.format_line(LogLevel::Debug, "common/src/games/session.rs", 42, "hello");
        assert!(line.ends_with("[DEBUG][Swift Falcon][session.rs:42] hello"));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("Debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!(" error ".parse::<LogLevel>(), Ok(LogLevel::Error));
        assert!("verbose".parse::<LogLevel>().is_err());
    }
}
