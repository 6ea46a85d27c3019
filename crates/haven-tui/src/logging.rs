//! Structured logger with component/field context.
//!
//! The interactive runtime owns the alternate screen, so by default lines are
//! appended to a file rather than written to stderr.

use std::cell::RefCell;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a log level string (case-insensitive, defaults to Info).
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().trim() {
            "trace" => Self::Trace,
            "debug" => Self::Debug,
            "info" => Self::Info,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    /// Returns true if a message at `msg_level` passes this filter level.
    pub fn should_log(self, msg_level: LogLevel) -> bool {
        msg_level >= self
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Console,
    Json,
}

impl LogFormat {
    /// Parse a format string (defaults to Console).
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().trim() {
            "json" => Self::Json,
            _ => Self::Console,
        }
    }
}

/// Where formatted lines go.
#[derive(Debug, Clone)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
    Discard,
    Memory(Rc<RefCell<Vec<String>>>),
}

impl LogSink {
    /// Sink for a configured path: empty disables logging, `-` means stderr.
    #[must_use]
    pub fn from_path_setting(value: &str) -> Self {
        match value.trim() {
            "" => Self::Discard,
            "-" => Self::Stderr,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub sink: LogSink,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Console,
            sink: LogSink::Discard,
        }
    }
}

/// A structured logger with component/field context.
#[derive(Debug, Clone)]
pub struct Logger {
    level: LogLevel,
    format: LogFormat,
    sink: LogSink,
    fields: Vec<(String, String)>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(&LoggingConfig::default())
    }
}

impl Logger {
    pub fn new(cfg: &LoggingConfig) -> Self {
        Self {
            level: cfg.level,
            format: cfg.format,
            sink: cfg.sink.clone(),
            fields: Vec::new(),
        }
    }

    /// Logger that drops everything.
    #[must_use]
    pub fn discard() -> Self {
        Self::default()
    }

    /// Logger writing into a shared buffer, plus the buffer.
    #[must_use]
    pub fn memory(level: LogLevel) -> (Self, Rc<RefCell<Vec<String>>>) {
        let buffer = Rc::new(RefCell::new(Vec::new()));
        let logger = Self::new(&LoggingConfig {
            level,
            format: LogFormat::Console,
            sink: LogSink::Memory(Rc::clone(&buffer)),
        });
        (logger, buffer)
    }

    /// Create a child logger with an additional field.
    pub fn with_field(&self, key: &str, value: &str) -> Self {
        let mut child = self.clone();
        child.fields.push((key.to_string(), value.to_string()));
        child
    }

    /// Create a child logger for a named component.
    pub fn component(&self, name: &str) -> Self {
        self.with_field("component", name)
    }

    pub fn log(&self, level: LogLevel, msg: &str) {
        self.log_with_fields(level, msg, &[]);
    }

    pub fn log_with_fields(&self, level: LogLevel, msg: &str, extra: &[(&str, &str)]) {
        if !self.level.should_log(level) {
            return;
        }
        if matches!(self.sink, LogSink::Discard) {
            return;
        }
        let line = self.format_line(Utc::now(), level, msg, extra);
        match &self.sink {
            LogSink::Discard => {}
            LogSink::Stderr => {
                let _ = writeln!(std::io::stderr().lock(), "{line}");
            }
            LogSink::File(path) => {
                if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                    let _ = writeln!(file, "{line}");
                }
            }
            LogSink::Memory(buffer) => buffer.borrow_mut().push(line),
        }
    }

    /// Render one line without writing it.
    pub fn format_line(
        &self,
        at: DateTime<Utc>,
        level: LogLevel,
        msg: &str,
        extra: &[(&str, &str)],
    ) -> String {
        let fields = self
            .fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .chain(extra.iter().copied());
        match self.format {
            LogFormat::Console => {
                let mut line = format!("{} {level} ", at.format("%H:%M:%S"));
                for (k, v) in fields {
                    line.push_str(&format!("{k}={v} "));
                }
                line.push_str(msg);
                line
            }
            LogFormat::Json => {
                let mut object = serde_json::Map::new();
                object.insert("time".to_owned(), at.to_rfc3339().into());
                object.insert("level".to_owned(), level.to_string().into());
                for (k, v) in fields {
                    object.insert(k.to_owned(), v.into());
                }
                object.insert("message".to_owned(), msg.into());
                serde_json::Value::Object(object).to_string()
            }
        }
    }

    pub fn debug(&self, msg: &str) {
        self.log(LogLevel::Debug, msg);
    }

    pub fn info(&self, msg: &str) {
        self.log(LogLevel::Info, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.log(LogLevel::Warn, msg);
    }

    pub fn error(&self, msg: &str) {
        self.log(LogLevel::Error, msg);
    }

    pub fn info_with(&self, msg: &str, fields: &[(&str, &str)]) {
        self.log_with_fields(LogLevel::Info, msg, fields);
    }

    pub fn debug_with(&self, msg: &str, fields: &[(&str, &str)]) {
        self.log_with_fields(LogLevel::Debug, msg, fields);
    }

    pub fn warn_with(&self, msg: &str, fields: &[(&str, &str)]) {
        self.log_with_fields(LogLevel::Warn, msg, fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        match Utc.with_ymd_and_hms(2026, 3, 1, 9, 5, 7) {
            chrono::LocalResult::Single(value) => value,
            _ => panic!("fixed timestamp should be valid"),
        }
    }

    #[test]
    fn level_parse_defaults_to_info() {
        assert_eq!(LogLevel::parse("WARNING"), LogLevel::Warn);
        assert_eq!(LogLevel::parse(" debug "), LogLevel::Debug);
        assert_eq!(LogLevel::parse("verbose"), LogLevel::Info);
        assert!(LogLevel::Info.should_log(LogLevel::Error));
        assert!(!LogLevel::Info.should_log(LogLevel::Debug));
    }

    #[test]
    fn console_line_carries_fields() {
        let logger = Logger::discard().component("vault");
        let line = logger.format_line(at(), LogLevel::Info, "unlock refused", &[("required", "4")]);
        assert_eq!(line, "09:05:07 INFO component=vault required=4 unlock refused");
    }

    #[test]
    fn json_line_is_one_object() {
        let logger = Logger::new(&LoggingConfig {
            format: LogFormat::Json,
            ..LoggingConfig::default()
        })
        .component("feed");
        let line = logger.format_line(at(), LogLevel::Warn, "say \"hi\"", &[]);
        let value: serde_json::Value = match serde_json::from_str(&line) {
            Ok(value) => value,
            Err(err) => panic!("json line should parse: {err}"),
        };
        assert_eq!(value["level"], "WARN");
        assert_eq!(value["component"], "feed");
        assert_eq!(value["message"], "say \"hi\"");
    }

    #[test]
    fn memory_sink_filters_by_level() {
        let (logger, buffer) = Logger::memory(LogLevel::Info);
        logger.debug("hidden");
        logger.info_with("tab selected", &[("tab", "chats")]);
        let lines = buffer.borrow();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("tab=chats tab selected"));
    }

    #[test]
    fn file_sink_appends() {
        let dir = match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(err) => panic!("tempdir: {err}"),
        };
        let path = dir.path().join("haven.log");
        let logger = Logger::new(&LoggingConfig {
            sink: LogSink::File(path.clone()),
            ..LoggingConfig::default()
        });
        logger.info("one");
        logger.info("two");
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn sink_from_path_setting() {
        assert!(matches!(LogSink::from_path_setting(""), LogSink::Discard));
        assert!(matches!(LogSink::from_path_setting("-"), LogSink::Stderr));
        assert!(matches!(
            LogSink::from_path_setting("/tmp/x.log"),
            LogSink::File(_)
        ));
    }
}
