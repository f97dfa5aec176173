use chrono::{DateTime, Local};
use std::collections::{HashSet, VecDeque};

const MAX_LOG_SIZE: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == tag)
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    /// Parses the `[LEVEL] message` lines produced by the log capture layer.
    /// Lines without a recognized tag are treated as info.
    fn parse(line: String) -> Self {
        let tagged = line
            .strip_prefix('[')
            .and_then(|rest| rest.split_once("] "))
            .and_then(|(tag, message)| LogLevel::from_tag(tag).map(|level| (level, message)));

        let (level, message) = match tagged {
            Some((level, message)) => (level, message.to_string()),
            None => (LogLevel::Info, line),
        };

        Self {
            timestamp: Local::now(),
            level,
            message,
        }
    }

    pub fn format_timestamp(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

pub struct LogManager {
    logs: VecDeque<LogEntry>,
    visible_levels: HashSet<LogLevel>,
}

impl LogManager {
    pub fn new() -> Self {
        Self {
            logs: VecDeque::with_capacity(MAX_LOG_SIZE),
            visible_levels: [LogLevel::Info, LogLevel::Warn, LogLevel::Error]
                .into_iter()
                .collect(),
        }
    }

    pub fn push(&mut self, message: String) {
        if self.logs.len() >= MAX_LOG_SIZE {
            self.logs.pop_front();
        }
        self.logs.push_back(LogEntry::parse(message));
    }

    pub fn extend(&mut self, messages: Vec<String>) {
        for message in messages {
            self.push(message);
        }
    }

    pub fn all_logs(&self) -> impl Iterator<Item = &LogEntry> {
        self.logs.iter()
    }

    pub fn filtered_logs_reversed(&self) -> impl Iterator<Item = &LogEntry> {
        self.logs
            .iter()
            .rev()
            .filter(|entry| self.visible_levels.contains(&entry.level))
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.logs.iter().filter(|entry| entry.level == level).count()
    }

    pub fn is_level_visible(&self, level: LogLevel) -> bool {
        self.visible_levels.contains(&level)
    }

    pub fn set_level_visible(&mut self, level: LogLevel, visible: bool) {
        if visible {
            self.visible_levels.insert(level);
        } else {
            self.visible_levels.remove(&level);
        }
    }

    pub fn clear(&mut self) {
        self.logs.clear();
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
