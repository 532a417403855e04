//! # Log Sink Module / 日志接收器模块
//!
//! Every lifecycle transition of a test case is written through a `LogSink`.
//! The entry point builds one sink after logging is initialized and hands it
//! to each `TestCase`, so the runtime itself never touches global state.
//!
//! 测试用例的每一次生命周期转换都通过 `LogSink` 写出。
//! 入口点在日志初始化后构建一个接收器并将其交给每个 `TestCase`，
//! 因此运行时本身从不接触全局状态。

use std::sync::Mutex;
use tracing::Level;

/// Destination for the log lines produced by the test case runtime.
/// 测试用例运行时所产生日志行的目的地。
pub trait LogSink: Send + Sync {
    /// Writes one free-form message at the given severity.
    fn record(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.record(Level::INFO, message);
    }

    fn warn(&self, message: &str) {
        self.record(Level::WARN, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::ERROR, message);
    }
}

/// Forwards records to the process-wide `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn record(&self, level: Level, message: &str) {
        // `tracing` macros need the level as a constant.
        match level {
            Level::ERROR => tracing::error!(target: "casework::case", "{}", message),
            Level::WARN => tracing::warn!(target: "casework::case", "{}", message),
            Level::INFO => tracing::info!(target: "casework::case", "{}", message),
            Level::DEBUG => tracing::debug!(target: "casework::case", "{}", message),
            _ => tracing::trace!(target: "casework::case", "{}", message),
        }
    }
}

/// A single captured log line.
/// 一条被捕获的日志行。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
}

/// Keeps every record in memory, in the order it was written.
///
/// Useful wherever the log trail itself is the thing under inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all records written so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// Returns the records written at exactly `level`.
    pub fn at_level(&self, level: Level) -> Vec<LogRecord> {
        self.lock()
            .iter()
            .filter(|record| record.level == level)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LogRecord>> {
        // A poisoned log is still a readable log.
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for RecordingSink {
    fn record(&self, level: Level, message: &str) {
        self.lock().push(LogRecord {
            level,
            message: message.to_string(),
        });
    }
}
