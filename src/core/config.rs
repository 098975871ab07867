//! Process-wide logger configuration
//!
//! `LoggerConfig` is a cheaply cloneable handle to shared mutable state:
//! threshold level, wire format, global context, and the write sink. Every
//! log call reads it fresh, so a mutation is visible to all existing logger
//! instances immediately; there is no snapshot-at-construction semantic.
//! Concurrent mutation is last-writer-wins.

use parking_lot::RwLock;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

use super::error::Result;
use super::field_value::FieldValue;
use super::log_context::LogContext;
use super::log_format::LogFormat;
use super::log_level::LogLevel;

/// The write sink: receives one fully rendered record text per admitted call.
///
/// Failures propagate synchronously to the caller of the log method; the
/// logger adds no retry, buffering, or suppression around them.
pub type WriteFn = Arc<dyn Fn(&str) -> Result<()> + Send + Sync>;

/// Default sink: raw bytes to standard output, no added buffering layer.
fn stdout_write() -> WriteFn {
    Arc::new(|text: &str| -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        Ok(())
    })
}

struct ConfigState {
    level: LogLevel,
    format: LogFormat,
    context: LogContext,
    write: WriteFn,
}

/// The per-call view of configuration taken under one lock acquisition,
/// produced only for admitted calls.
pub(crate) struct EmitSnapshot {
    pub format: LogFormat,
    pub global_context: LogContext,
    pub write: WriteFn,
}

/// Shared, mutation-permitting configuration handle.
///
/// Construct once with defaults at startup, clone the handle into each
/// logger, and mutate at any point; changes apply to subsequent log calls on
/// every logger holding the handle.
///
/// # Example
///
/// ```
/// use logstash_logger::core::{LoggerConfig, LogFormat, LogLevel};
///
/// let config = LoggerConfig::new();
/// config.set_level(LogLevel::Debug);
/// config.set_format(LogFormat::Yaml);
/// config.set_global_field("application", "my-application");
/// ```
#[derive(Clone)]
pub struct LoggerConfig {
    inner: Arc<RwLock<ConfigState>>,
}

impl LoggerConfig {
    /// Create a config with defaults: `Info` threshold, JSON format, empty
    /// global context, stdout sink.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ConfigState {
                level: LogLevel::default(),
                format: LogFormat::default(),
                context: LogContext::new(),
                write: stdout_write(),
            })),
        }
    }

    /// Create a builder for startup configuration
    #[must_use]
    pub fn builder() -> LoggerConfigBuilder {
        LoggerConfigBuilder::new()
    }

    pub fn level(&self) -> LogLevel {
        self.inner.read().level
    }

    pub fn set_level(&self, level: LogLevel) {
        self.inner.write().level = level;
    }

    pub fn format(&self) -> LogFormat {
        self.inner.read().format
    }

    pub fn set_format(&self, format: LogFormat) {
        self.inner.write().format = format;
    }

    /// Set one global context field, overwriting an existing key
    pub fn set_global_field<K, V>(&self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.inner.write().context.add_field(key, value);
    }

    /// Remove one global context field
    pub fn remove_global_field(&self, key: &str) {
        self.inner.write().context.remove_field(key);
    }

    /// Replace the whole global context
    pub fn set_global_context(&self, context: LogContext) {
        self.inner.write().context = context;
    }

    /// Drop all global context fields
    pub fn clear_global_context(&self) {
        self.inner.write().context.clear();
    }

    /// A clone of the current global context
    pub fn global_context(&self) -> LogContext {
        self.inner.read().context.clone()
    }

    /// Replace the write sink
    pub fn set_write(&self, write: WriteFn) {
        self.inner.write().write = write;
    }

    /// Admission check plus per-call snapshot, under one read lock.
    ///
    /// Returns `None` for a filtered call; the caller must then do nothing,
    /// not even build the record.
    pub(crate) fn admit(&self, level: LogLevel) -> Option<EmitSnapshot> {
        let state = self.inner.read();
        if !level.admits(state.level) {
            return None;
        }
        Some(EmitSnapshot {
            format: state.format,
            global_context: state.context.clone(),
            write: Arc::clone(&state.write),
        })
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.read();
        f.debug_struct("LoggerConfig")
            .field("level", &state.level)
            .field("format", &state.format)
            .field("context", &state.context)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a `LoggerConfig` with a fluent API
///
/// # Example
///
/// ```
/// use logstash_logger::core::{LoggerConfig, LogFormat, LogLevel};
///
/// let config = LoggerConfig::builder()
///     .level(LogLevel::Debug)
///     .format(LogFormat::Yaml)
///     .global_field("application", "my-application")
///     .build();
/// ```
pub struct LoggerConfigBuilder {
    level: LogLevel,
    format: LogFormat,
    context: LogContext,
    write: Option<WriteFn>,
}

impl LoggerConfigBuilder {
    pub fn new() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::default(),
            context: LogContext::new(),
            write: None,
        }
    }

    /// Set the threshold level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the wire format
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Add a global context field
    #[must_use = "builder methods return a new value"]
    pub fn global_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.context.add_field(key, value);
        self
    }

    /// Replace the whole global context
    #[must_use = "builder methods return a new value"]
    pub fn global_context(mut self, context: LogContext) -> Self {
        self.context = context;
        self
    }

    /// Set the write sink
    #[must_use = "builder methods return a new value"]
    pub fn write(mut self, write: WriteFn) -> Self {
        self.write = Some(write);
        self
    }

    /// Build the config handle
    pub fn build(self) -> LoggerConfig {
        LoggerConfig {
            inner: Arc::new(RwLock::new(ConfigState {
                level: self.level,
                format: self.format,
                context: self.context,
                write: self.write.unwrap_or_else(stdout_write),
            })),
        }
    }
}

impl Default for LoggerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
