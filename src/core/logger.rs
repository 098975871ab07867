//! Main logger implementation
//!
//! A `Logger` pairs an immutable bound context with a shared config handle
//! and runs the per-call pipeline: admission check, record build, format
//! dispatch, one write. The pipeline itself is stateless; everything mutable
//! lives in the config handle and is read fresh on every call.

use chrono::{DateTime, Utc};
use std::path::Path;

use super::config::LoggerConfig;
use super::error::Result;
use super::event::{build_event, Extra, LogRecord, Message};
use super::log_context::LogContext;
use super::log_level::LogLevel;

/// A structured event logger bound to one context mapping.
///
/// # Example
///
/// ```
/// use logstash_logger::core::{Logger, LoggerConfig};
///
/// # fn main() -> logstash_logger::core::Result<()> {
/// let config = LoggerConfig::new();
/// let logger = Logger::for_file(file!(), config.clone());
///
/// logger.info("Hello World")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    context: LogContext,
    config: LoggerConfig,
}

/// Render a path relative to the current working directory.
///
/// Paths outside the working directory are kept verbatim rather than
/// rewritten with parent components.
fn relative_to_cwd(path: &Path) -> String {
    match std::env::current_dir() {
        Ok(cwd) => path
            .strip_prefix(&cwd)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned(),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}

impl Logger {
    /// Create a logger with a verbatim bound context.
    pub fn new(context: LogContext, config: LoggerConfig) -> Self {
        Self { context, config }
    }

    /// Create a logger identified by a source file path.
    ///
    /// The bound context gets a `file` field holding the path relative to
    /// the current working directory; `file!()` is the usual argument.
    pub fn for_file(path: impl AsRef<Path>, config: LoggerConfig) -> Self {
        Self::for_file_with_context(path, LogContext::new(), config)
    }

    /// Like [`Logger::for_file`], with extra bound fields. The extra context
    /// merges after the derived `file` field and may override it.
    pub fn for_file_with_context(
        path: impl AsRef<Path>,
        context: LogContext,
        config: LoggerConfig,
    ) -> Self {
        let mut bound = LogContext::new().with_field("file", relative_to_cwd(path.as_ref()));
        for (key, value) in context.fields() {
            bound.add_field(key.clone(), value.clone());
        }
        Self::new(bound, config)
    }

    /// The bound context
    pub fn context(&self) -> &LogContext {
        &self.context
    }

    /// The shared config handle
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Run the full pipeline for one call.
    ///
    /// A call below the configured threshold is a complete no-op: the record
    /// is never built and the write sink is never invoked. For admitted
    /// calls there is exactly one write, and any sink failure propagates to
    /// the caller.
    pub fn log_with(
        &self,
        level: LogLevel,
        message: impl Into<Message>,
        extra: Extra<'_>,
    ) -> Result<()> {
        let Some(snapshot) = self.config.admit(level) else {
            return Ok(());
        };

        let record = build_event(
            level,
            message.into(),
            extra,
            &snapshot.global_context,
            &self.context,
            Utc::now(),
        );
        let text = snapshot.format.render(&record)?;
        (snapshot.write)(&text)
    }

    /// Log a message or payload with no trailing arguments.
    pub fn log(&self, level: LogLevel, message: impl Into<Message>) -> Result<()> {
        self.log_with(level, message, Extra::None)
    }

    /// Build the record this logger would emit, without admission filtering
    /// or output. Mirrors the pipeline for diagnostics and tests; the
    /// instant is injected.
    pub fn create_event(
        &self,
        level: LogLevel,
        message: impl Into<Message>,
        extra: Extra<'_>,
        at: DateTime<Utc>,
    ) -> LogRecord {
        build_event(
            level,
            message.into(),
            extra,
            &self.config.global_context(),
            &self.context,
            at,
        )
    }

    #[inline]
    pub fn trace(&self, message: impl Into<Message>) -> Result<()> {
        self.log(LogLevel::Trace, message)
    }

    #[inline]
    pub fn debug(&self, message: impl Into<Message>) -> Result<()> {
        self.log(LogLevel::Debug, message)
    }

    #[inline]
    pub fn info(&self, message: impl Into<Message>) -> Result<()> {
        self.log(LogLevel::Info, message)
    }

    #[inline]
    pub fn warn(&self, message: impl Into<Message>) -> Result<()> {
        self.log(LogLevel::Warn, message)
    }

    #[inline]
    pub fn error(&self, message: impl Into<Message>) -> Result<()> {
        self.log(LogLevel::Error, message)
    }

    #[inline]
    pub fn trace_with(&self, message: impl Into<Message>, extra: Extra<'_>) -> Result<()> {
        self.log_with(LogLevel::Trace, message, extra)
    }

    #[inline]
    pub fn debug_with(&self, message: impl Into<Message>, extra: Extra<'_>) -> Result<()> {
        self.log_with(LogLevel::Debug, message, extra)
    }

    #[inline]
    pub fn info_with(&self, message: impl Into<Message>, extra: Extra<'_>) -> Result<()> {
        self.log_with(LogLevel::Info, message, extra)
    }

    #[inline]
    pub fn warn_with(&self, message: impl Into<Message>, extra: Extra<'_>) -> Result<()> {
        self.log_with(LogLevel::Warn, message, extra)
    }

    #[inline]
    pub fn error_with(&self, message: impl Into<Message>, extra: Extra<'_>) -> Result<()> {
        self.log_with(LogLevel::Error, message, extra)
    }
}
