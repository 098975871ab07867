//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`, plus a literal
//! syntax for building context mappings.
//!
//! # Examples
//!
//! ```
//! use logstash_logger::prelude::*;
//! use logstash_logger::{context, info};
//!
//! # fn main() -> logstash_logger::core::Result<()> {
//! let logger = Logger::for_file(file!(), LoggerConfig::new());
//!
//! // Basic logging
//! info!(logger, "Server started")?;
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//!
//! // Structured context on the call
//! logger.info_with(
//!     "Received request",
//!     Extra::Context(context! { "path" => "/hello", "attempt" => 2 }),
//! )?;
//! # Ok(())
//! # }
//! ```

/// Log a message with automatic formatting.
///
/// Expands to the underlying `log` call, so the emission `Result` is the
/// macro's value.
///
/// # Examples
///
/// ```
/// # use logstash_logger::prelude::*;
/// # fn main() -> logstash_logger::core::Result<()> {
/// # let logger = Logger::new(LogContext::new(), LoggerConfig::new());
/// use logstash_logger::log;
/// log!(logger, LogLevel::Info, "Simple message")?;
/// log!(logger, LogLevel::Error, "Error code: {}", 500)?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use logstash_logger::prelude::*;
/// # fn main() -> logstash_logger::core::Result<()> {
/// # let logger = Logger::new(LogContext::new(), LoggerConfig::new());
/// use logstash_logger::info;
/// info!(logger, "Application started")?;
/// info!(logger, "Processing {} items", 100)?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Build a [`LogContext`](crate::core::LogContext) from key/value literals.
///
/// Values take anything convertible to `FieldValue`, including nested
/// `context!` mappings.
///
/// # Examples
///
/// ```
/// use logstash_logger::context;
///
/// let ctx = context! {
///     "path" => "/hello",
///     "headers" => context! { "content-type" => "application/json" },
/// };
/// assert_eq!(ctx.len(), 2);
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::core::LogContext::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut ctx = $crate::core::LogContext::new();
        $( ctx.add_field($key, $value); )+
        ctx
    }};
}
