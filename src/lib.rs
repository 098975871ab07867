//! # Logstash Logger
//!
//! A lightweight structured event logger emitting logstash-style records in
//! JSON or YAML.
//!
//! ## Features
//!
//! - **Flat structured records**: one log call becomes one flat field mapping
//!   with standardized metadata (`@timestamp`, `@version`, `level`)
//! - **Deterministic context merge**: global, per-logger, and per-call fields
//!   merge under a fixed precedence order
//! - **Two wire formats**: single-line JSON or `---`-prefixed YAML documents
//! - **Live configuration**: threshold, format, global context, and write
//!   sink are read fresh on every call through a shared handle
//!
//! ## Example
//!
//! ```
//! use logstash_logger::prelude::*;
//!
//! # fn main() -> logstash_logger::core::Result<()> {
//! let config = LoggerConfig::new();
//! config.set_global_field("application", "my-application");
//!
//! let logger = Logger::for_file(file!(), config.clone());
//! logger.info("Hello World")?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        build_event, Extra, FieldValue, LogContext, LogFormat, LogLevel, LogRecord, Logger,
        LoggerConfig, LoggerConfigBuilder, LoggerError, Message, Result, TraceText, Traced,
        WriteFn,
    };
}

pub use crate::core::{
    build_event, Extra, FieldValue, LogContext, LogFormat, LogLevel, LogRecord, Logger,
    LoggerConfig, LoggerConfigBuilder, LoggerError, Message, Result, TraceText, Traced, WriteFn,
};
