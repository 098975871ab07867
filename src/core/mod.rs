//! Core logger types and traits

pub mod config;
pub mod error;
pub mod event;
pub mod field_value;
pub mod log_context;
pub mod log_format;
pub mod log_level;
pub mod logger;
pub mod stack_trace;
pub mod timestamp;

pub use config::{LoggerConfig, LoggerConfigBuilder, WriteFn};
pub use error::{LoggerError, Result};
pub use event::{
    build_event, Extra, LogRecord, Message, LEVEL_FIELD, MESSAGE_FIELD, SCHEMA_VERSION,
    STACK_TRACE_FIELD, TIMESTAMP_FIELD, VERSION_FIELD,
};
pub use field_value::FieldValue;
pub use log_context::LogContext;
pub use log_format::LogFormat;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use stack_trace::{TraceText, Traced};
pub use timestamp::iso8601_millis;
