//! Log event construction
//!
//! `build_event` turns one log call into one flat `LogRecord`. The merge
//! precedence, lowest to highest:
//!
//! 1. fixed fields (`@timestamp`, `@version`)
//! 2. `level` name
//! 3. global context (read fresh at call time)
//! 4. logger context (bound at construction)
//! 5. message text or payload fields
//! 6. extra context fields and/or `stackTrace`
//!
//! A colliding key takes the later value but keeps its first position.
//! Payloads may override the fixed fields; that is deliberate and not
//! special-cased.

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, Serializer};

use super::field_value::FieldValue;
use super::log_context::LogContext;
use super::log_level::LogLevel;
use super::stack_trace::TraceText;
use super::timestamp::iso8601_millis;

pub const TIMESTAMP_FIELD: &str = "@timestamp";
pub const VERSION_FIELD: &str = "@version";
pub const LEVEL_FIELD: &str = "level";
pub const MESSAGE_FIELD: &str = "message";
pub const STACK_TRACE_FIELD: &str = "stackTrace";

/// Wire schema version stamped into every record.
pub const SCHEMA_VERSION: i64 = 1;

/// First positional argument of a log call: a human-readable message or a
/// structured payload spread directly into the record.
#[derive(Debug, Clone)]
pub enum Message {
    Text(String),
    Payload(LogContext),
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<LogContext> for Message {
    fn from(payload: LogContext) -> Self {
        Message::Payload(payload)
    }
}

/// Trailing arguments of a log call.
///
/// Each legal call shape is its own variant, so no runtime type inspection
/// is needed and the ambiguous shape (an error in context position plus a
/// trailing error) cannot be expressed.
#[derive(Default)]
pub enum Extra<'a> {
    #[default]
    None,
    Context(LogContext),
    Error(&'a dyn TraceText),
    ContextError(LogContext, &'a dyn TraceText),
}

/// One flat, transient record: built, serialized, discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogRecord {
    fields: Vec<(String, FieldValue)>,
}

impl LogRecord {
    fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Insert a field; an existing key keeps its position and takes the new
    /// value.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Spread a context's fields into the record, overwriting on collision.
    pub fn merge(&mut self, context: &LogContext) {
        for (key, value) in context.fields() {
            self.insert(key.clone(), value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    /// Fields in emission order
    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for LogRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.fields.iter().map(|(k, v)| (k.as_str(), v)))
    }
}

/// Build the flat record for one log call.
///
/// Pure apart from the injected instant: no I/O, no validation, never fails.
/// Production call sites pass `Utc::now()`; tests pass a fixed instant.
pub fn build_event(
    level: LogLevel,
    message: Message,
    extra: Extra<'_>,
    global_context: &LogContext,
    logger_context: &LogContext,
    at: DateTime<Utc>,
) -> LogRecord {
    let mut record = LogRecord::new();

    record.insert(TIMESTAMP_FIELD, iso8601_millis(&at));
    record.insert(VERSION_FIELD, SCHEMA_VERSION);
    record.insert(LEVEL_FIELD, level.to_str());

    record.merge(global_context);
    record.merge(logger_context);

    match message {
        Message::Text(text) => record.insert(MESSAGE_FIELD, text),
        Message::Payload(payload) => record.merge(&payload),
    }

    match extra {
        Extra::None => {}
        Extra::Context(context) => record.merge(&context),
        Extra::Error(error) => record.insert(STACK_TRACE_FIELD, error.trace_text()),
        Extra::ContextError(context, error) => {
            record.merge(&context);
            record.insert(STACK_TRACE_FIELD, error.trace_text());
        }
    }

    record
}
