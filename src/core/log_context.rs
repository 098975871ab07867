//! Structured logging context for key-value fields
//!
//! `LogContext` is the ordered field mapping used everywhere fields travel:
//! the per-logger bound context, the process-wide global context held by
//! `LoggerConfig`, and structured payload or context arguments on a log call.

use serde::ser::{Serialize, Serializer};

use super::field_value::FieldValue;

/// An insertion-ordered mapping of field name to value.
///
/// Inserting an existing key replaces the value but keeps the key's original
/// position, matching the merge semantics of the record builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogContext {
    fields: Vec<(String, FieldValue)>,
}

impl LogContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field, consuming and returning the context
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.add_field(key, value);
        self
    }

    /// Add a field in place. An existing key keeps its position and gets the
    /// new value.
    pub fn add_field<K, V>(&mut self, key: K, value: V)
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

    /// Remove a field by name
    pub fn remove_field(&mut self, key: &str) {
        self.fields.retain(|(k, _)| k != key);
    }

    /// Look up a field by name
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    /// All fields in insertion order
    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    pub(crate) fn into_fields(self) -> Vec<(String, FieldValue)> {
        self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

impl Serialize for LogContext {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.fields.iter().map(|(k, v)| (k.as_str(), v)))
    }
}

impl FromIterator<(String, FieldValue)> for LogContext {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        let mut context = LogContext::new();
        for (key, value) in iter {
            context.add_field(key, value);
        }
        context
    }
}
