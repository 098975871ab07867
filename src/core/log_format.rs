//! Wire format dispatch
//!
//! A record renders to exactly one of two logstash-style wire formats.
//! Format selection never changes record content, only its rendering.

use std::fmt;
use std::str::FromStr;

use super::error::Result;
use super::event::LogRecord;

/// Output serialization strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line JSON object, newline-terminated
    ///
    /// Example: `{"@timestamp":"2018-01-02T03:04:05.678Z","@version":1,"level":"INFO","message":"Hello World"}`
    #[default]
    Json,

    /// YAML document preceded by a `---` document-start marker,
    /// newline-terminated
    Yaml,
}

impl LogFormat {
    /// Render a record to its wire text, ready to hand to the write sink in
    /// one call.
    pub fn render(&self, record: &LogRecord) -> Result<String> {
        match self {
            LogFormat::Json => {
                let mut text = serde_json::to_string(record)?;
                text.push('\n');
                Ok(text)
            }
            LogFormat::Yaml => {
                let body = serde_yaml_ng::to_string(record)?;
                Ok(format!("---\n{}", body))
            }
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogFormat::Json => "json",
            LogFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "yaml" | "yml" => Ok(LogFormat::Yaml),
            _ => Err(format!("Invalid log format: '{}'", s)),
        }
    }
}
