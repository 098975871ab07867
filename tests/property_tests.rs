//! Property-based tests for logstash_logger using proptest

use chrono::{TimeZone, Utc};
use logstash_logger::prelude::*;
use parking_lot::Mutex;
use proptest::prelude::*;
use std::sync::Arc;

fn emitting_levels() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]
}

fn thresholds() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Off),
    ]
}

fn field_key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,12}"
}

proptest! {
    /// The write fn runs iff rank(level) >= rank(threshold)
    #[test]
    fn prop_admission_matrix(level in emitting_levels(), threshold in thresholds()) {
        let calls = Arc::new(Mutex::new(0_u32));
        let counter = Arc::clone(&calls);
        let write: WriteFn = Arc::new(move |_: &str| {
            *counter.lock() += 1;
            Ok(())
        });
        let config = LoggerConfig::builder().level(threshold).write(write).build();
        let logger = Logger::new(LogContext::new(), config);

        logger.log(level, "probe").unwrap();

        let expected = u32::from(level as u8 >= threshold as u8);
        prop_assert_eq!(*calls.lock(), expected);
    }

    /// Level names round-trip through parsing
    #[test]
    fn prop_level_str_roundtrip(level in thresholds()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Level ordering is consistent with the numeric rank
    #[test]
    fn prop_level_ordering(level1 in thresholds(), level2 in thresholds()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
    }

    /// A colliding key always ends with the highest-precedence value:
    /// logger context beats global, payload beats both, extra beats payload
    #[test]
    fn prop_merge_precedence(key in field_key()) {
        let at = Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).single().unwrap();

        let global = LogContext::new().with_field(key.clone(), "global");
        let bound = LogContext::new().with_field(key.clone(), "logger");

        let record = build_event(
            LogLevel::Info,
            "msg".into(),
            Extra::None,
            &global,
            &bound,
            at,
        );
        prop_assert_eq!(record.get(&key).cloned(), Some(FieldValue::String("logger".into())));

        let payload = LogContext::new().with_field(key.clone(), "payload");
        let record = build_event(
            LogLevel::Info,
            payload.into(),
            Extra::None,
            &global,
            &bound,
            at,
        );
        prop_assert_eq!(record.get(&key).cloned(), Some(FieldValue::String("payload".into())));

        let payload = LogContext::new().with_field(key.clone(), "payload");
        let extra = LogContext::new().with_field(key.clone(), "extra");
        let record = build_event(
            LogLevel::Info,
            payload.into(),
            Extra::Context(extra),
            &global,
            &bound,
            at,
        );
        prop_assert_eq!(record.get(&key).cloned(), Some(FieldValue::String("extra".into())));
    }

    /// JSON output always parses back to a mapping carrying the fixed fields
    #[test]
    fn prop_json_round_trip(message in ".{0,40}", key in field_key(), value in -1000_i64..1000) {
        let at = Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).single().unwrap();
        let record = build_event(
            LogLevel::Warn,
            message.clone().into(),
            Extra::Context(LogContext::new().with_field(key.clone(), value)),
            &LogContext::new(),
            &LogContext::new(),
            at,
        );

        let text = LogFormat::Json.render(&record).unwrap();
        prop_assert!(text.ends_with('\n'));

        let parsed: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        prop_assert_eq!(&parsed["@timestamp"], "2020-06-01T12:00:00.000Z");
        prop_assert_eq!(&parsed["@version"], 1);
        prop_assert_eq!(&parsed["level"], "WARN");
        prop_assert_eq!(&parsed[&key], value);
        if key != "message" {
            prop_assert_eq!(&parsed["message"], message.as_str());
        }
    }

    /// YAML output always carries the document marker and the fixed fields
    #[test]
    fn prop_yaml_round_trip(value in -1000_i64..1000) {
        let at = Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).single().unwrap();
        let record = build_event(
            LogLevel::Error,
            "probe".into(),
            Extra::Context(LogContext::new().with_field("value", value)),
            &LogContext::new(),
            &LogContext::new(),
            at,
        );

        let text = LogFormat::Yaml.render(&record).unwrap();
        prop_assert!(text.starts_with("---\n"));
        prop_assert!(text.ends_with('\n'));

        let parsed: serde_json::Value = serde_yaml_ng::from_str(&text).unwrap();
        prop_assert_eq!(&parsed["@timestamp"], "2020-06-01T12:00:00.000Z");
        prop_assert_eq!(&parsed["@version"], 1);
        prop_assert_eq!(&parsed["level"], "ERROR");
        prop_assert_eq!(&parsed["value"], value);
    }
}
