use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// One activity record, kept as the raw JSON object it was read from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LogEntry {
    fields: Map<String, Value>,
}

impl LogEntry {
    pub fn new(fields: Map<String, Value>) -> Self {
        LogEntry { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// `timestamp` as a string, or empty when absent or not a string.
    pub fn timestamp(&self) -> &str {
        self.fields
            .get("timestamp")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    pub fn event_type(&self) -> EventType {
        match self.fields.get("type") {
            None | Some(Value::Null) => EventType::Missing,
            Some(Value::String(s)) => EventType::Named(s.clone()),
            Some(Value::Bool(true)) => EventType::Named("True".to_string()),
            Some(Value::Bool(false)) => EventType::Named("False".to_string()),
            Some(other) => EventType::Named(other.to_string()),
        }
    }

    /// The raw URL: `url` when non-empty, else `context.url`.
    pub fn raw_url(&self) -> Option<&str> {
        fn non_empty(v: &Value) -> Option<&str> {
            v.as_str().filter(|s| !s.is_empty())
        }

        if let Some(url) = self.fields.get("url").and_then(non_empty) {
            return Some(url);
        }

        self.fields
            .get("context")
            .and_then(Value::as_object)
            .and_then(|ctx| ctx.get("url"))
            .and_then(non_empty)
    }
}

impl From<Map<String, Value>> for LogEntry {
    fn from(fields: Map<String, Value>) -> Self {
        LogEntry::new(fields)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    Missing,
    Named(String),
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Missing => f.write_str("None"),
            EventType::Named(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(value: Value) -> LogEntry {
        match value {
            Value::Object(map) => LogEntry::new(map),
            _ => panic!("test entry must be an object"),
        }
    }

    #[test]
    fn timestamp_defaults_to_empty() {
        assert_eq!(entry(json!({})).timestamp(), "");
        assert_eq!(entry(json!({"timestamp": 17})).timestamp(), "");
        assert_eq!(
            entry(json!({"timestamp": "2026-02-23T10:00:00Z"})).timestamp(),
            "2026-02-23T10:00:00Z"
        );
    }

    #[test]
    fn event_type_keys() {
        assert_eq!(entry(json!({})).event_type(), EventType::Missing);
        assert_eq!(entry(json!({"type": null})).event_type(), EventType::Missing);
        assert_eq!(
            entry(json!({"type": "CLICK"})).event_type(),
            EventType::Named("CLICK".into())
        );
        assert_eq!(
            entry(json!({"type": 3})).event_type(),
            EventType::Named("3".into())
        );
        assert_eq!(
            entry(json!({"type": true})).event_type(),
            EventType::Named("True".into())
        );
        assert_eq!(EventType::Missing.to_string(), "None");
    }

    #[test]
    fn url_prefers_top_level_field() {
        let e = entry(json!({"url": "https://a.test/x", "context": {"url": "https://b.test/y"}}));
        assert_eq!(e.raw_url(), Some("https://a.test/x"));
    }

    #[test]
    fn url_falls_back_to_context() {
        let e = entry(json!({"url": "", "context": {"url": "https://b.test/y"}}));
        assert_eq!(e.raw_url(), Some("https://b.test/y"));

        let e = entry(json!({"context": {"url": "https://b.test/y"}}));
        assert_eq!(e.raw_url(), Some("https://b.test/y"));
    }

    #[test]
    fn url_unresolvable() {
        assert_eq!(entry(json!({})).raw_url(), None);
        assert_eq!(entry(json!({"context": {}})).raw_url(), None);
        assert_eq!(entry(json!({"context": "nope"})).raw_url(), None);
        assert_eq!(entry(json!({"url": null, "context": {"url": ""}})).raw_url(), None);
    }

    #[test]
    fn serializes_unchanged() {
        let raw = r#"{"type":"CLICK","timestamp":"2026-02-23T10:00:00Z","details":{"id":null}}"#;
        let map: Map<String, Value> = serde_json::from_str(raw).unwrap();
        let e = LogEntry::new(map);
        assert_eq!(serde_json::to_string(&e).unwrap(), raw);
    }

    #[test]
    fn big_integers_keep_their_digits() {
        let raw = r#"{"id":123456789012345678901234567890,"ratio":0.10000000000000000001}"#;
        let map: Map<String, Value> = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_string(&LogEntry::new(map)).unwrap(), raw);
    }
}
