//! JSON Lines span formatter.
//!
//! Each finished span becomes one flat JSON object:
//!
//! ```json
//! {
//!   "service": "bookgrid",
//!   "name": "handle_event",
//!   "trace_id": "…32 hex…",
//!   "span_id": "…16 hex…",
//!   "parent_span_id": null,
//!   "start": "2024-05-01T10:00:00.000123Z",
//!   "duration_us": 42,
//!   "fields": {"event_type": "ShowMore"},
//!   "events": [{"name": "search submitted", "time": "…", "fields": {"matches": 3}}],
//!   "status": "unset"
//! }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use opentelemetry::trace::{SpanId, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{Map, Value as JsonValue};
use std::time::SystemTime;

/// Formats spans as flat JSON records tagged with the service name.
pub struct SpanFormatter {
    service: String,
}

impl SpanFormatter {
    /// Creates a formatter taking the service name from `resource`'s
    /// `service.name` attribute.
    pub fn new(resource: &Resource) -> Self {
        let service = resource
            .get(opentelemetry::Key::from_static_str("service.name"))
            .map_or_else(|| "unknown".to_string(), |v| v.to_string());
        Self { service }
    }

    /// Formats every span of `batch` as one record, in order.
    pub fn format_batch(&self, batch: &[SpanData]) -> Vec<JsonValue> {
        batch.iter().map(|span| self.format_span(span)).collect()
    }

    fn format_span(&self, span: &SpanData) -> JsonValue {
        let parent = (span.parent_span_id != SpanId::INVALID)
            .then(|| format!("{:016x}", span.parent_span_id));
        let duration_us = span
            .end_time
            .duration_since(span.start_time)
            .map_or(0, |d| d.as_micros());

        let events: Vec<JsonValue> = span
            .events
            .iter()
            .map(|event| {
                serde_json::json!({
                    "name": event.name,
                    "time": format_time(event.timestamp),
                    "fields": format_fields(&event.attributes),
                })
            })
            .collect();

        serde_json::json!({
            "service": self.service,
            "name": span.name,
            "trace_id": format!("{:032x}", span.span_context.trace_id()),
            "span_id": format!("{:016x}", span.span_context.span_id()),
            "parent_span_id": parent,
            "start": format_time(span.start_time),
            "duration_us": duration_us,
            "fields": format_fields(&span.attributes),
            "events": events,
            "status": format_status(&span.status),
        })
    }
}

fn format_time(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn format_fields(attributes: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = attributes
        .iter()
        .map(|kv| (kv.key.to_string(), format_value(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

fn format_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::from(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => JsonValue::from(*f),
        Value::String(s) => JsonValue::from(s.as_str()),
        Value::Array(_) => JsonValue::from(value.to_string()),
    }
}

fn format_status(status: &Status) -> String {
    match status {
        Status::Unset => "unset".to_string(),
        Status::Ok => "ok".to_string(),
        Status::Error { description } => format!("error: {description}"),
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter")
            .field("service", &self.service)
            .finish()
    }
}
