//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name attached to every span record.
const SERVICE_NAME: &str = "bookgrid";

/// File name of the span log inside the data directory.
const TRACE_FILE: &str = "bookgrid-spans.jsonl";

/// Initializes the tracing subscriber with file-based span export.
///
/// Spans and their events pass an [`EnvFilter`] built from
/// `config.trace_level` (default `"info"`), then go through the
/// OpenTelemetry layer to `bookgrid-spans.jsonl` in the data directory.
///
/// Observability is optional: if the data directory cannot be created the
/// function returns without installing anything. Only the first call takes
/// effect.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let tracer = provider.tracer(SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
