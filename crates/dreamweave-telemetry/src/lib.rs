//! Logging and trace export for Dreamweave
//!
//! Logs always go to stdout through `tracing-subscriber`. Spans are
//! additionally exported over OTLP when `[telemetry.exporter]` is set.

mod metadata;

use dreamweave_config::{ExportProtocol, ExporterConfig, TelemetryConfig};
use opentelemetry::global;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{Sampler, SdkTracerProvider};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Guard that flushes and shuts down trace export on drop
pub struct TelemetryGuard {
    tracer_provider: Option<SdkTracerProvider>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.tracer_provider.take()
            && let Err(e) = provider.shutdown()
        {
            eprintln!("failed to shutdown tracer provider: {e}");
        }
    }
}

/// Initialize telemetry from configuration
///
/// `RUST_LOG` takes precedence over `telemetry.log_level`, which takes
/// precedence over `default_filter`. Returns a guard that must be held for
/// the lifetime of the application.
///
/// # Errors
///
/// Returns an error if the OTLP exporter cannot be built
pub fn init(config: Option<&TelemetryConfig>, default_filter: &str) -> anyhow::Result<TelemetryGuard> {
    let directive = filter_directive(config, default_filter);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let mut guard = TelemetryGuard { tracer_provider: None };

    match config {
        Some(telemetry_config) if telemetry_config.exporter.is_some() => {
            let tracer_provider = init_tracer(telemetry_config)?;
            let tracer = tracer_provider.tracer("dreamweave");
            let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);
            global::set_tracer_provider(tracer_provider.clone());
            guard.tracer_provider = Some(tracer_provider);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .with(otel_layer)
                .init();
        }
        _ => {
            tracing_subscriber::registry().with(filter).with(fmt_layer).init();
        }
    }

    Ok(guard)
}

fn filter_directive(config: Option<&TelemetryConfig>, default_filter: &str) -> String {
    std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(|| config.map(|c| c.log_level.clone()))
        .unwrap_or_else(|| default_filter.to_owned())
}

fn ratio_sampler(sampling_rate: f64) -> Sampler {
    if sampling_rate >= 1.0 {
        Sampler::AlwaysOn
    } else if sampling_rate <= 0.0 {
        Sampler::AlwaysOff
    } else {
        Sampler::TraceIdRatioBased(sampling_rate)
    }
}

fn init_tracer(config: &TelemetryConfig) -> anyhow::Result<SdkTracerProvider> {
    let exporter_config = config
        .exporter
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("no trace exporter configured"))?;

    let exporter = build_span_exporter(exporter_config)?;

    let provider = SdkTracerProvider::builder()
        .with_resource(metadata::build_resource(config))
        .with_sampler(Sampler::ParentBased(Box::new(ratio_sampler(config.sampling_rate))))
        .with_batch_exporter(exporter)
        .build();

    Ok(provider)
}

fn build_span_exporter(config: &ExporterConfig) -> anyhow::Result<opentelemetry_otlp::SpanExporter> {
    use opentelemetry_otlp::SpanExporter;

    let exporter = match config.protocol {
        ExportProtocol::Grpc => SpanExporter::builder()
            .with_tonic()
            .with_endpoint(config.endpoint.as_str())
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build gRPC span exporter: {e}"))?,
        ExportProtocol::HttpProto => SpanExporter::builder()
            .with_http()
            .with_endpoint(config.endpoint.as_str())
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build HTTP span exporter: {e}"))?,
    };

    Ok(exporter)
}
