use std::collections::HashMap;

use serde::Deserialize;
use url::Url;

/// Telemetry configuration
///
/// Logging is always on; traces are exported over OTLP only when an
/// exporter is configured.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Service name reported with every span
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// Default log filter, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Additional resource attributes
    #[serde(default)]
    pub resource_attributes: HashMap<String, String>,
    /// Fraction of traces to sample (0.0 to 1.0)
    #[serde(default = "default_sampling_rate")]
    pub sampling_rate: f64,
    /// OTLP trace exporter
    #[serde(default)]
    pub exporter: Option<ExporterConfig>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: default_log_level(),
            resource_attributes: HashMap::new(),
            sampling_rate: default_sampling_rate(),
            exporter: None,
        }
    }
}

/// OTLP exporter configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    /// OTLP endpoint URL
    pub endpoint: Url,
    /// Export protocol
    #[serde(default)]
    pub protocol: ExportProtocol,
}

/// OTLP export protocol
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportProtocol {
    /// gRPC (default)
    #[default]
    Grpc,
    /// HTTP/protobuf
    HttpProto,
}

fn default_service_name() -> String {
    "dreamweave".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[allow(clippy::missing_const_for_fn)]
fn default_sampling_rate() -> f64 {
    1.0
}
