//! Metrics registry
//!
//! Defines all Prometheus metrics used in the application.

use prometheus::{Encoder, Gauge, Registry, TextEncoder};

use crate::errors::{ExporterError, Result};
use super::MetricsHandle;

/// Application metrics container
///
/// Constructed once at startup and shared as `Arc<Metrics>` between the
/// sampler (writer) and the HTTP handlers (readers). Tests create their
/// own independent instances.
pub struct Metrics {
    /// Internal Prometheus registry
    registry: Registry,

    /// Most recently observed whole-machine CPU utilization, in [0, 100]
    pub cpu_usage_percent: Gauge,
}

impl Metrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let cpu_usage_percent = Gauge::new("cpu_usage_percent", "CPU usage percentage")
            .map_err(|e| ExporterError::registry(e.to_string()))?;

        registry
            .register(Box::new(cpu_usage_percent.clone()))
            .map_err(|e| ExporterError::registry(e.to_string()))?;

        Ok(Self {
            registry,
            cpu_usage_percent,
        })
    }

    /// Export metrics in Prometheus text format
    pub fn export(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| ExporterError::encoding(e.to_string()))
    }
}

impl MetricsHandle for Metrics {
    fn set_cpu_usage(&self, value: f64) {
        self.cpu_usage_percent.set(value);
    }

    fn export(&self) -> Result<String> {
        Metrics::export(self)
    }
}
