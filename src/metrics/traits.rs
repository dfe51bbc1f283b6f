//! MetricsHandle trait for dependency injection
//!
//! Abstracts the two operations the rest of the crate performs against
//! the metrics registry, allowing:
//! - Production use with the Prometheus-backed `Metrics` container
//! - Testing with mock implementations (e.g. a failing exporter)

use crate::errors::Result;

/// Trait over the shared metrics state.
///
/// Exactly one writer (the sampler) calls `set_cpu_usage`; any number of
/// concurrent HTTP handlers call `export`. Implementations must be
/// thread-safe (Send + Sync).
pub trait MetricsHandle: Send + Sync {
    /// Overwrite the CPU usage gauge with a freshly sampled value
    fn set_cpu_usage(&self, value: f64);

    /// Render every registered metric in Prometheus text format
    fn export(&self) -> Result<String>;
}
