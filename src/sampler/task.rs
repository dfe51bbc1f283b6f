//! Sampling loop
//!
//! Runs detached for the lifetime of the process; every error is caught
//! locally and retried after a fixed backoff.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::errors::Result;
use crate::metrics::MetricsHandle;
use super::CpuProbe;

/// Delay between successful samples
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Delay before retrying after a failed sample
pub const FAILURE_BACKOFF: Duration = Duration::from_secs(5);

/// Background CPU sampler.
///
/// Owns the OS probe and a handle to the shared metrics state. The gauge
/// is only ever written here; a failed probe leaves it untouched.
pub struct CpuSampler {
    probe: Box<dyn CpuProbe>,
    metrics: Arc<dyn MetricsHandle>,
}

impl CpuSampler {
    pub fn new(probe: Box<dyn CpuProbe>, metrics: Arc<dyn MetricsHandle>) -> Self {
        Self { probe, metrics }
    }

    /// Perform a single sampling iteration.
    ///
    /// On success the gauge is overwritten with the new value; on failure
    /// the error is logged and the previous value is left in place.
    pub fn sample_once(&mut self) -> Result<f64> {
        match self.probe.cpu_percent() {
            Ok(value) => {
                self.metrics.set_cpu_usage(value);
                info!("CPU usage updated: {:.1}%", value);
                Ok(value)
            }
            Err(e) => {
                warn!("CPU sampling failed: {}", e);
                Err(e)
            }
        }
    }

    /// Run the sampling loop forever.
    pub async fn run(mut self) {
        loop {
            match self.sample_once() {
                Ok(_) => sleep(SAMPLE_INTERVAL).await,
                Err(_) => sleep(FAILURE_BACKOFF).await,
            }
        }
    }

    /// Spawn the sampling loop as a detached background task.
    ///
    /// Should be called once during startup. The task runs until the
    /// process exits.
    pub fn spawn(self) {
        tokio::spawn(self.run());
    }
}
