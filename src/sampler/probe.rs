//! OS CPU utilization probe
//!
//! `CpuProbe` is the seam between the sampling loop and the operating
//! system, so tests can drive the loop with scripted values.

use sysinfo::System;

use crate::errors::{ExporterError, Result};

/// Source of point-in-time CPU utilization readings.
pub trait CpuProbe: Send {
    /// Whole-machine CPU utilization across all cores, in [0, 100].
    fn cpu_percent(&mut self) -> Result<f64>;
}

/// Production probe backed by sysinfo.
///
/// sysinfo computes utilization as a delta between two refreshes, so the
/// constructor performs a priming refresh; readings become meaningful
/// once `MINIMUM_CPU_UPDATE_INTERVAL` has elapsed since the previous call.
pub struct SysinfoProbe {
    system: System,
}

impl SysinfoProbe {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_cpu_usage();
        Self { system }
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuProbe for SysinfoProbe {
    fn cpu_percent(&mut self) -> Result<f64> {
        self.system.refresh_cpu_usage();

        if self.system.cpus().is_empty() {
            return Err(ExporterError::sampling(
                "no CPUs reported by the operating system",
            ));
        }

        Ok((self.system.global_cpu_usage() as f64).clamp(0.0, 100.0))
    }
}
