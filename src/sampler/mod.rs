//! CPU sampling
//!
//! A background task periodically reads whole-machine CPU utilization
//! from the operating system and writes it into the shared gauge.

mod probe;
mod task;

pub use probe::{CpuProbe, SysinfoProbe};
pub use task::{CpuSampler, FAILURE_BACKOFF, SAMPLE_INTERVAL};
