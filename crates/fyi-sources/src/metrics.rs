//! Local CPU utilization sampling.
//!
//! Utilization is a rate, so a single reading needs two measurements some
//! time apart. [`SysinfoMetrics::sample`] refreshes the CPU counters,
//! blocks for the sampling window and refreshes again.

use std::thread;
use std::time::Duration;

use sysinfo::System;
use tracing::trace;

use crate::error::{Result, SourceError};

/// One CPU utilization reading, aggregated across all cores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSample {
    percent: f64,
}

impl MetricsSample {
    /// Build a sample, clamping into `0.0..=100.0`.
    ///
    /// Returns `None` for NaN.
    pub fn new(percent: f64) -> Option<Self> {
        if percent.is_nan() {
            return None;
        }
        Some(Self {
            percent: percent.clamp(0.0, 100.0),
        })
    }

    /// The 0% reading used when sampling fails.
    pub const fn zero() -> Self {
        Self { percent: 0.0 }
    }

    /// Utilization in percent.
    pub fn percent(&self) -> f64 {
        self.percent
    }
}

/// Something that can measure CPU utilization on demand.
pub trait MetricsSource {
    /// Measure utilization. May block for the source's sampling window.
    fn sample(&mut self) -> Result<MetricsSample>;
}

/// [`MetricsSource`] backed by `sysinfo`.
pub struct SysinfoMetrics {
    system: System,
    window: Duration,
}

impl SysinfoMetrics {
    /// Create a sampler that measures over `window`.
    ///
    /// The window is raised to `sysinfo`'s minimum update interval, below
    /// which the readings are meaningless.
    pub fn new(window: Duration) -> Self {
        let mut system = System::new();
        system.refresh_cpu();
        Self {
            system,
            window: window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL),
        }
    }

    /// The effective sampling window.
    pub fn window(&self) -> Duration {
        self.window
    }
}

impl MetricsSource for SysinfoMetrics {
    fn sample(&mut self) -> Result<MetricsSample> {
        self.system.refresh_cpu();
        thread::sleep(self.window);
        self.system.refresh_cpu();

        if self.system.cpus().is_empty() {
            return Err(SourceError::Metrics("no CPUs reported".to_string()));
        }

        let usage = f64::from(self.system.global_cpu_info().cpu_usage());
        trace!(usage, "cpu sampled");
        MetricsSample::new(usage)
            .ok_or_else(|| SourceError::Metrics("utilization is not a number".to_string()))
    }
}
