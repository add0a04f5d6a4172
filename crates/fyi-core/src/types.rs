//! Shared type definitions used across FYI crates.

use serde::{Deserialize, Serialize};

/// Optional data panels of the dashboard.
///
/// The clock is always shown. Each enabled capability adds a sample that
/// must be present before the dashboard leaves the loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// Sample and show local CPU utilization
    pub metrics: bool,
    /// Fetch and show current weather
    pub weather: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}

impl Capabilities {
    /// Clock, CPU and weather.
    pub const fn all() -> Self {
        Self {
            metrics: true,
            weather: true,
        }
    }

    /// Clock only.
    pub const fn clock_only() -> Self {
        Self {
            metrics: false,
            weather: false,
        }
    }

    /// Returns a copy with weather switched off.
    pub fn without_weather(self) -> Self {
        Self {
            weather: false,
            ..self
        }
    }

    /// Returns a copy with metrics switched off.
    pub fn without_metrics(self) -> Self {
        Self {
            metrics: false,
            ..self
        }
    }
}
