//! Display state of the dashboard.

use chrono::{DateTime, Local};
use fyi_core::Capabilities;
use fyi_sources::{MetricsSample, WeatherSample};

/// Which screen the renderer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// A required sample is still missing
    Loading,
    /// Every required sample is present
    Ready,
}

/// Latest value of everything the dashboard shows.
///
/// Each sample is replaced wholesale; there is no history.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub current_time: DateTime<Local>,
    pub cpu_utilization: Option<MetricsSample>,
    pub weather: Option<WeatherSample>,
    /// 0 until the first resize: let the backend pick the size
    pub viewport_width: u16,
    pub viewport_height: u16,
}

impl DashboardState {
    /// Fresh state at `now` with no samples.
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            current_time: now,
            cpu_utilization: None,
            weather: None,
            viewport_width: 0,
            viewport_height: 0,
        }
    }

    /// Loading while any sample required by `capabilities` is absent.
    pub fn view_state(&self, capabilities: Capabilities) -> ViewState {
        let metrics_missing = capabilities.metrics && self.cpu_utilization.is_none();
        let weather_missing = capabilities.weather && self.weather.is_none();
        if metrics_missing || weather_missing {
            ViewState::Loading
        } else {
            ViewState::Ready
        }
    }
}
