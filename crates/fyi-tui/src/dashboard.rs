//! Dashboard state transitions.
//!
//! [`Dashboard::update`] is the only place [`DashboardState`] changes. Each
//! call handles exactly one event, may call a data source synchronously, and
//! returns the [`Command`] the loop must carry out next.
//!
//! Failure policy differs per source:
//! - metrics: a failed sample shows as 0%
//! - weather: a failed fetch clears the weather, sending the view back to
//!   loading until the next successful fetch

use chrono::{DateTime, Local};
use fyi_core::Capabilities;
use fyi_sources::{MetricsSample, MetricsSource, WeatherSource};
use tracing::{debug, info, warn};

use crate::event::DashboardEvent;
use crate::keymap::{Action, KeyMap};
use crate::scheduler::Trigger;
use crate::state::{DashboardState, ViewState};

/// What the event loop must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Nothing
    None,
    /// Arm the trigger that just fired for another period
    Rearm(Trigger),
    /// Stop the loop
    Quit,
}

/// The dashboard model: state plus the sources and bindings it was built with.
pub struct Dashboard {
    state: DashboardState,
    keymap: KeyMap,
    metrics: Option<Box<dyn MetricsSource>>,
    weather: Option<Box<dyn WeatherSource>>,
    location: String,
}

impl Dashboard {
    /// A clock-only dashboard. Add sources with [`with_metrics`](Self::with_metrics)
    /// and [`with_weather`](Self::with_weather).
    pub fn new(now: DateTime<Local>, keymap: KeyMap) -> Self {
        Self {
            state: DashboardState::new(now),
            keymap,
            metrics: None,
            weather: None,
            location: fyi_core::config::AUTO_IP_LOCATION.to_string(),
        }
    }

    /// Enable CPU utilization.
    pub fn with_metrics(mut self, source: Box<dyn MetricsSource>) -> Self {
        self.metrics = Some(source);
        self
    }

    /// Enable weather for `location`.
    pub fn with_weather(mut self, source: Box<dyn WeatherSource>, location: impl Into<String>) -> Self {
        self.weather = Some(source);
        self.location = location.into();
        self
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// Which panels this dashboard shows, from the sources it has.
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            metrics: self.metrics.is_some(),
            weather: self.weather.is_some(),
        }
    }

    pub fn view_state(&self) -> ViewState {
        self.state.view_state(self.capabilities())
    }

    /// Apply one event.
    pub fn update(&mut self, event: DashboardEvent) -> Command {
        match event {
            DashboardEvent::Resize(width, height) => {
                self.state.viewport_width = width;
                self.state.viewport_height = height;
                debug!(width, height, "viewport resized");
                Command::None
            }
            DashboardEvent::Input(key) => match self.keymap.action_for(&key) {
                Some(Action::Quit) => {
                    info!("quit requested");
                    Command::Quit
                }
                None => Command::None,
            },
            DashboardEvent::Quit => Command::Quit,
            DashboardEvent::FastTick(at) => {
                self.on_fast_tick(at);
                Command::Rearm(Trigger::Fast)
            }
            DashboardEvent::SlowTick => {
                if self.weather.is_none() {
                    // Nothing to refresh; leave the slow trigger disarmed
                    return Command::None;
                }
                self.on_slow_tick();
                Command::Rearm(Trigger::Slow)
            }
        }
    }

    fn on_fast_tick(&mut self, at: DateTime<Local>) {
        self.state.current_time = at;

        let Some(metrics) = self.metrics.as_mut() else {
            return;
        };
        let sample = match metrics.sample() {
            Ok(sample) => sample,
            Err(e) => {
                warn!(error = %e, "cpu sampling failed, showing 0%");
                MetricsSample::zero()
            }
        };
        self.state.cpu_utilization = Some(sample);
    }

    fn on_slow_tick(&mut self) {
        let Some(weather) = self.weather.as_mut() else {
            return;
        };
        match weather.fetch_current(&self.location) {
            Ok(sample) => {
                debug!(
                    location = %sample.location_name,
                    temp_c = sample.temperature_celsius,
                    code = sample.condition_code,
                    "weather refreshed"
                );
                self.state.weather = Some(sample);
            }
            Err(e) => {
                warn!(error = %e, transient = e.is_transient(), "weather refresh failed, clearing weather");
                self.state.weather = None;
            }
        }
    }
}
