//! Data sources for the FYI dashboard.
//!
//! - [`metrics`] - local CPU utilization via `sysinfo`
//! - [`weather`] - current conditions from the weather provider via `reqwest`
//!
//! Both sources expose a blocking trait ([`MetricsSource`],
//! [`WeatherSource`]) so the dashboard can call them from inside a state
//! transition and substitute fakes in tests.

pub mod error;
pub mod metrics;
pub mod weather;
pub mod weather_types;

pub use error::{Result, SourceError};
pub use metrics::{MetricsSample, MetricsSource, SysinfoMetrics};
pub use weather::{BlockingWeatherSource, WeatherApiClient, WeatherSample, WeatherSource};
