//! # fyi-core
//!
//! Core types, errors, and utilities for the FYI dashboard.
//!
//! This crate provides:
//! - [`FyiError`] - Startup and configuration errors
//! - [`logging`] - Tracing setup writing JSON lines to `~/.fyi/logs/`
//! - [`config`] - YAML configuration and `.env` loading
//! - [`types`] - Shared type definitions used across FYI crates
//!
//! ## Example
//!
//! ```no_run
//! use fyi_core::{config, logging, DashboardConfig};
//!
//! fn main() -> fyi_core::Result<()> {
//!     let _guard = logging::init_logging(None, false)?;
//!     config::load_env_file(None)?;
//!     let config = DashboardConfig::load(None)?;
//!     tracing::info!(weather = config.capabilities.weather, "configuration ready");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

// Re-export main types for convenience
pub use config::{DashboardConfig, RefreshConfig, WeatherConfig};
pub use error::{FyiError, Result};
pub use logging::{LogGuard, init_logging};
pub use types::Capabilities;
