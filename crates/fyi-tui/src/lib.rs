//! Terminal UI for FYI.
//!
//! This crate provides the Ratatui-based dashboard: a clock, CPU usage and
//! the local weather, refreshed by two periodic triggers.
//!
//! ## Structure
//!
//! - [`scheduler`] - fast (~1s) and slow (~60s) triggers plus the event queue
//! - [`dashboard`] - the state transitions, one event at a time
//! - [`render`] - pure mapping from state to a frame, and drawing it
//! - [`app`] - the terminal loop tying them together
//!
//! ## Hotkeys
//!
//! - `q` - Quit
//! - `Ctrl+C` - Quit

pub mod app;
pub mod dashboard;
pub mod event;
pub mod icon;
pub mod keymap;
pub mod render;
pub mod scheduler;
pub mod state;

pub use app::{App, AppResult, LoopControl};
pub use dashboard::{Command, Dashboard};
pub use event::DashboardEvent;
pub use keymap::{Action, KeyBinding, KeyMap, KeyPress};
pub use render::{DashboardFrame, Screen};
pub use scheduler::{Scheduler, Trigger};
pub use state::{DashboardState, ViewState};
