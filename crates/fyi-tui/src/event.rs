//! Events consumed by the dashboard.
//!
//! Timers and the terminal both produce [`DashboardEvent`]s. The dashboard
//! handles them strictly one at a time.

use chrono::{DateTime, Local};
use crossterm::event::{Event, KeyEvent, KeyEventKind};

/// Discrete inputs to the dashboard state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Fast trigger fired; carries the wall-clock time captured when it fired
    FastTick(DateTime<Local>),
    /// Slow trigger fired
    SlowTick,
    /// Keystroke from the terminal
    Input(KeyEvent),
    /// Terminal resized to width x height cells
    Resize(u16, u16),
    /// Leave the dashboard regardless of key bindings.
    ///
    /// Never produced by [`from_terminal`]: in raw mode Ctrl+C arrives as a
    /// key press and goes through the [`KeyMap`](crate::keymap::KeyMap).
    /// Programs embedding the [`App`](crate::app::App) enqueue this to stop it.
    Quit,
}

impl DashboardEvent {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            DashboardEvent::FastTick(_) => "fast_tick",
            DashboardEvent::SlowTick => "slow_tick",
            DashboardEvent::Input(_) => "input",
            DashboardEvent::Resize(_, _) => "resize",
            DashboardEvent::Quit => "quit",
        }
    }
}

/// Convert a raw terminal event. Key releases, mouse and focus events are
/// dropped.
pub fn from_terminal(event: Event) -> Option<DashboardEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(DashboardEvent::Input(key)),
        Event::Resize(width, height) => Some(DashboardEvent::Resize(width, height)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn test_key_press_becomes_input() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(
            from_terminal(Event::Key(key)),
            Some(DashboardEvent::Input(key))
        );
    }

    #[test]
    fn test_key_release_is_dropped() {
        let key = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(from_terminal(Event::Key(key)), None);
    }

    #[test]
    fn test_resize_passes_dimensions() {
        assert_eq!(
            from_terminal(Event::Resize(120, 40)),
            Some(DashboardEvent::Resize(120, 40))
        );
    }

    #[test]
    fn test_focus_is_dropped() {
        assert_eq!(from_terminal(Event::FocusGained), None);
    }

    #[test]
    fn test_event_kinds() {
        assert_eq!(DashboardEvent::SlowTick.kind(), "slow_tick");
        assert_eq!(DashboardEvent::Resize(1, 1).kind(), "resize");
        assert_eq!(DashboardEvent::FastTick(Local::now()).kind(), "fast_tick");
    }
}
