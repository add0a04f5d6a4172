//! Key bindings for the dashboard.
//!
//! A [`KeyMap`] is built once and handed to the dashboard, which uses it to
//! turn keystrokes into [`Action`]s and to render the help footer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Something a key can ask the dashboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the dashboard
    Quit,
}

/// A single key chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// A plain character with no modifiers.
    pub const fn char(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A character pressed with Ctrl.
    pub const fn ctrl(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Whether `event` is this chord. Shift is ignored for characters since
    /// it is already reflected in the character itself.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        self.code == event.code && self.modifiers == modifiers
    }
}

/// Keys bound to one action, plus how the help footer describes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub keys: Vec<KeyPress>,
    pub help_key: String,
    pub help_desc: String,
    pub action: Action,
}

impl KeyBinding {
    pub fn new(
        keys: Vec<KeyPress>,
        help_key: impl Into<String>,
        help_desc: impl Into<String>,
        action: Action,
    ) -> Self {
        Self {
            keys,
            help_key: help_key.into(),
            help_desc: help_desc.into(),
            action,
        }
    }
}

/// Immutable set of key bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: Vec<KeyBinding>,
}

impl Default for KeyMap {
    /// `q` or Ctrl+C quits.
    fn default() -> Self {
        Self::new(vec![KeyBinding::new(
            vec![KeyPress::char('q'), KeyPress::ctrl('c')],
            "q",
            "quit",
            Action::Quit,
        )])
    }
}

impl KeyMap {
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        Self { bindings }
    }

    /// The action bound to `event`, if any. Earlier bindings win.
    pub fn action_for(&self, event: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|binding| binding.keys.iter().any(|key| key.matches(event)))
            .map(|binding| binding.action)
    }

    /// One-line help text, e.g. `q quit`.
    pub fn short_help(&self) -> String {
        self.bindings
            .iter()
            .map(|binding| format!("{} {}", binding.help_key, binding.help_desc))
            .collect::<Vec<_>>()
            .join(" • ")
    }
}
