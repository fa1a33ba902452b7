//! Type-safe key bindings with attached help text.
//!
//! A [`Binding`] pairs the key presses that trigger an action with the
//! short help strings shown to the user. Components group their bindings
//! in a struct implementing [`KeyMap`] so help lines can be rendered
//! generically.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code of the press.
    pub code: KeyCode,
    /// Modifier keys held during the press.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text for a binding: the keys as shown to the user plus a short
/// description of the action.
#[derive(Debug, Clone, Default)]
pub struct Help {
    /// Display form of the keys, e.g. `"p/space"`.
    pub key: String,
    /// Short action description, e.g. `"pause/resume"`.
    pub desc: String,
}

/// A key binding: one action reachable through one or more key presses.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
}

impl Binding {
    /// Creates a binding from a list of key presses.
    ///
    /// Accepts plain [`KeyCode`]s or `(KeyCode, KeyModifiers)` pairs:
    ///
    /// ```rust
    /// use bubbletea_countdown::key::Binding;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let start = Binding::new(vec![KeyCode::Char('s'), KeyCode::Enter]);
    /// let quit = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
    /// # let _ = (start, quit);
    /// ```
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
        }
    }

    /// Attaches help text to the binding.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the binding's help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Reports whether a received key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.keys
            .iter()
            .any(|press| press.code == msg.key && press.modifiers == msg.modifiers)
    }
}

/// Grouped key bindings that can describe themselves for help rendering.
pub trait KeyMap {
    /// Bindings shown in the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings shown in the expanded help view, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Renders a one-line help string, `key desc • key desc • …`, from the
/// short help of a key map.
pub fn short_help_view(keymap: &dyn KeyMap) -> String {
    keymap
        .short_help()
        .iter()
        .map(|b| format!("{} {}", b.help().key, b.help().desc))
        .collect::<Vec<_>>()
        .join(" • ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_binding_matches_any_listed_key() {
        let binding = Binding::new(vec![KeyCode::Char('p'), KeyCode::Char(' ')]);

        assert!(binding.matches(&key(KeyCode::Char('p'))));
        assert!(binding.matches(&key(KeyCode::Char(' '))));
        assert!(!binding.matches(&key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_binding_respects_modifiers() {
        let binding = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);

        assert!(!binding.matches(&key(KeyCode::Char('c'))));
        assert!(binding.matches(&KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        }));
    }

    #[test]
    fn test_help_text() {
        let binding = Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset");
        assert_eq!(binding.help().key, "r");
        assert_eq!(binding.help().desc, "reset");
    }

    #[test]
    fn test_short_help_view() {
        struct OneKey {
            reset: Binding,
        }
        impl KeyMap for OneKey {
            fn short_help(&self) -> Vec<&Binding> {
                vec![&self.reset]
            }
            fn full_help(&self) -> Vec<Vec<&Binding>> {
                vec![vec![&self.reset]]
            }
        }

        let map = OneKey {
            reset: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset"),
        };
        assert_eq!(short_help_view(&map), "r reset");
    }
}
