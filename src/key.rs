//! Type-safe key bindings with attached help text.
//!
//! A [`Binding`] groups the key codes that trigger one logical action together
//! with the short help shown to the user. Components expose their bindings
//! through the [`KeyMap`] trait so help views can be generated from them.
//!
//! ```rust
//! use bubbletea_actionlist::key::Binding;
//! use crossterm::event::{KeyCode, KeyEvent};
//!
//! let confirm = Binding::new(vec![KeyCode::Enter]).with_help("enter", "confirm");
//! assert!(confirm.matches(&KeyEvent::from(KeyCode::Enter)));
//! assert_eq!(confirm.help().key, "enter");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyEvent};

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label, e.g. `"↑"` or `"tab"`.
    pub key: String,
    /// Short description, e.g. `"up"`.
    pub desc: String,
}

/// A set of key codes bound to a single action.
///
/// Matching only looks at the key code, so `BackTab` matches whether or not
/// the terminal also reports the shift modifier.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyCode>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given key codes.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: Help::default(),
            enabled: true,
        }
    }

    /// Sets the help label and description.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns a copy with the binding disabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Enables or disables the binding in place.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the binding is currently active.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// The key codes that trigger this binding.
    pub fn keys(&self) -> &[KeyCode] {
        &self.keys
    }

    /// The binding's help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns true if the binding is enabled and the event's code is one of its keys.
    pub fn matches(&self, key_event: &KeyEvent) -> bool {
        self.matches_code(key_event.code)
    }

    /// Same as [`Binding::matches`], for a bubbletea-rs key message.
    pub fn matches_msg(&self, key_msg: &KeyMsg) -> bool {
        self.matches_code(key_msg.key)
    }

    fn matches_code(&self, code: KeyCode) -> bool {
        self.enabled && self.keys.contains(&code)
    }
}

/// Implemented by components to publish their bindings for help views.
pub trait KeyMap {
    /// Bindings for the single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings grouped into columns for the expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_matches_any_listed_code() {
        let binding = Binding::new(vec![KeyCode::Tab, KeyCode::Right]);
        assert!(binding.matches(&KeyEvent::from(KeyCode::Tab)));
        assert!(binding.matches(&KeyEvent::from(KeyCode::Right)));
        assert!(!binding.matches(&KeyEvent::from(KeyCode::Left)));
    }

    #[test]
    fn test_matches_ignores_modifiers() {
        let binding = Binding::new(vec![KeyCode::BackTab]);
        let event = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert!(binding.matches(&event));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut binding = Binding::new(vec![KeyCode::Enter]).disabled();
        assert!(!binding.enabled());
        assert!(!binding.matches(&KeyEvent::from(KeyCode::Enter)));

        binding.set_enabled(true);
        assert!(binding.matches(&KeyEvent::from(KeyCode::Enter)));
    }

    #[test]
    fn test_matches_key_msg() {
        let binding = Binding::new(vec![KeyCode::PageDown]);
        let msg = KeyMsg {
            key: KeyCode::PageDown,
            modifiers: KeyModifiers::NONE,
        };
        assert!(binding.matches_msg(&msg));
    }

    #[test]
    fn test_with_help() {
        let binding = Binding::new(vec![KeyCode::Up]).with_help("↑", "up");
        assert_eq!(
            binding.help(),
            &Help {
                key: "↑".to_string(),
                desc: "up".to_string()
            }
        );
    }
}
