//! Keyboard shortcuts
//!
//! Maps key presses to application actions. Bindings are part of the
//! persisted settings, so they can be edited in `settings.json`.

use std::collections::HashMap;

use iced::keyboard::{Key, Modifiers};
use serde::{Deserialize, Serialize};

/// All bindable actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Leave the onboarding page
    Continue,
    /// Switch between light and dark mode
    ToggleDarkMode,
    /// Save the session and quit
    Quit,
}

impl Action {
    /// Get all available actions
    pub fn all() -> &'static [Action] {
        &[Action::Continue, Action::ToggleDarkMode, Action::Quit]
    }
}

/// A keyboard shortcut consisting of modifiers and a key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Modifier keys (Ctrl, Alt, Shift)
    #[serde(default)]
    pub modifiers: ModifierSet,
    /// The main key
    pub key: KeyCode,
}

impl KeyBinding {
    /// Create a new keybinding
    pub fn new(key: KeyCode) -> Self {
        Self {
            modifiers: ModifierSet::default(),
            key,
        }
    }

    /// Add Ctrl modifier
    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Check if this keybinding matches the given key event
    pub fn matches(&self, key: &Key, modifiers: &Modifiers) -> bool {
        self.key.matches(key) && self.modifiers.matches(modifiers)
    }
}

/// Set of modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModifierSet {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl ModifierSet {
    /// Check if modifiers match
    pub fn matches(&self, modifiers: &Modifiers) -> bool {
        self.ctrl == modifiers.control()
            && self.alt == modifiers.alt()
            && self.shift == modifiers.shift()
    }
}

/// Supported key codes for binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    D,
    Q,
    Enter,
    Space,
}

impl KeyCode {
    /// Check if this key code matches an iced Key
    pub fn matches(&self, key: &Key) -> bool {
        match key {
            Key::Character(c) => {
                let c = c.to_lowercase();
                matches!((self, c.as_str()), (KeyCode::D, "d") | (KeyCode::Q, "q"))
            }
            Key::Named(named) => {
                use iced::keyboard::key::Named;
                matches!(
                    (self, named),
                    (KeyCode::Enter, Named::Enter) | (KeyCode::Space, Named::Space)
                )
            }
            Key::Unidentified => false,
        }
    }
}

/// The keybindings configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Map from action to keybinding
    bindings: HashMap<Action, Vec<KeyBinding>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(
            Action::Continue,
            vec![
                KeyBinding::new(KeyCode::Enter),
                KeyBinding::new(KeyCode::Space),
            ],
        );
        bindings.insert(
            Action::ToggleDarkMode,
            vec![KeyBinding::new(KeyCode::D).ctrl()],
        );
        bindings.insert(Action::Quit, vec![KeyBinding::new(KeyCode::Q).ctrl()]);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Find the action that matches the given key event
    ///
    /// Actions are checked in `Action::all()` order, so a key bound to
    /// several actions always resolves to the same one.
    pub fn find_action(&self, key: &Key, modifiers: &Modifiers) -> Option<Action> {
        Action::all().iter().copied().find(|action| {
            self.bindings
                .get(action)
                .is_some_and(|bindings| bindings.iter().any(|b| b.matches(key, modifiers)))
        })
    }
}
