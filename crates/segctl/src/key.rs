//! Key bindings for moving the selection from the keyboard.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key binding that maps one or more key combinations to a described action.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The set of key combinations that trigger this binding.
    pub keys: Vec<KeyCombination>,
    /// A human-readable description of the action.
    pub description: String,
    /// Disabled bindings never match.
    pub enabled: bool,
}

/// A single key press with optional modifier keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    /// The base key code.
    pub code: KeyCode,
    /// Modifier keys that must be held alongside the base key.
    pub modifiers: KeyModifiers,
}

impl Binding {
    /// Create a binding for several key combinations.
    pub fn with_keys(keys: Vec<KeyCombination>, description: impl Into<String>) -> Self {
        Self {
            keys,
            description: description.into(),
            enabled: true,
        }
    }

    /// Whether `event` matches any of this binding's combinations.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.enabled
            && self
                .keys
                .iter()
                .any(|k| k.code == event.code && event.modifiers.contains(k.modifiers))
    }

    /// Enable or disable this binding.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl KeyCombination {
    /// A key combination with no modifier keys.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

/// Keys a focused [`SegmentedControl`](crate::SegmentedControl) reacts to.
///
/// Digits `1`-`9` always jump straight to that segment.
#[derive(Debug, Clone)]
pub struct SegmentedKeyMap {
    /// Select the segment to the left, wrapping at the first.
    pub prev: Binding,
    /// Select the segment to the right, wrapping at the last.
    pub next: Binding,
}

impl Default for SegmentedKeyMap {
    fn default() -> Self {
        Self {
            prev: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Left),
                    KeyCombination::new(KeyCode::Char('h')),
                ],
                "previous segment",
            ),
            next: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Right),
                    KeyCombination::new(KeyCode::Char('l')),
                ],
                "next segment",
            ),
        }
    }
}
