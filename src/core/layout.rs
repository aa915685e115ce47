//! Keyboard layout abstraction
//!
//! Key pickers show a list of key names backed by a parallel list of key
//! codes; selecting index `i` selects `key_codes(..)[i]`. Which keys exist,
//! and what they are called, depends on the active keyboard layout.
//!
//! The layout is always passed in explicitly (as a generic parameter or a
//! reference) so that tables and parsers never depend on process-wide
//! state. [`StandardLayout`] provides US-English names.

use crate::core::keycodes;
use crate::core::types::Key;

/// Source of key codes and key names for one keyboard layout
pub trait KeyboardLayout {
    /// Key codes in picker order.
    ///
    /// Shortcut pickers (`for_shortcut = true`) start with the null key
    /// and include the side-agnostic modifiers. Single key pickers list
    /// concrete keys only.
    fn key_codes(&self, for_shortcut: bool) -> Vec<Key>;

    /// Display name for a key, if the layout knows it.
    fn key_name(&self, key: Key) -> Option<String>;

    /// Looks a key up by display name (case-insensitive).
    fn key_from_name(&self, name: &str) -> Option<Key> {
        let wanted = name.trim();
        self.key_codes(true)
            .into_iter()
            .find(|key| {
                self.key_name(*key)
                    .is_some_and(|n| n.eq_ignore_ascii_case(wanted))
            })
    }

    /// Display names in picker order, parallel to [`KeyboardLayout::key_codes`].
    fn key_names(&self, for_shortcut: bool) -> Vec<String> {
        self.key_codes(for_shortcut)
            .into_iter()
            .map(|key| self.key_name(key).unwrap_or_else(|| key.to_string()))
            .collect()
    }

    /// Resolves a picker index into a key.
    ///
    /// Returns `None` for negative or out-of-range indices.
    fn key_at(&self, index: i32, for_shortcut: bool) -> Option<Key> {
        let index = usize::try_from(index).ok()?;
        self.key_codes(for_shortcut).get(index).copied()
    }
}

/// US-English layout with Windows virtual-key codes
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardLayout;

impl StandardLayout {
    pub fn new() -> Self {
        Self
    }
}

impl KeyboardLayout for StandardLayout {
    fn key_codes(&self, for_shortcut: bool) -> Vec<Key> {
        let mut codes = Vec::new();
        if for_shortcut {
            codes.push(Key::NONE);
        }
        codes.extend(
            keycodes::standard_key_codes(for_shortcut)
                .into_iter()
                .map(Key),
        );
        codes
    }

    fn key_name(&self, key: Key) -> Option<String> {
        keycodes::standard_key_name(key.code())
    }

    fn key_from_name(&self, name: &str) -> Option<Key> {
        let wanted = name.trim();

        // Aliases accepted in files and on the command line
        let alias = match wanted.to_ascii_lowercase().as_str() {
            "control" => Some("Ctrl"),
            "super" | "windows" => Some("Win"),
            "return" => Some("Enter"),
            "escape" => Some("Esc"),
            "del" => Some("Delete"),
            _ => None,
        };
        let wanted = alias.unwrap_or(wanted);

        self.key_codes(true)
            .into_iter()
            .filter(|key| !key.is_none())
            .find(|key| {
                self.key_name(*key)
                    .is_some_and(|n| n.eq_ignore_ascii_case(wanted))
            })
    }
}
