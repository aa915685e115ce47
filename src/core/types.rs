//! src/core/types.rs
//!
//! Core type definitions for key and shortcut remapping
//!
//! This module defines the value types every other module works with:
//! - `Key`: A virtual-key code
//! - `ModifierKey`: Which side(s) of a modifier a shortcut slot accepts
//! - `Shortcut`: Four modifier slots plus one action key
//! - `KeyRemap` / `ShortcutRemap`: An (original, new) remap pair
//!
//! All types are plain values (Copy where possible) and implement
//! serialization so reports can be emitted as JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::keycodes::{
    self, KeyKind, VK_CONTROL, VK_LCONTROL, VK_LMENU, VK_LSHIFT, VK_LWIN, VK_MENU, VK_NONE,
    VK_RCONTROL, VK_RMENU, VK_RSHIFT, VK_RWIN, VK_SHIFT, VK_WIN_BOTH,
};

/// A physical or virtual key, identified by its VK code
///
/// Code 0 is the null key. Use [`Key::NONE`] rather than constructing it
/// by hand.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct Key(pub u32);

impl Key {
    /// The null key
    pub const NONE: Key = Key(VK_NONE);

    /// Returns the raw VK code.
    pub fn code(self) -> u32 {
        self.0
    }

    /// Returns the side-independent kind of this key.
    pub fn kind(self) -> KeyKind {
        keycodes::key_kind(self.0)
    }

    /// Returns true for Win, Ctrl, Alt and Shift keys on any side.
    pub fn is_modifier(self) -> bool {
        self.kind().is_modifier()
    }

    /// Returns true for the null key.
    pub fn is_none(self) -> bool {
        self.0 == VK_NONE
    }
}

impl From<u32> for Key {
    fn from(code: u32) -> Self {
        Key(code)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match keycodes::standard_key_name(self.0) {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "0x{:02X}", self.0),
        }
    }
}

/// State of one modifier slot in a shortcut
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ModifierKey {
    /// The modifier is not part of the shortcut
    #[default]
    Disabled,
    /// Only the left-hand key matches
    Left,
    /// Only the right-hand key matches
    Right,
    /// Either key matches
    Both,
}

impl ModifierKey {
    /// Returns true unless the slot is `Disabled`.
    pub fn is_enabled(self) -> bool {
        self != ModifierKey::Disabled
    }
}

/// Modifier kinds in canonical shortcut order.
pub const MODIFIER_ORDER: [KeyKind; 4] =
    [KeyKind::Win, KeyKind::Ctrl, KeyKind::Alt, KeyKind::Shift];

/// A key combination: four modifier slots plus an action key
///
/// Equality compares all four slots and the action key, so `LCtrl+A` and
/// `Ctrl+A` are different shortcuts (they may still conflict, see
/// [`crate::core::conflict::evaluate_shortcut_overlap`]).
///
/// # Example
/// ```
/// use keyremap_manager::core::{Key, KeyKind, ModifierKey, Shortcut};
/// use keyremap_manager::core::keycodes::vk_letter;
///
/// let shortcut = Shortcut::new(Key(vk_letter('A')))
///     .with_modifier(KeyKind::Ctrl, ModifierKey::Both)
///     .with_modifier(KeyKind::Shift, ModifierKey::Left);
///
/// assert!(shortcut.is_valid());
/// assert_eq!(shortcut.to_string(), "Ctrl+LShift+A");
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Shortcut {
    pub win: ModifierKey,
    pub ctrl: ModifierKey,
    pub alt: ModifierKey,
    pub shift: ModifierKey,
    /// The non-modifier key completing the shortcut
    pub action: Option<Key>,
}

impl Shortcut {
    /// Creates a shortcut with the given action key and no modifiers.
    ///
    /// The result is not valid until at least one modifier is enabled.
    pub fn new(action: Key) -> Self {
        Self {
            action: (!action.is_none()).then_some(action),
            ..Self::default()
        }
    }

    /// Returns a copy with one modifier slot replaced.
    ///
    /// Non-modifier kinds are ignored.
    pub fn with_modifier(mut self, kind: KeyKind, value: ModifierKey) -> Self {
        self.set_modifier(kind, value);
        self
    }

    /// Returns the slot for a modifier kind (`Disabled` for non-modifiers).
    pub fn modifier(&self, kind: KeyKind) -> ModifierKey {
        match kind {
            KeyKind::Win => self.win,
            KeyKind::Ctrl => self.ctrl,
            KeyKind::Alt => self.alt,
            KeyKind::Shift => self.shift,
            KeyKind::Action | KeyKind::None => ModifierKey::Disabled,
        }
    }

    /// Sets the slot for a modifier kind.
    pub fn set_modifier(&mut self, kind: KeyKind, value: ModifierKey) {
        match kind {
            KeyKind::Win => self.win = value,
            KeyKind::Ctrl => self.ctrl = value,
            KeyKind::Alt => self.alt = value,
            KeyKind::Shift => self.shift = value,
            KeyKind::Action | KeyKind::None => {}
        }
    }

    /// Builds a shortcut from an ordered list of keys.
    ///
    /// Each modifier code fills its slot (left code → `Left`, right code →
    /// `Right`, common code → `Both`), the last action key becomes the
    /// action key, and null keys are skipped.
    pub fn from_keys(keys: &[Key]) -> Self {
        let mut shortcut = Self::default();

        for key in keys {
            match key.code() {
                VK_NONE => {}
                VK_LWIN => shortcut.win = ModifierKey::Left,
                VK_RWIN => shortcut.win = ModifierKey::Right,
                VK_WIN_BOTH => shortcut.win = ModifierKey::Both,
                VK_LCONTROL => shortcut.ctrl = ModifierKey::Left,
                VK_RCONTROL => shortcut.ctrl = ModifierKey::Right,
                VK_CONTROL => shortcut.ctrl = ModifierKey::Both,
                VK_LMENU => shortcut.alt = ModifierKey::Left,
                VK_RMENU => shortcut.alt = ModifierKey::Right,
                VK_MENU => shortcut.alt = ModifierKey::Both,
                VK_LSHIFT => shortcut.shift = ModifierKey::Left,
                VK_RSHIFT => shortcut.shift = ModifierKey::Right,
                VK_SHIFT => shortcut.shift = ModifierKey::Both,
                _ => shortcut.action = Some(*key),
            }
        }

        shortcut
    }

    /// Returns the keys of this shortcut in canonical order
    /// (Win, Ctrl, Alt, Shift, action).
    pub fn keys(&self) -> Vec<Key> {
        let mut keys: Vec<Key> = MODIFIER_ORDER
            .iter()
            .filter_map(|kind| modifier_code(*kind, self.modifier(*kind)))
            .map(Key)
            .collect();

        if let Some(action) = self.action {
            keys.push(action);
        }

        keys
    }

    /// Number of enabled modifier slots.
    pub fn modifier_count(&self) -> usize {
        MODIFIER_ORDER
            .iter()
            .filter(|kind| self.modifier(**kind).is_enabled())
            .count()
    }

    /// Returns true if the shortcut has an action key and at least one
    /// enabled modifier.
    pub fn is_valid(&self) -> bool {
        self.action.is_some() && self.modifier_count() > 0
    }

    /// Returns true if no slot is enabled and no action key is set.
    pub fn is_empty(&self) -> bool {
        self.action.is_none() && self.modifier_count() == 0
    }
}

/// Maps a modifier slot to the VK code representing it.
fn modifier_code(kind: KeyKind, value: ModifierKey) -> Option<u32> {
    let (left, right, both) = match kind {
        KeyKind::Win => (VK_LWIN, VK_RWIN, VK_WIN_BOTH),
        KeyKind::Ctrl => (VK_LCONTROL, VK_RCONTROL, VK_CONTROL),
        KeyKind::Alt => (VK_LMENU, VK_RMENU, VK_MENU),
        KeyKind::Shift => (VK_LSHIFT, VK_RSHIFT, VK_SHIFT),
        KeyKind::Action | KeyKind::None => return None,
    };

    match value {
        ModifierKey::Disabled => None,
        ModifierKey::Left => Some(left),
        ModifierKey::Right => Some(right),
        ModifierKey::Both => Some(both),
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys = self
            .keys()
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join("+");
        write!(f, "{}", keys)
    }
}

/// A single key remap: pressing `original` produces `new`
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct KeyRemap {
    pub original: Key,
    pub new: Key,
}

impl fmt::Display for KeyRemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.original, self.new)
    }
}

/// A shortcut remap: pressing `original` produces `new`
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ShortcutRemap {
    pub original: Shortcut,
    pub new: Shortcut,
}

impl fmt::Display for ShortcutRemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.original, self.new)
    }
}

/// Either kind of remap pair
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Remap {
    Key(KeyRemap),
    Shortcut(ShortcutRemap),
}

impl fmt::Display for Remap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Remap::Key(remap) => write!(f, "key {}", remap),
            Remap::Shortcut(remap) => write!(f, "shortcut {}", remap),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::keycodes::vk_letter;

    #[test]
    fn test_new_ignores_null_action() {
        assert_eq!(Shortcut::new(Key::NONE).action, None);
        assert!(Shortcut::new(Key::NONE).is_empty());
    }

    #[test]
    fn test_modifier_accessors() {
        let shortcut = Shortcut::new(Key(vk_letter('K')))
            .with_modifier(KeyKind::Alt, ModifierKey::Right)
            .with_modifier(KeyKind::Action, ModifierKey::Both);

        assert_eq!(shortcut.modifier(KeyKind::Alt), ModifierKey::Right);
        assert_eq!(shortcut.modifier(KeyKind::Action), ModifierKey::Disabled);
        assert_eq!(shortcut.modifier_count(), 1);
    }
}
