//! src/core/builder.rs
//!
//! Incremental shortcut construction
//!
//! Key pickers build a shortcut one key at a time: the user fills a slot,
//! and a new empty slot appears while the shortcut is still missing its
//! action key. [`ShortcutBuilder`] models that as a value type with an
//! explicit state machine:
//!
//! ```text
//! Empty ──modifier──▶ PartialModifiers ──modifier──▶ PartialModifiers
//!                          │
//!                          └──action key (last slot)──▶ CompleteShortcut
//! ```
//!
//! Every selection is either accepted, returning a [`Transition`], or
//! rejected with a [`ConflictKind`]. A rejected selection never changes
//! the builder.

use tracing::debug;

use crate::core::conflict::{has_repeated_modifier_kind, ConflictKind};
use crate::core::types::{Key, Shortcut};

/// Four modifier kinds plus one action key.
pub const DEFAULT_MAX_KEYS: usize = 5;

/// Smallest usable shortcut: one modifier plus an action key.
pub const MIN_KEYS: usize = 2;

/// Shape of the shortcut under construction
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuilderState {
    /// No key selected yet
    Empty,
    /// One or more modifiers, no action key
    PartialModifiers,
    /// Modifiers followed by exactly one action key
    CompleteShortcut,
}

/// Effect of an accepted selection on the slot list
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Transition {
    /// A slot was filled, slot count unchanged
    SlotSet,
    /// A modifier filled the last slot and a new empty slot was appended
    SlotAdded,
    /// A slot was removed after being cleared
    SlotRemoved,
    /// An action key was placed and any trailing empty slots dropped
    Completed,
}

/// Builds a shortcut slot by slot, enforcing shortcut shape rules
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortcutBuilder {
    slots: Vec<Option<Key>>,
    max_keys: usize,
}

impl Default for ShortcutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutBuilder {
    /// Creates a builder with a single empty slot and the default limit.
    pub fn new() -> Self {
        Self::with_max_keys(DEFAULT_MAX_KEYS)
    }

    /// Creates a builder allowing at most `max_keys` slots.
    ///
    /// Values below [`MIN_KEYS`] are raised to it.
    pub fn with_max_keys(max_keys: usize) -> Self {
        Self {
            slots: vec![None],
            max_keys: max_keys.max(MIN_KEYS),
        }
    }

    /// Creates a builder pre-filled with an existing shortcut.
    ///
    /// A shortcut with modifiers but no action key loads its modifiers
    /// plus a trailing empty slot, so the user can keep adding keys. A
    /// shortcut without modifiers loads as an empty builder.
    pub fn from_shortcut(shortcut: &Shortcut, max_keys: usize) -> Self {
        let mut builder = Self::with_max_keys(max_keys);
        if shortcut.modifier_count() == 0 {
            return builder;
        }

        let keys = shortcut.keys();

        builder.slots = keys.into_iter().map(Some).collect();
        if shortcut.action.is_none() && builder.slots.len() < builder.max_keys {
            builder.slots.push(None);
        }
        builder
    }

    /// Maximum number of slots.
    pub fn max_keys(&self) -> usize {
        self.max_keys
    }

    /// Current slots, in order. `None` marks an empty slot.
    pub fn slots(&self) -> &[Option<Key>] {
        &self.slots
    }

    /// Selected keys, skipping empty slots.
    pub fn keys(&self) -> Vec<Key> {
        self.slots.iter().flatten().copied().collect()
    }

    /// The shortcut described by the selected keys.
    pub fn shortcut(&self) -> Shortcut {
        Shortcut::from_keys(&self.keys())
    }

    /// Current state of the state machine.
    pub fn state(&self) -> BuilderState {
        let keys = self.keys();
        if keys.is_empty() {
            return BuilderState::Empty;
        }

        let actions = keys.iter().filter(|k| !k.is_modifier()).count();
        let ends_with_action = keys.last().is_some_and(|k| !k.is_modifier());
        if actions == 1 && ends_with_action && keys.len() >= MIN_KEYS {
            BuilderState::CompleteShortcut
        } else {
            BuilderState::PartialModifiers
        }
    }

    /// Selects `key` into the last slot.
    pub fn append(&mut self, key: Key) -> Result<Transition, ConflictKind> {
        let last = self.slots.len() - 1;
        self.select(last, key)
    }

    /// Selects `key` into slot `index`.
    ///
    /// `Key::NONE` clears the slot. On rejection the builder is unchanged.
    /// Indices past the end address the last slot.
    pub fn select(&mut self, index: usize, key: Key) -> Result<Transition, ConflictKind> {
        let count = self.slots.len();
        let index = index.min(count - 1);
        let is_last = index == count - 1;

        let transition = if count == 1 && !key.is_modifier() {
            Err(ConflictKind::ShortcutStartWithModifier)
        } else if is_last {
            self.select_last(index, key)
        } else {
            self.select_inner(index, key)
        };

        match &transition {
            Ok(t) => debug!(slot = index, key = %key, transition = ?t, "shortcut slot accepted"),
            Err(kind) => debug!(slot = index, key = %key, reason = ?kind, "shortcut slot rejected"),
        }

        transition
    }

    /// Clears a slot without applying transition rules.
    ///
    /// Used when a selection was well-formed but rejected by a check
    /// outside the builder (e.g. a conflict with another row). If the
    /// remaining keys no longer start with a modifier, the builder is
    /// reset to `Empty`.
    pub fn reset_slot(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = None;
        }

        let leads_with_modifier = self.keys().first().is_some_and(|k| k.is_modifier());
        if !leads_with_modifier {
            self.slots = vec![None];
        }
    }

    fn select_last(&mut self, index: usize, key: Key) -> Result<Transition, ConflictKind> {
        if key.is_modifier() {
            if self.slots.len() >= self.max_keys {
                return Err(ConflictKind::ShortcutOneActionKey);
            }
            if has_repeated_modifier_kind(&self.keys_except(index), key) {
                return Err(ConflictKind::ShortcutCannotHaveRepeatedModifier);
            }

            self.slots[index] = Some(key);
            self.slots.push(None);
            Ok(Transition::SlotAdded)
        } else if key.is_none() {
            Err(ConflictKind::ShortcutOneActionKey)
        } else {
            self.slots[index] = Some(key);
            Ok(Transition::Completed)
        }
    }

    fn select_inner(&mut self, index: usize, key: Key) -> Result<Transition, ConflictKind> {
        if key.is_modifier() {
            if has_repeated_modifier_kind(&self.keys_except(index), key) {
                return Err(ConflictKind::ShortcutCannotHaveRepeatedModifier);
            }

            self.slots[index] = Some(key);
            Ok(Transition::SlotSet)
        } else if key.is_none() {
            if self.slots.len() > MIN_KEYS {
                self.slots.remove(index);
                Ok(Transition::SlotRemoved)
            } else {
                Err(ConflictKind::ShortcutAtleast2Keys)
            }
        } else if index != 0 {
            // An action key mid-shortcut is only allowed if it becomes the last key
            if self.slots[index + 1..].iter().all(Option::is_none) {
                self.slots.truncate(index + 1);
                self.slots[index] = Some(key);
                Ok(Transition::Completed)
            } else {
                Err(ConflictKind::ShortcutNotMoreThanOneActionKey)
            }
        } else {
            Err(ConflictKind::ShortcutStartWithModifier)
        }
    }

    fn keys_except(&self, index: usize) -> Vec<Key> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .filter_map(|(_, slot)| *slot)
            .collect()
    }
}
