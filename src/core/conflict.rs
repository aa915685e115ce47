//! Key and shortcut conflict detection
//!
//! Two remaps conflict when their original keys (or shortcuts) cannot both
//! be registered without ambiguity. Every check here is a pure function of
//! its arguments: no state, no I/O, safe to call from any thread.
//!
//! # Outcomes
//! Checks never fail. They classify a pair into a [`ConflictKind`], where
//! `NoError` means the pair can coexist. Callers map the other variants to
//! user-facing text with [`ConflictKind::message`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::keycodes::{self, KeyKind};
use crate::core::types::{Key, ModifierKey, Shortcut, MODIFIER_ORDER};

/// Result of validating a key, a shortcut, or a pair of them.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ConflictKind {
    /// No conflict
    NoError,
    /// The original key is already remapped in another row
    SameKeyPreviouslyMapped,
    /// The key is remapped to itself
    MapToSameKey,
    /// A side-specific and a side-agnostic key of the same modifier overlap
    ConflictingModifierKey,
    /// The original shortcut is already remapped in another row
    SameShortcutPreviouslyMapped,
    /// The shortcut is remapped to itself
    MapToSameShortcut,
    /// Two shortcuts overlap through a side-agnostic modifier
    ConflictingModifierShortcut,
    /// Win+L is reserved by the OS
    WinL,
    /// Ctrl+Alt+Del is reserved by the OS
    CtrlAltDel,
    /// The shortcut lacks a modifier or an action key
    InvalidShortcut,
    /// The first key of a shortcut is not a modifier
    ShortcutStartWithModifier,
    /// The same modifier kind appears twice
    ShortcutCannotHaveRepeatedModifier,
    /// A shortcut cannot shrink below two keys
    ShortcutAtleast2Keys,
    /// The last key of a shortcut must be an action key
    ShortcutOneActionKey,
    /// An action key may only appear in the last position
    ShortcutNotMoreThanOneActionKey,
}

impl ConflictKind {
    /// Returns false only for `NoError`.
    pub fn is_error(self) -> bool {
        self != ConflictKind::NoError
    }

    /// Converts the outcome into a `Result`, so callers can use `?`.
    pub fn into_result(self) -> Result<(), ConflictKind> {
        if self.is_error() {
            Err(self)
        } else {
            Ok(())
        }
    }

    /// User-facing description of the outcome.
    pub fn message(self) -> &'static str {
        match self {
            ConflictKind::NoError => "Remapping successful",
            ConflictKind::SameKeyPreviouslyMapped => "Cannot remap a key more than once",
            ConflictKind::MapToSameKey => "Cannot remap a key to itself",
            ConflictKind::ConflictingModifierKey => {
                "Cannot remap this key as it conflicts with another remapped key"
            }
            ConflictKind::SameShortcutPreviouslyMapped => "Cannot remap a shortcut more than once",
            ConflictKind::MapToSameShortcut => "Cannot remap a shortcut to itself",
            ConflictKind::ConflictingModifierShortcut => {
                "Cannot remap this shortcut as it conflicts with another remapped shortcut"
            }
            ConflictKind::WinL => "Cannot remap from/to Win L",
            ConflictKind::CtrlAltDel => "Cannot remap from/to Ctrl Alt Del",
            ConflictKind::InvalidShortcut => {
                "Shortcut must have at least one modifier and exactly one action key"
            }
            ConflictKind::ShortcutStartWithModifier => "Shortcut must start with a modifier key",
            ConflictKind::ShortcutCannotHaveRepeatedModifier => {
                "Shortcut cannot contain a repeated modifier"
            }
            ConflictKind::ShortcutAtleast2Keys => "Shortcut must have at least 2 keys",
            ConflictKind::ShortcutOneActionKey => "Shortcut must contain an action key",
            ConflictKind::ShortcutNotMoreThanOneActionKey => {
                "Shortcut cannot have more than one action key"
            }
        }
    }
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Checks whether two keys are equal or cover the same physical key.
///
/// - Identical keys: `SameKeyPreviouslyMapped`
/// - Same modifier kind, left vs right (e.g. LCtrl/RCtrl): `NoError`
/// - Same modifier kind otherwise (e.g. LCtrl/Ctrl): `ConflictingModifierKey`
/// - Anything else: `NoError`
pub fn evaluate_key_overlap(first: Key, second: Key) -> ConflictKind {
    if first == second {
        return ConflictKind::SameKeyPreviouslyMapped;
    }

    let kind = first.kind();
    if kind == second.kind() && kind != KeyKind::Action {
        if keycodes::is_left_right_pair(first.code(), second.code()) {
            ConflictKind::NoError
        } else {
            ConflictKind::ConflictingModifierKey
        }
    } else {
        ConflictKind::NoError
    }
}

/// Returns true if the shortcut has an action key and at least one
/// enabled modifier. Invalid shortcuts never conflict.
pub fn is_valid_shortcut(shortcut: &Shortcut) -> bool {
    shortcut.is_valid()
}

/// Checks whether two shortcuts are equal or cover the same key set.
///
/// Shortcuts with the same action key and the same set of enabled modifier
/// kinds conflict only if at least one of them accepts either side of some
/// modifier (`ModifierKey::Both`). `LCtrl+A` and `RCtrl+A` are
/// distinguishable and do not conflict; `Ctrl+A` and `LCtrl+A` do.
pub fn evaluate_shortcut_overlap(first: &Shortcut, second: &Shortcut) -> ConflictKind {
    if !first.is_valid() || !second.is_valid() {
        return ConflictKind::NoError;
    }

    if first == second {
        return ConflictKind::SameShortcutPreviouslyMapped;
    }

    if first.action != second.action {
        return ConflictKind::NoError;
    }

    // Both sides must use the same modifier kinds to overlap at all
    let congruent = MODIFIER_ORDER
        .iter()
        .all(|kind| first.modifier(*kind).is_enabled() == second.modifier(*kind).is_enabled());
    if !congruent {
        return ConflictKind::NoError;
    }

    let side_agnostic = MODIFIER_ORDER.iter().any(|kind| {
        first.modifier(*kind) == ModifierKey::Both || second.modifier(*kind) == ModifierKey::Both
    });

    if side_agnostic {
        ConflictKind::ConflictingModifierShortcut
    } else {
        ConflictKind::NoError
    }
}

/// Returns true if adding `candidate` to `current_keys` would repeat a
/// modifier kind.
///
/// `current_keys` should not contain the slot being replaced. The
/// candidate itself counts once, so any existing key of the same kind
/// makes the count exceed one.
pub fn has_repeated_modifier_kind(current_keys: &[Key], candidate: Key) -> bool {
    let kind = candidate.kind();
    let count = 1 + current_keys.iter().filter(|k| k.kind() == kind).count();

    count > 1
}
