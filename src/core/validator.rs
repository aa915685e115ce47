// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Remap pair validation
//!
//! Checks a single remap pair in isolation, before it is compared against
//! other rows:
//! - A key or shortcut cannot be remapped to itself
//! - Shortcuts must be complete (modifier + action key)
//! - OS-reserved shortcuts (Win+L, Ctrl+Alt+Del) cannot be remapped
//!
//! Cross-row checks live in [`crate::core::conflict`].

use crate::core::conflict::ConflictKind;
use crate::core::keycodes::{vk_letter, VK_DELETE};
use crate::core::types::{Key, KeyRemap, Shortcut, ShortcutRemap};

/// Returns the reason a shortcut may not be remapped, or `NoError`.
///
/// - Win+L (any Win side, nothing else) locks the workstation
/// - Ctrl+Alt+Del (any sides, no Win or Shift) opens the secure desktop
pub fn illegal_reason(shortcut: &Shortcut) -> ConflictKind {
    let only_win = shortcut.win.is_enabled()
        && !shortcut.ctrl.is_enabled()
        && !shortcut.alt.is_enabled()
        && !shortcut.shift.is_enabled();
    if only_win && shortcut.action == Some(Key(vk_letter('L'))) {
        return ConflictKind::WinL;
    }

    let ctrl_alt = shortcut.ctrl.is_enabled()
        && shortcut.alt.is_enabled()
        && !shortcut.win.is_enabled()
        && !shortcut.shift.is_enabled();
    if ctrl_alt && shortcut.action == Some(Key(VK_DELETE)) {
        return ConflictKind::CtrlAltDel;
    }

    ConflictKind::NoError
}

/// Validates a single key remap pair.
///
/// Returns `MapToSameKey` when both sides are the same key.
pub fn validate_key_remap(remap: &KeyRemap) -> ConflictKind {
    if remap.original == remap.new {
        ConflictKind::MapToSameKey
    } else {
        ConflictKind::NoError
    }
}

/// Validates a single shortcut remap pair.
///
/// Checks, in order:
/// - Both shortcuts are complete
/// - The shortcut is not remapped to itself
/// - Neither side is an OS-reserved shortcut
pub fn validate_shortcut_remap(remap: &ShortcutRemap) -> ConflictKind {
    if !remap.original.is_valid() || !remap.new.is_valid() {
        return ConflictKind::InvalidShortcut;
    }

    if remap.original == remap.new {
        return ConflictKind::MapToSameShortcut;
    }

    match illegal_reason(&remap.original) {
        ConflictKind::NoError => illegal_reason(&remap.new),
        reason => reason,
    }
}
