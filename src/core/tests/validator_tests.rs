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

//! Remap pair validation tests
//!
//! Covers the checks a single remap must pass before it is compared to
//! other remaps: self remaps, incomplete shortcuts and OS-reserved
//! shortcuts.

use crate::core::keycodes::{vk_letter, VK_DELETE};
use crate::core::validator::{illegal_reason, validate_key_remap, validate_shortcut_remap};
use crate::core::{ConflictKind, Key, KeyKind, KeyRemap, ModifierKey, Shortcut, ShortcutRemap};

fn win(action: Key, side: ModifierKey) -> Shortcut {
    Shortcut::new(action).with_modifier(KeyKind::Win, side)
}

fn ctrl_alt_del() -> Shortcut {
    Shortcut::new(Key(VK_DELETE))
        .with_modifier(KeyKind::Ctrl, ModifierKey::Left)
        .with_modifier(KeyKind::Alt, ModifierKey::Both)
}

#[test]
fn test_key_remap_to_itself() {
    let remap = KeyRemap {
        original: Key(vk_letter('A')),
        new: Key(vk_letter('A')),
    };
    assert_eq!(validate_key_remap(&remap), ConflictKind::MapToSameKey);

    let remap = KeyRemap {
        original: Key(vk_letter('A')),
        new: Key(vk_letter('B')),
    };
    assert_eq!(validate_key_remap(&remap), ConflictKind::NoError);
}

#[test]
fn test_win_l_is_reserved_on_any_side() {
    for side in [ModifierKey::Left, ModifierKey::Right, ModifierKey::Both] {
        assert_eq!(
            illegal_reason(&win(Key(vk_letter('L')), side)),
            ConflictKind::WinL,
            "Win+L should be reserved for {:?}",
            side
        );
    }
}

#[test]
fn test_win_l_with_extra_modifier_allowed() {
    let shortcut = win(Key(vk_letter('L')), ModifierKey::Both)
        .with_modifier(KeyKind::Shift, ModifierKey::Both);
    assert_eq!(illegal_reason(&shortcut), ConflictKind::NoError);
}

#[test]
fn test_ctrl_alt_del_is_reserved() {
    assert_eq!(illegal_reason(&ctrl_alt_del()), ConflictKind::CtrlAltDel);

    let with_shift = ctrl_alt_del().with_modifier(KeyKind::Shift, ModifierKey::Left);
    assert_eq!(illegal_reason(&with_shift), ConflictKind::NoError);
}

#[test]
fn test_incomplete_shortcut_remap_invalid() {
    let remap = ShortcutRemap {
        original: Shortcut::new(Key(vk_letter('A'))),
        new: win(Key(vk_letter('E')), ModifierKey::Both),
    };
    assert_eq!(validate_shortcut_remap(&remap), ConflictKind::InvalidShortcut);
}

#[test]
fn test_shortcut_remap_to_itself() {
    let shortcut = win(Key(vk_letter('E')), ModifierKey::Left);
    let remap = ShortcutRemap {
        original: shortcut,
        new: shortcut,
    };
    assert_eq!(validate_shortcut_remap(&remap), ConflictKind::MapToSameShortcut);
}

#[test]
fn test_reserved_shortcut_on_either_side() {
    let ordinary = win(Key(vk_letter('E')), ModifierKey::Both);

    let from_reserved = ShortcutRemap {
        original: ctrl_alt_del(),
        new: ordinary,
    };
    assert_eq!(validate_shortcut_remap(&from_reserved), ConflictKind::CtrlAltDel);

    let to_reserved = ShortcutRemap {
        original: ordinary,
        new: win(Key(vk_letter('L')), ModifierKey::Both),
    };
    assert_eq!(validate_shortcut_remap(&to_reserved), ConflictKind::WinL);
}

#[test]
fn test_ordinary_shortcut_remap_ok() {
    let remap = ShortcutRemap {
        original: Shortcut::new(Key(vk_letter('C')))
            .with_modifier(KeyKind::Ctrl, ModifierKey::Both),
        new: win(Key(vk_letter('E')), ModifierKey::Both),
    };
    assert_eq!(validate_shortcut_remap(&remap), ConflictKind::NoError);
}
