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

//! Parser module tests
//!
//! Tests for parsing remap files:
//! - Line kind parsing (key, shortcut)
//! - Line splitting around `->`
//! - Key name resolution, including aliases
//! - Shortcut shape errors reported by the builder
//! - Full file parsing with comments and line numbers

use crate::core::keycodes::{vk_letter, VK_CAPITAL, VK_CONTROL, VK_ESCAPE, VK_LCONTROL};
use crate::core::{
    parser::*, ConflictKind, Key, KeyKind, KeyRemap, ModifierKey, Remap, StandardLayout,
};

#[test]
fn test_parse_line_kind() {
    assert!(matches!(
        parse_line_kind("key A -> B"),
        Ok((_, LineKind::Key))
    ));
    assert!(matches!(
        parse_line_kind("shortcut Ctrl+A -> Win+E"),
        Ok((_, LineKind::Shortcut))
    ));
    assert!(parse_line_kind("keys A -> B").is_err());
    assert!(parse_line_kind("bind A -> B").is_err());
}

#[test]
fn test_parse_remap_line() {
    let (_, raw) = parse_remap_line("shortcut  Ctrl + Shift+A ->Win+E").unwrap();
    assert_eq!(raw.kind, LineKind::Shortcut);
    assert_eq!(raw.original, "Ctrl + Shift+A");
    assert_eq!(raw.new, "Win+E");
}

#[test]
fn test_parse_remap_line_missing_side() {
    assert!(parse_remap_line("key A ->").is_err());
    assert!(parse_remap_line("key -> B").is_err());
    assert!(parse_remap_line("key A B").is_err());
}

#[test]
fn test_parse_key_remap() {
    let entries = parse_remap_file("key CapsLock -> Esc", &StandardLayout::new()).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].remap,
        Remap::Key(KeyRemap {
            original: Key(VK_CAPITAL),
            new: Key(VK_ESCAPE),
        })
    );
}

#[test]
fn test_parse_shortcut_remap() {
    let layout = StandardLayout::new();
    let shortcut = parse_shortcut("LCtrl+Shift+A", 1, &layout).unwrap();

    assert_eq!(shortcut.ctrl, ModifierKey::Left);
    assert_eq!(shortcut.shift, ModifierKey::Both);
    assert_eq!(shortcut.modifier(KeyKind::Win), ModifierKey::Disabled);
    assert_eq!(shortcut.action, Some(Key(vk_letter('A'))));
}

#[test]
fn test_parse_shortcut_aliases() {
    let layout = StandardLayout::new();
    let shortcut = parse_shortcut("control+super+return", 1, &layout).unwrap();

    assert_eq!(shortcut.ctrl, ModifierKey::Both);
    assert_eq!(shortcut.win, ModifierKey::Both);
    assert!(shortcut.is_valid());
}

#[test]
fn test_shortcut_must_start_with_modifier() {
    let result = parse_shortcut("A+Ctrl", 4, &StandardLayout::new());
    assert_eq!(
        result,
        Err(ParseError::InvalidShortcut {
            text: "A+Ctrl".to_string(),
            line: 4,
            reason: ConflictKind::ShortcutStartWithModifier,
        })
    );
}

#[test]
fn test_shortcut_repeated_modifier() {
    let result = parse_shortcut("LCtrl+Ctrl+A", 1, &StandardLayout::new());
    assert!(matches!(
        result,
        Err(ParseError::InvalidShortcut {
            reason: ConflictKind::ShortcutCannotHaveRepeatedModifier,
            ..
        })
    ));
}

#[test]
fn test_shortcut_two_action_keys() {
    let result = parse_shortcut("Ctrl+A+B", 1, &StandardLayout::new());
    assert!(matches!(
        result,
        Err(ParseError::InvalidShortcut {
            reason: ConflictKind::ShortcutNotMoreThanOneActionKey,
            ..
        })
    ));
}

#[test]
fn test_modifier_only_shortcut_parses_as_invalid() {
    let shortcut = parse_shortcut("Ctrl+Shift", 1, &StandardLayout::new()).unwrap();
    assert!(!shortcut.is_valid(), "Validation reports it, not the parser");
}

#[test]
fn test_unknown_key() {
    let result = parse_remap_file("\nkey Hyper -> A", &StandardLayout::new());
    assert_eq!(
        result,
        Err(ParseError::UnknownKey {
            name: "Hyper".to_string(),
            line: 2,
        })
    );
}

#[test]
fn test_common_modifier_is_not_a_single_key() {
    let result = parse_remap_file("key Ctrl -> A", &StandardLayout::new());
    assert!(matches!(result, Err(ParseError::NotASingleKey { line: 1, .. })));

    let entries = parse_remap_file("key LCtrl -> A", &StandardLayout::new()).unwrap();
    assert!(matches!(
        entries[0].remap,
        Remap::Key(KeyRemap { original, .. }) if original == Key(VK_LCONTROL)
    ));
}

#[test]
fn test_invalid_syntax_reports_line() {
    let content = "# header\nkey A -> B\nbind = SUPER, Q\n";
    let result = parse_remap_file(content, &StandardLayout::new());
    assert!(matches!(result, Err(ParseError::InvalidSyntax { line: 3, .. })));
}

#[test]
fn test_parse_full_file() {
    let content = r#"
# Swap caps lock and escape
key CapsLock -> Esc
key Esc -> CapsLock

   # Indented comment
shortcut Ctrl+C -> Win+E
shortcut LAlt+F4 -> Ctrl+W
"#;

    let entries = parse_remap_file(content, &StandardLayout::new()).unwrap();

    assert_eq!(entries.len(), 4);
    let lines: Vec<usize> = entries.iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![3, 4, 7, 8]);

    match entries[2].remap {
        Remap::Shortcut(remap) => {
            assert_eq!(remap.original.ctrl, ModifierKey::Both);
            assert_eq!(remap.new.win, ModifierKey::Both);
        }
        other => panic!("Expected shortcut remap, got {:?}", other),
    }
}

#[test]
fn test_common_modifier_allowed_in_shortcut() {
    let shortcut = parse_shortcut("Ctrl+A", 1, &StandardLayout::new()).unwrap();
    assert_eq!(shortcut.keys()[0], Key(VK_CONTROL));
}
