//! src/core/keycodes.rs
//!
//! Virtual-key codes and key classification
//!
//! Keys are identified by Windows virtual-key (VK) codes as defined in
//! `<winuser.h>`. Every code falls into exactly one [`KeyKind`]: one of the
//! four modifier kinds, an action key, or the null key.
//!
//! Common Win has no native VK code (Windows only reports the left and
//! right keys), so it is assigned [`VK_WIN_BOTH`], a value above the VK
//! range that never collides with a real key.
//!
//! Reference: https://learn.microsoft.com/windows/win32/inputdev/virtual-key-codes

use serde::{Deserialize, Serialize};
use std::fmt;

/// The null key ("None" in key pickers)
pub const VK_NONE: u32 = 0x00;

pub const VK_BACK: u32 = 0x08;
pub const VK_TAB: u32 = 0x09;
pub const VK_RETURN: u32 = 0x0D;
pub const VK_SHIFT: u32 = 0x10;
pub const VK_CONTROL: u32 = 0x11;
/// Alt (historically "menu")
pub const VK_MENU: u32 = 0x12;
pub const VK_PAUSE: u32 = 0x13;
pub const VK_CAPITAL: u32 = 0x14;
pub const VK_ESCAPE: u32 = 0x1B;
pub const VK_SPACE: u32 = 0x20;
pub const VK_PRIOR: u32 = 0x21;
pub const VK_NEXT: u32 = 0x22;
pub const VK_END: u32 = 0x23;
pub const VK_HOME: u32 = 0x24;
pub const VK_LEFT: u32 = 0x25;
pub const VK_UP: u32 = 0x26;
pub const VK_RIGHT: u32 = 0x27;
pub const VK_DOWN: u32 = 0x28;
pub const VK_SNAPSHOT: u32 = 0x2C;
pub const VK_INSERT: u32 = 0x2D;
pub const VK_DELETE: u32 = 0x2E;
pub const VK_LWIN: u32 = 0x5B;
pub const VK_RWIN: u32 = 0x5C;
pub const VK_APPS: u32 = 0x5D;
pub const VK_NUMPAD0: u32 = 0x60;
pub const VK_MULTIPLY: u32 = 0x6A;
pub const VK_ADD: u32 = 0x6B;
pub const VK_SUBTRACT: u32 = 0x6D;
pub const VK_DECIMAL: u32 = 0x6E;
pub const VK_DIVIDE: u32 = 0x6F;
pub const VK_F1: u32 = 0x70;
pub const VK_NUMLOCK: u32 = 0x90;
pub const VK_SCROLL: u32 = 0x91;
pub const VK_LSHIFT: u32 = 0xA0;
pub const VK_RSHIFT: u32 = 0xA1;
pub const VK_LCONTROL: u32 = 0xA2;
pub const VK_RCONTROL: u32 = 0xA3;
pub const VK_LMENU: u32 = 0xA4;
pub const VK_RMENU: u32 = 0xA5;
pub const VK_OEM_1: u32 = 0xBA;
pub const VK_OEM_PLUS: u32 = 0xBB;
pub const VK_OEM_COMMA: u32 = 0xBC;
pub const VK_OEM_MINUS: u32 = 0xBD;
pub const VK_OEM_PERIOD: u32 = 0xBE;
pub const VK_OEM_2: u32 = 0xBF;
pub const VK_OEM_3: u32 = 0xC0;
pub const VK_OEM_4: u32 = 0xDB;
pub const VK_OEM_5: u32 = 0xDC;
pub const VK_OEM_6: u32 = 0xDD;
pub const VK_OEM_7: u32 = 0xDE;

/// Side-agnostic Win key. Outside the 0x00-0xFF VK range.
pub const VK_WIN_BOTH: u32 = 0x104;

/// Letter keys share their ASCII uppercase code (VK_A = 0x41 = 'A').
pub const fn vk_letter(letter: char) -> u32 {
    letter.to_ascii_uppercase() as u32
}

/// Category of a key, independent of left/right side.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum KeyKind {
    /// Windows key (left, right or common)
    Win,
    /// Control key (left, right or common)
    Ctrl,
    /// Alt key (left, right or common)
    Alt,
    /// Shift key (left, right or common)
    Shift,
    /// Any non-modifier key
    Action,
    /// The null key
    None,
}

impl KeyKind {
    /// Returns true for the four modifier kinds.
    pub fn is_modifier(self) -> bool {
        matches!(self, KeyKind::Win | KeyKind::Ctrl | KeyKind::Alt | KeyKind::Shift)
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Win => write!(f, "Win"),
            KeyKind::Ctrl => write!(f, "Ctrl"),
            KeyKind::Alt => write!(f, "Alt"),
            KeyKind::Shift => write!(f, "Shift"),
            KeyKind::Action => write!(f, "Action"),
            KeyKind::None => write!(f, "None"),
        }
    }
}

/// Classifies a VK code into its [`KeyKind`].
pub fn key_kind(code: u32) -> KeyKind {
    match code {
        VK_NONE => KeyKind::None,
        VK_LWIN | VK_RWIN | VK_WIN_BOTH => KeyKind::Win,
        VK_CONTROL | VK_LCONTROL | VK_RCONTROL => KeyKind::Ctrl,
        VK_MENU | VK_LMENU | VK_RMENU => KeyKind::Alt,
        VK_SHIFT | VK_LSHIFT | VK_RSHIFT => KeyKind::Shift,
        _ => KeyKind::Action,
    }
}

/// Returns true if both codes are the left and right key of the same
/// modifier kind (in either order).
pub fn is_left_right_pair(first: u32, second: u32) -> bool {
    matches!(
        (first, second),
        (VK_LWIN, VK_RWIN)
            | (VK_RWIN, VK_LWIN)
            | (VK_LCONTROL, VK_RCONTROL)
            | (VK_RCONTROL, VK_LCONTROL)
            | (VK_LMENU, VK_RMENU)
            | (VK_RMENU, VK_LMENU)
            | (VK_LSHIFT, VK_RSHIFT)
            | (VK_RSHIFT, VK_LSHIFT)
    )
}

/// Standard US-English name table.
///
/// Order matters: it is the order keys appear in pickers. Letters, digits,
/// function keys and numpad digits are generated in [`standard_key_codes`].
const NAMED_KEYS: &[(u32, &str)] = &[
    (VK_BACK, "Backspace"),
    (VK_TAB, "Tab"),
    (VK_RETURN, "Enter"),
    (VK_PAUSE, "Pause"),
    (VK_CAPITAL, "CapsLock"),
    (VK_ESCAPE, "Esc"),
    (VK_SPACE, "Space"),
    (VK_PRIOR, "PageUp"),
    (VK_NEXT, "PageDown"),
    (VK_END, "End"),
    (VK_HOME, "Home"),
    (VK_LEFT, "Left"),
    (VK_UP, "Up"),
    (VK_RIGHT, "Right"),
    (VK_DOWN, "Down"),
    (VK_SNAPSHOT, "PrintScreen"),
    (VK_INSERT, "Insert"),
    (VK_DELETE, "Delete"),
    (VK_APPS, "Menu"),
    (VK_MULTIPLY, "NumMultiply"),
    (VK_ADD, "NumAdd"),
    (VK_SUBTRACT, "NumSubtract"),
    (VK_DECIMAL, "NumDecimal"),
    (VK_DIVIDE, "NumDivide"),
    (VK_NUMLOCK, "NumLock"),
    (VK_SCROLL, "ScrollLock"),
    (VK_OEM_1, ";"),
    (VK_OEM_PLUS, "="),
    (VK_OEM_COMMA, ","),
    (VK_OEM_MINUS, "-"),
    (VK_OEM_PERIOD, "."),
    (VK_OEM_2, "/"),
    (VK_OEM_3, "`"),
    (VK_OEM_4, "["),
    (VK_OEM_5, "\\"),
    (VK_OEM_6, "]"),
    (VK_OEM_7, "'"),
];

/// Modifier names. Common variants come first so a bare "Ctrl" resolves
/// to the side-agnostic code.
const MODIFIER_KEYS: &[(u32, &str)] = &[
    (VK_WIN_BOTH, "Win"),
    (VK_LWIN, "LWin"),
    (VK_RWIN, "RWin"),
    (VK_CONTROL, "Ctrl"),
    (VK_LCONTROL, "LCtrl"),
    (VK_RCONTROL, "RCtrl"),
    (VK_MENU, "Alt"),
    (VK_LMENU, "LAlt"),
    (VK_RMENU, "RAlt"),
    (VK_SHIFT, "Shift"),
    (VK_LSHIFT, "LShift"),
    (VK_RSHIFT, "RShift"),
];

/// Returns the standard display name for a VK code, if it has one.
pub fn standard_key_name(code: u32) -> Option<String> {
    match code {
        VK_NONE => Some("None".to_string()),
        0x30..=0x39 | 0x41..=0x5A => char::from_u32(code).map(|c| c.to_string()),
        0x60..=0x69 => Some(format!("Num{}", code - VK_NUMPAD0)),
        0x70..=0x87 => Some(format!("F{}", code - VK_F1 + 1)),
        _ => MODIFIER_KEYS
            .iter()
            .chain(NAMED_KEYS.iter())
            .find(|(vk, _)| *vk == code)
            .map(|(_, name)| (*name).to_string()),
    }
}

/// Returns every named VK code in picker order.
///
/// Modifiers come first, then letters, digits, function keys, numpad
/// digits, and the remaining named keys. Common modifier codes are only
/// included when `include_common_modifiers` is set, since a single key
/// remap must target a concrete physical key.
pub fn standard_key_codes(include_common_modifiers: bool) -> Vec<u32> {
    let mut codes: Vec<u32> = MODIFIER_KEYS
        .iter()
        .map(|(vk, _)| *vk)
        .filter(|vk| include_common_modifiers || !is_common_modifier(*vk))
        .collect();

    codes.extend(0x41..=0x5A);
    codes.extend(0x30..=0x39);
    codes.extend(0x70..=0x87);
    codes.extend(0x60..=0x69);
    codes.extend(NAMED_KEYS.iter().map(|(vk, _)| *vk));
    codes
}

/// Returns true for the side-agnostic modifier codes.
pub fn is_common_modifier(code: u32) -> bool {
    matches!(code, VK_WIN_BOTH | VK_CONTROL | VK_MENU | VK_SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_kind_classification() {
        assert_eq!(key_kind(VK_LWIN), KeyKind::Win);
        assert_eq!(key_kind(VK_WIN_BOTH), KeyKind::Win);
        assert_eq!(key_kind(VK_RCONTROL), KeyKind::Ctrl);
        assert_eq!(key_kind(VK_MENU), KeyKind::Alt);
        assert_eq!(key_kind(VK_LSHIFT), KeyKind::Shift);
        assert_eq!(key_kind(vk_letter('a')), KeyKind::Action);
        assert_eq!(key_kind(VK_NONE), KeyKind::None);
    }

    #[test]
    fn test_standard_names() {
        assert_eq!(standard_key_name(vk_letter('A')).as_deref(), Some("A"));
        assert_eq!(standard_key_name(0x35).as_deref(), Some("5"));
        assert_eq!(standard_key_name(VK_F1 + 11).as_deref(), Some("F12"));
        assert_eq!(standard_key_name(VK_NUMPAD0 + 7).as_deref(), Some("Num7"));
        assert_eq!(standard_key_name(VK_LCONTROL).as_deref(), Some("LCtrl"));
        assert_eq!(standard_key_name(0xFF), None);
    }

    #[test]
    fn test_single_key_list_excludes_common_modifiers() {
        let codes = standard_key_codes(false);
        assert!(!codes.contains(&VK_CONTROL));
        assert!(!codes.contains(&VK_WIN_BOTH));
        assert!(codes.contains(&VK_LCONTROL));

        let shortcut_codes = standard_key_codes(true);
        assert!(shortcut_codes.contains(&VK_CONTROL));
    }
}
