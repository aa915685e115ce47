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

//! Keyboard Remap Manager
//!
//! Conflict detection and validation for single key and shortcut remaps.
//!
//! # Features
//!
//! - **Conflict Detection:** Classifies key pairs and shortcut pairs,
//!   including left/right/side-agnostic modifier overlap
//! - **Shortcut Builder:** Slot-by-slot shortcut construction that rejects
//!   malformed shortcuts before they exist
//! - **Remap Tables:** UI-independent editing buffers with stable row ids
//! - **Remap Files:** Parsing and whole-file validation reports
//!
//! # Architecture
//!
//! - **`core`:** Business logic (key codes, types, conflict detection,
//!   builder, layouts, parser)
//! - **`editor`:** Remap tables for an interactive editor
//! - **`config`:** Remap file access and whole-file validation
//!
//! # Examples
//!
//! ## Checking two shortcuts
//!
//! ```
//! use keyremap_manager::core::keycodes::vk_letter;
//! use keyremap_manager::{
//!     evaluate_shortcut_overlap, ConflictKind, Key, KeyKind, ModifierKey, Shortcut,
//! };
//!
//! let a = Key(vk_letter('A'));
//! let ctrl_a = Shortcut::new(a).with_modifier(KeyKind::Ctrl, ModifierKey::Both);
//! let lctrl_a = Shortcut::new(a).with_modifier(KeyKind::Ctrl, ModifierKey::Left);
//!
//! assert_eq!(
//!     evaluate_shortcut_overlap(&ctrl_a, &lctrl_a),
//!     ConflictKind::ConflictingModifierShortcut
//! );
//! ```
//!
//! ## Validating a remap file
//!
//! ```no_run
//! use keyremap_manager::config::{validator::RemapValidator, ConfigManager};
//! use keyremap_manager::core::StandardLayout;
//!
//! let manager = ConfigManager::new("~/.config/keyremap/remaps.conf".into())?;
//! let entries = manager.load_remaps(&StandardLayout::new())?;
//! let report = RemapValidator::new().validate(&entries);
//! println!("{} errors", report.error_count());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod core;
pub mod editor;

// Re-export commonly used types for convenience
pub use core::{
    evaluate_key_overlap, evaluate_shortcut_overlap, has_repeated_modifier_kind,
    is_valid_shortcut, ConflictKind, Key, KeyKind, ModifierKey, Shortcut, ShortcutBuilder,
};
