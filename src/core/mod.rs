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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the fundamental data structures and algorithms
//! for remap validation, including:
//! - Key codes, key kinds, and the `Key`/`Shortcut` value types
//! - Conflict detection between keys and between shortcuts
//! - The incremental shortcut builder
//! - Keyboard layouts (key name and code lists)
//! - Remap file parsing
//!
//! All business logic is isolated from UI and I/O concerns, and every
//! check is a pure function of its inputs.

pub mod builder;
pub mod conflict;
pub mod keycodes;
pub mod layout;
pub mod parser;
pub mod types;
pub mod validator;

pub use builder::{BuilderState, ShortcutBuilder, Transition};
pub use conflict::{
    evaluate_key_overlap, evaluate_shortcut_overlap, has_repeated_modifier_kind,
    is_valid_shortcut, ConflictKind,
};
pub use keycodes::KeyKind;
pub use layout::{KeyboardLayout, StandardLayout};
pub use types::*;

#[cfg(test)]
mod tests;
