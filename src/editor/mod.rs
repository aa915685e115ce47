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

//! Remap editing buffers, independent of any UI toolkit
//!
//! # Architecture
//!
//! A remap editor shows one row per remap with an original and a new
//! column. The view layer owns the widgets; this module owns the data and
//! answers every edit with accept or reject:
//!
//! - **`KeyRemapTable`**: single key remaps
//! - **`ShortcutRemapTable`**: shortcut remaps, one [`ShortcutBuilder`] per cell
//! - **`RemapEditor`**: both tables plus the keyboard layout used to turn
//!   picker indices into keys
//!
//! Rows are addressed by [`RowId`]s issued by the tables. Ids stay stable
//! when other rows are removed, so the view never derives a row from a
//! widget position.
//!
//! [`ShortcutBuilder`]: crate::core::ShortcutBuilder

pub mod error;
pub mod key_table;
pub mod remap_editor;
pub mod shortcut_table;

use serde::Serialize;
use std::fmt;

pub use error::EditError;
pub use key_table::KeyRemapTable;
pub use remap_editor::RemapEditor;
pub use shortcut_table::ShortcutRemapTable;

/// Stable identifier of a table row
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct RowId(u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues increasing row ids, never reusing one.
#[derive(Clone, Debug, Default)]
pub(crate) struct RowIds {
    next: u64,
}

impl RowIds {
    pub(crate) fn issue(&mut self) -> RowId {
        let id = RowId(self.next);
        self.next += 1;
        id
    }
}

/// Which side of a remap row
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Column {
    /// The key or shortcut being remapped
    Original,
    /// What it is remapped to
    New,
}

impl Column {
    /// The opposite column.
    pub fn other(self) -> Column {
        match self {
            Column::Original => Column::New,
            Column::New => Column::Original,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Column::Original => 0,
            Column::New => 1,
        }
    }
}

/// Outcome of applying a table
///
/// `applied` holds the remaps that passed every check, in row order.
/// `skipped` lists rows that were incomplete or conflicted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ApplySummary<T> {
    pub applied: Vec<T>,
    pub skipped: Vec<RowId>,
}

impl<T> ApplySummary<T> {
    /// True when every row was applied.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Status line for the user.
    pub fn status_message(&self) -> &'static str {
        if self.is_complete() {
            "Remapping successful!"
        } else {
            "All remappings were not successfully applied."
        }
    }
}

#[cfg(test)]
mod tests;
