//! Layout-aware front end for the remap tables
//!
//! Key pickers report a selected index, not a key. [`RemapEditor`] owns
//! the keyboard layout that produced the picker lists and resolves indices
//! before forwarding edits to the tables.

use tracing::{debug, info};

use crate::core::parser::RemapEntry;
use crate::core::{Key, KeyboardLayout, Remap, Transition};
use crate::editor::{Column, EditError, KeyRemapTable, RowId, ShortcutRemapTable};

/// Both remap tables plus the layout used to populate their pickers
///
/// # Example
///
/// ```
/// use keyremap_manager::core::StandardLayout;
/// use keyremap_manager::editor::{Column, RemapEditor};
///
/// let mut editor = RemapEditor::new(StandardLayout::new());
/// let row = editor.key_table_mut().add_row();
///
/// // Index 0 of the single key picker is the first listed key
/// editor.select_key_index(row, Column::Original, 0)?;
/// assert!(editor.key_table().key(row, Column::Original)?.is_some());
/// # Ok::<(), keyremap_manager::editor::EditError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RemapEditor<L: KeyboardLayout> {
    layout: L,
    keys: KeyRemapTable,
    shortcuts: ShortcutRemapTable,
}

impl<L: KeyboardLayout> RemapEditor<L> {
    /// Creates an editor with empty tables.
    pub fn new(layout: L) -> Self {
        Self {
            layout,
            keys: KeyRemapTable::new(),
            shortcuts: ShortcutRemapTable::new(),
        }
    }

    /// Creates an editor whose shortcut table uses a custom length limit.
    pub fn with_max_shortcut_keys(layout: L, max_keys: usize) -> Self {
        Self {
            layout,
            keys: KeyRemapTable::new(),
            shortcuts: ShortcutRemapTable::with_max_keys(max_keys),
        }
    }

    /// Loads parsed remaps as pre-filled rows.
    ///
    /// Returns the number of rows added.
    pub fn load(&mut self, entries: &[RemapEntry]) -> usize {
        for entry in entries {
            match entry.remap {
                Remap::Key(remap) => {
                    self.keys.add_row_with(remap);
                }
                Remap::Shortcut(remap) => {
                    self.shortcuts.add_row_with(remap);
                }
            }
        }

        info!(
            keys = self.keys.len(),
            shortcuts = self.shortcuts.len(),
            "remaps loaded into editor"
        );
        entries.len()
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Replaces the layout, e.g. after the user switches input language.
    ///
    /// Table contents are key codes and stay valid; only picker lists
    /// change.
    pub fn set_layout(&mut self, layout: L) {
        self.layout = layout;
    }

    pub fn key_table(&self) -> &KeyRemapTable {
        &self.keys
    }

    pub fn key_table_mut(&mut self) -> &mut KeyRemapTable {
        &mut self.keys
    }

    pub fn shortcut_table(&self) -> &ShortcutRemapTable {
        &self.shortcuts
    }

    pub fn shortcut_table_mut(&mut self) -> &mut ShortcutRemapTable {
        &mut self.shortcuts
    }

    /// Names shown in a picker.
    pub fn picker_names(&self, for_shortcut: bool) -> Vec<String> {
        self.layout.key_names(for_shortcut)
    }

    /// Applies a single key picker selection.
    ///
    /// An index outside the picker list (including -1, "no selection")
    /// clears the cell.
    pub fn select_key_index(
        &mut self,
        row: RowId,
        column: Column,
        index: i32,
    ) -> Result<(), EditError> {
        match self.layout.key_at(index, false) {
            Some(key) => self.keys.set_key(row, column, key),
            None => {
                debug!(%row, ?column, index, "picker index out of range, clearing cell");
                self.keys.set_key(row, column, Key::NONE)
            }
        }
    }

    /// Applies a shortcut picker selection to one slot.
    ///
    /// Returns `Ok(None)` when the index was outside the picker list and
    /// the slot was cleared.
    pub fn select_shortcut_index(
        &mut self,
        row: RowId,
        column: Column,
        slot: usize,
        index: i32,
    ) -> Result<Option<Transition>, EditError> {
        match self.layout.key_at(index, true) {
            Some(key) => self.shortcuts.select(row, column, slot, key).map(Some),
            None => {
                debug!(%row, ?column, slot, index, "picker index out of range, clearing slot");
                self.shortcuts.clear_slot(row, column, slot).map(|_| None)
            }
        }
    }
}
