//! Shortcut remap buffer
//!
//! Each cell is edited slot by slot through a [`ShortcutBuilder`]. An edit
//! passes two gates:
//! 1. Builder rules (shape of the shortcut). A rejection leaves the cell
//!    untouched.
//! 2. Table rules: not remapped to itself, no overlap with another row's
//!    original shortcut, not an OS-reserved shortcut. A rejection clears
//!    the edited slot and keeps the rest of the cell, unless the rest
//!    fails the same checks, in which case the whole cell is cleared.

use tracing::debug;

use crate::core::builder::DEFAULT_MAX_KEYS;
use crate::core::validator::{illegal_reason, validate_shortcut_remap};
use crate::core::{
    evaluate_shortcut_overlap, ConflictKind, Key, Shortcut, ShortcutBuilder, ShortcutRemap,
    Transition,
};
use crate::editor::{ApplySummary, Column, EditError, RowId, RowIds};

#[derive(Clone, Debug)]
struct ShortcutRow {
    id: RowId,
    cells: [ShortcutBuilder; 2],
    edited: bool,
}

/// Rows of shortcut remaps
#[derive(Clone, Debug)]
pub struct ShortcutRemapTable {
    rows: Vec<ShortcutRow>,
    ids: RowIds,
    max_keys: usize,
}

impl Default for ShortcutRemapTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutRemapTable {
    /// Creates an empty table whose shortcuts hold up to five keys.
    pub fn new() -> Self {
        Self::with_max_keys(DEFAULT_MAX_KEYS)
    }

    /// Creates an empty table with a custom shortcut length limit.
    pub fn with_max_keys(max_keys: usize) -> Self {
        Self {
            rows: Vec::new(),
            ids: RowIds::default(),
            max_keys,
        }
    }

    /// Appends an empty row.
    pub fn add_row(&mut self) -> RowId {
        let id = self.ids.issue();
        self.rows.push(ShortcutRow {
            id,
            cells: [
                ShortcutBuilder::with_max_keys(self.max_keys),
                ShortcutBuilder::with_max_keys(self.max_keys),
            ],
            edited: false,
        });
        id
    }

    /// Appends a row pre-filled with an existing remap.
    ///
    /// Loaded rows are not validated; [`ShortcutRemapTable::apply`]
    /// re-checks them.
    pub fn add_row_with(&mut self, remap: ShortcutRemap) -> RowId {
        let id = self.ids.issue();
        self.rows.push(ShortcutRow {
            id,
            cells: [
                ShortcutBuilder::from_shortcut(&remap.original, self.max_keys),
                ShortcutBuilder::from_shortcut(&remap.new, self.max_keys),
            ],
            edited: false,
        });
        id
    }

    /// Removes a row. Other row ids are unaffected.
    pub fn remove_row(&mut self, id: RowId) -> Result<(), EditError> {
        let position = self.position(id)?;
        self.rows.remove(position);
        debug!(row = %id, "shortcut remap row removed");
        Ok(())
    }

    /// Row ids in display order.
    pub fn row_ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|row| row.id).collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The builder behind one cell, for rendering its slots.
    pub fn cell(&self, id: RowId, column: Column) -> Result<&ShortcutBuilder, EditError> {
        let position = self.position(id)?;
        Ok(&self.rows[position].cells[column.index()])
    }

    /// The shortcut currently described by one cell.
    pub fn shortcut(&self, id: RowId, column: Column) -> Result<Shortcut, EditError> {
        Ok(self.cell(id, column)?.shortcut())
    }

    /// Selects `key` into one slot of one cell.
    pub fn select(
        &mut self,
        id: RowId,
        column: Column,
        slot: usize,
        key: Key,
    ) -> Result<Transition, EditError> {
        let position = self.position(id)?;
        self.rows[position].edited = true;

        let current = &self.rows[position].cells[column.index()];
        let slot = slot.min(current.slots().len().saturating_sub(1));
        let mut candidate = current.clone();
        let transition = candidate.select(slot, key)?;

        match self.check(position, column, &candidate.shortcut()) {
            ConflictKind::NoError => {
                self.rows[position].cells[column.index()] = candidate;
                Ok(transition)
            }
            kind => {
                self.clear_and_recheck(position, column, slot);
                debug!(
                    row = %id, ?column, slot, %key, reason = ?kind,
                    "shortcut remap cell rejected"
                );
                Err(EditError::Rejected(kind))
            }
        }
    }

    /// Clears one slot without applying builder rules.
    pub fn clear_slot(&mut self, id: RowId, column: Column, slot: usize) -> Result<(), EditError> {
        let position = self.position(id)?;
        self.rows[position].edited = true;
        self.clear_and_recheck(position, column, slot);
        Ok(())
    }

    /// True if the row was edited and either shortcut is incomplete.
    pub fn needs_warning(&self, id: RowId) -> Result<bool, EditError> {
        let row = &self.rows[self.position(id)?];
        Ok(row.edited && row.cells.iter().any(|cell| !cell.shortcut().is_valid()))
    }

    /// Collects every complete, non-conflicting row.
    pub fn apply(&self) -> ApplySummary<ShortcutRemap> {
        let mut applied: Vec<ShortcutRemap> = Vec::new();
        let mut skipped = Vec::new();

        for row in &self.rows {
            let remap = ShortcutRemap {
                original: row.cells[Column::Original.index()].shortcut(),
                new: row.cells[Column::New.index()].shortcut(),
            };

            let conflict = validate_shortcut_remap(&remap).is_error()
                || applied
                    .iter()
                    .any(|a| evaluate_shortcut_overlap(&a.original, &remap.original).is_error());

            if conflict {
                skipped.push(row.id);
            } else {
                applied.push(remap);
            }
        }

        debug!(applied = applied.len(), skipped = skipped.len(), "shortcut remaps applied");
        ApplySummary { applied, skipped }
    }

    fn check(&self, position: usize, column: Column, shortcut: &Shortcut) -> ConflictKind {
        let row = &self.rows[position];
        let other = row.cells[column.other().index()].shortcut();
        if !shortcut.is_empty() && *shortcut == other {
            return ConflictKind::MapToSameShortcut;
        }

        if column == Column::Original {
            let overlap = self
                .rows
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != position)
                .map(|(_, other)| other.cells[Column::Original.index()].shortcut())
                .map(|original| evaluate_shortcut_overlap(&original, shortcut))
                .find(|kind| kind.is_error());

            if let Some(kind) = overlap {
                return kind;
            }
        }

        illegal_reason(shortcut)
    }

    /// Clears one slot, then empties the whole cell if what is left still
    /// fails the table checks (e.g. clearing Shift from `Ctrl+Shift+A`
    /// leaves `Ctrl+A`, which may equal the other column).
    fn clear_and_recheck(&mut self, position: usize, column: Column, slot: usize) {
        let mut leftover = self.rows[position].cells[column.index()].clone();
        leftover.reset_slot(slot);

        let verdict = self.check(position, column, &leftover.shortcut());
        if verdict.is_error() {
            debug!(?column, slot, reason = ?verdict, "remaining shortcut rejected, cell cleared");
            leftover = ShortcutBuilder::with_max_keys(self.max_keys);
        }

        self.rows[position].cells[column.index()] = leftover;
    }

    fn position(&self, id: RowId) -> Result<usize, EditError> {
        self.rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(EditError::UnknownRow(id))
    }
}
