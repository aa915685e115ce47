//! Single key remap buffer
//!
//! Each row holds an optional original key and an optional new key. Edits
//! are validated immediately:
//! - A key cannot be remapped to itself
//! - An original key cannot overlap another row's original key
//!
//! A rejected edit clears the cell, mirroring a picker that resets its
//! selection after showing the warning.

use tracing::debug;

use crate::core::validator::validate_key_remap;
use crate::core::{evaluate_key_overlap, ConflictKind, Key, KeyRemap};
use crate::editor::{ApplySummary, Column, EditError, RowId, RowIds};

#[derive(Clone, Debug)]
struct KeyRow {
    id: RowId,
    cells: [Option<Key>; 2],
    edited: bool,
}

/// Rows of single key remaps
#[derive(Clone, Debug, Default)]
pub struct KeyRemapTable {
    rows: Vec<KeyRow>,
    ids: RowIds,
}

impl KeyRemapTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an empty row.
    pub fn add_row(&mut self) -> RowId {
        let id = self.ids.issue();
        self.rows.push(KeyRow {
            id,
            cells: [None, None],
            edited: false,
        });
        id
    }

    /// Appends a row pre-filled with an existing remap.
    ///
    /// Loaded rows are not validated; [`KeyRemapTable::apply`] re-checks them.
    pub fn add_row_with(&mut self, remap: KeyRemap) -> RowId {
        let id = self.add_row();
        if let Some(row) = self.rows.last_mut() {
            row.cells = [non_null(remap.original), non_null(remap.new)];
        }
        id
    }

    /// Removes a row. Other row ids are unaffected.
    pub fn remove_row(&mut self, id: RowId) -> Result<(), EditError> {
        let position = self.position(id)?;
        self.rows.remove(position);
        debug!(row = %id, "key remap row removed");
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

    /// Returns the key in one cell.
    pub fn key(&self, id: RowId, column: Column) -> Result<Option<Key>, EditError> {
        let position = self.position(id)?;
        Ok(self.rows[position].cells[column.index()])
    }

    /// Sets one cell.
    ///
    /// `Key::NONE` clears the cell. On rejection the cell is cleared and
    /// the reason returned.
    pub fn set_key(&mut self, id: RowId, column: Column, key: Key) -> Result<(), EditError> {
        let position = self.position(id)?;
        self.rows[position].edited = true;

        if key.is_none() {
            self.rows[position].cells[column.index()] = None;
            return Ok(());
        }

        let verdict = self.check(position, column, key);
        let cell = &mut self.rows[position].cells[column.index()];
        match verdict {
            ConflictKind::NoError => {
                *cell = Some(key);
                debug!(row = %id, ?column, %key, "key remap cell set");
                Ok(())
            }
            kind => {
                *cell = None;
                debug!(row = %id, ?column, %key, reason = ?kind, "key remap cell rejected");
                Err(EditError::Rejected(kind))
            }
        }
    }

    /// True if the row was edited and is still missing a key.
    pub fn needs_warning(&self, id: RowId) -> Result<bool, EditError> {
        let row = &self.rows[self.position(id)?];
        Ok(row.edited && row.cells.iter().any(Option::is_none))
    }

    /// Collects every complete, non-conflicting row.
    ///
    /// Rows are checked in order; a row whose original overlaps an
    /// already applied row is skipped.
    pub fn apply(&self) -> ApplySummary<KeyRemap> {
        let mut applied: Vec<KeyRemap> = Vec::new();
        let mut skipped = Vec::new();

        for row in &self.rows {
            let remap = match row.cells {
                [Some(original), Some(new)] => KeyRemap { original, new },
                _ => {
                    skipped.push(row.id);
                    continue;
                }
            };

            let conflict = validate_key_remap(&remap).is_error()
                || applied
                    .iter()
                    .any(|a| evaluate_key_overlap(a.original, remap.original).is_error());

            if conflict {
                skipped.push(row.id);
            } else {
                applied.push(remap);
            }
        }

        debug!(applied = applied.len(), skipped = skipped.len(), "key remaps applied");
        ApplySummary { applied, skipped }
    }

    fn check(&self, position: usize, column: Column, key: Key) -> ConflictKind {
        let row = &self.rows[position];
        if row.cells[column.other().index()] == Some(key) {
            return ConflictKind::MapToSameKey;
        }

        if column == Column::Original {
            let overlap = self
                .rows
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != position)
                .filter_map(|(_, other)| other.cells[Column::Original.index()])
                .map(|other| evaluate_key_overlap(other, key))
                .find(|kind| kind.is_error());

            if let Some(kind) = overlap {
                return kind;
            }
        }

        ConflictKind::NoError
    }

    fn position(&self, id: RowId) -> Result<usize, EditError> {
        self.rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(EditError::UnknownRow(id))
    }
}

fn non_null(key: Key) -> Option<Key> {
    (!key.is_none()).then_some(key)
}
