use thiserror::Error;

use crate::core::ConflictKind;
use crate::editor::RowId;

/// Errors returned by remap table edits.
#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    /// The row id was never issued or has been removed.
    #[error("Unknown row: {0}")]
    UnknownRow(RowId),
    /// The edit was rejected; the message is meant for the user.
    #[error("{0}")]
    Rejected(ConflictKind),
}

impl From<ConflictKind> for EditError {
    fn from(kind: ConflictKind) -> Self {
        EditError::Rejected(kind)
    }
}
