//! Whole-file remap validation.
//!
//! Runs every parsed remap through the same checks an editor applies to a
//! single row, comparing each entry against the entries before it:
//! - **Key remaps**: remap to itself, original overlapping an earlier
//!   original
//! - **Shortcut remaps**: incomplete shortcuts, remap to itself, original
//!   overlapping an earlier original, OS-reserved shortcuts
//!
//! Issues are collected into a [`ValidationReport`] instead of stopping at
//! the first one, so the user sees every problem at once.
//!
//! # Example
//! ```
//! use keyremap_manager::config::validator::RemapValidator;
//! use keyremap_manager::core::parser::parse_remap_file;
//! use keyremap_manager::core::StandardLayout;
//!
//! let entries = parse_remap_file(
//!     "shortcut Ctrl+A -> Win+E\nshortcut LCtrl+A -> Win+R\n",
//!     &StandardLayout::new(),
//! )?;
//! let report = RemapValidator::new().validate(&entries);
//!
//! assert!(report.has_errors());
//! # Ok::<(), keyremap_manager::core::parser::ParseError>(())
//! ```

use serde::Serialize;
use tracing::debug;

use crate::core::parser::RemapEntry;
use crate::core::validator::{validate_key_remap, validate_shortcut_remap};
use crate::core::{
    evaluate_key_overlap, evaluate_shortcut_overlap, ConflictKind, KeyRemap, Remap, ShortcutRemap,
};

/// Validation severity level
///
/// - **Error**: The remap cannot be registered
/// - **Warning**: The remap works but is probably not what the user wants
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum ValidationLevel {
    Error,
    Warning,
}

/// What a validation issue is about
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum IssueKind {
    /// The remap is rejected for this reason
    Conflict(ConflictKind),
    /// A key remap targets a key that an earlier line remaps
    ChainedRemap,
}

impl From<ConflictKind> for IssueKind {
    fn from(kind: ConflictKind) -> Self {
        IssueKind::Conflict(kind)
    }
}

/// A single validation issue found in a remap file
#[derive(Clone, Debug, Serialize)]
pub struct ValidationIssue {
    /// Line of the offending remap (1-based)
    pub line: usize,
    /// Line of the earlier remap it conflicts with or depends on, if any
    pub conflicts_with: Option<usize>,
    /// Severity level
    pub validation_level: ValidationLevel,
    /// Classification of the problem
    pub kind: IssueKind,
    /// Human-readable description of the issue
    pub message: String,
}

/// Complete validation report for a remap file
#[derive(Debug, Default, Serialize)]
pub struct ValidationReport {
    /// All issues, in file order
    pub issues: Vec<ValidationIssue>,
    /// Number of remaps checked
    pub checked: usize,
}

impl ValidationReport {
    /// Creates a new empty validation report
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the report contains any Error-level issues
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Number of Error-level issues
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.validation_level == ValidationLevel::Error)
            .count()
    }

    /// Number of Warning-level issues
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.validation_level == ValidationLevel::Warning)
            .count()
    }

    /// Adds an Error-level issue to the report
    pub fn add_error(&mut self, line: usize, kind: ConflictKind, conflicts_with: Option<usize>) {
        self.issues.push(ValidationIssue {
            line,
            conflicts_with,
            validation_level: ValidationLevel::Error,
            kind: kind.into(),
            message: kind.message().to_string(),
        });
    }

    /// Adds a Warning-level issue to the report
    pub fn add_warning(
        &mut self,
        line: usize,
        kind: IssueKind,
        message: String,
        conflicts_with: Option<usize>,
    ) {
        self.issues.push(ValidationIssue {
            line,
            conflicts_with,
            validation_level: ValidationLevel::Warning,
            kind,
            message,
        });
    }
}

/// Validates a list of parsed remaps
#[derive(Clone, Copy, Debug, Default)]
pub struct RemapValidator;

impl RemapValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates every entry against itself and the entries before it.
    ///
    /// An entry with an error is not used as a reference for later
    /// entries, matching an editor where the offending row is rejected.
    pub fn validate(&self, entries: &[RemapEntry]) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut keys: Vec<(usize, KeyRemap)> = Vec::new();
        let mut shortcuts: Vec<(usize, ShortcutRemap)> = Vec::new();

        for entry in entries {
            report.checked += 1;

            let accepted = match entry.remap {
                Remap::Key(remap) => {
                    let ok = check_key(&mut report, entry.line, &remap, &keys);
                    if ok {
                        keys.push((entry.line, remap));
                    }
                    ok
                }
                Remap::Shortcut(remap) => {
                    let ok = check_shortcut(&mut report, entry.line, &remap, &shortcuts);
                    if ok {
                        shortcuts.push((entry.line, remap));
                    }
                    ok
                }
            };

            debug!(line = entry.line, accepted, "remap validated");
        }

        report
    }
}

fn check_key(
    report: &mut ValidationReport,
    line: usize,
    remap: &KeyRemap,
    earlier: &[(usize, KeyRemap)],
) -> bool {
    let kind = validate_key_remap(remap);
    if kind.is_error() {
        report.add_error(line, kind, None);
        return false;
    }

    let overlap = earlier
        .iter()
        .map(|(other_line, other)| {
            (*other_line, evaluate_key_overlap(other.original, remap.original))
        })
        .find(|(_, kind)| kind.is_error());

    if let Some((other_line, kind)) = overlap {
        report.add_error(line, kind, Some(other_line));
        return false;
    }

    // Remaps are not chained, so the target is sent as-is
    if let Some((other_line, _)) = earlier.iter().find(|(_, other)| other.original == remap.new) {
        report.add_warning(
            line,
            IssueKind::ChainedRemap,
            format!("Target key {} is itself remapped on line {}", remap.new, other_line),
            Some(*other_line),
        );
    }

    true
}

fn check_shortcut(
    report: &mut ValidationReport,
    line: usize,
    remap: &ShortcutRemap,
    earlier: &[(usize, ShortcutRemap)],
) -> bool {
    let kind = validate_shortcut_remap(remap);
    if kind.is_error() {
        report.add_error(line, kind, None);
        return false;
    }

    let overlap = earlier
        .iter()
        .map(|(other_line, other)| {
            (*other_line, evaluate_shortcut_overlap(&other.original, &remap.original))
        })
        .find(|(_, kind)| kind.is_error());

    if let Some((other_line, kind)) = overlap {
        report.add_error(line, kind, Some(other_line));
        return false;
    }

    true
}
