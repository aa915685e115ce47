//! Editor module tests
//!
//! Contains test suites for the remap tables:
//! - Single key table edits and apply
//! - Shortcut table edits, slot rejection and apply
//! - Picker index handling in RemapEditor

#[cfg(test)]
mod key_table_tests;
