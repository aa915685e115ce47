//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Key and shortcut conflict detection
//! - Shortcut builder state machine
//! - Remap pair validation (self remaps, reserved shortcuts)
//! - Type tests (Key, Shortcut, remap display)
//! - Remap file parsing
//! - Property tests for the conflict evaluators

#[cfg(test)]
mod parser_tests;
#[cfg(test)]
mod validator_tests;
