//! Config module tests
//!
//! Contains test suites for remap file access and whole-file validation:
//! - ConfigManager path handling and loading
//! - RemapValidator reports
