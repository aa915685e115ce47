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

//! src/core/parser.rs
//!
//! Remap file parser
//!
//! This module parses remap files into key and shortcut remaps.
//! It handles:
//! - Single key remaps: `key CapsLock -> Esc`
//! - Shortcut remaps: `shortcut Ctrl+Shift+A -> Win+E`
//! - Comments (`#`) and blank lines
//! - Line numbers for error reporting
//!
//! # Architecture
//! The parser uses nom combinators for the line structure and works in
//! two steps:
//! 1. Split each line into its kind and the raw key names on each side
//! 2. Resolve names to keys through a [`KeyboardLayout`]
//!
//! The parser only checks shape. Whether remaps conflict with each other is
//! decided by [`crate::config::validator::RemapValidator`].

use nom::{
    branch::alt,
    bytes::complete::{tag, take_until},
    character::complete::{space0, space1},
    combinator::{map, rest},
    IResult, Parser,
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::core::builder::{BuilderState, ShortcutBuilder};
use crate::core::conflict::ConflictKind;
use crate::core::layout::KeyboardLayout;
use crate::core::types::{Key, KeyRemap, Remap, Shortcut, ShortcutRemap};

/// Parse errors with line number context
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },

    #[error("Unknown key '{name}' on line {line}")]
    UnknownKey { name: String, line: usize },

    #[error("'{name}' on line {line} cannot be used as a single key remap")]
    NotASingleKey { name: String, line: usize },

    #[error("Invalid shortcut '{text}' on line {line}: {reason}")]
    InvalidShortcut {
        text: String,
        line: usize,
        reason: ConflictKind,
    },
}

/// A parsed remap and the line it came from
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct RemapEntry {
    /// 1-based line number
    pub line: usize,
    pub remap: Remap,
}

/// Kind of remap line, before name resolution
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineKind {
    Key,
    Shortcut,
}

/// A remap line split into its parts
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RawRemap<'a> {
    pub kind: LineKind,
    pub original: &'a str,
    pub new: &'a str,
}

/// Parse a complete remap file
///
/// # Arguments
/// * `content` - The full file content
/// * `layout` - Layout used to resolve key names
///
/// # Returns
/// All remaps in file order, or the first error encountered
///
/// # Example
/// ```
/// use keyremap_manager::core::layout::StandardLayout;
/// use keyremap_manager::core::parser::parse_remap_file;
///
/// let content = "key CapsLock -> Esc\nshortcut Ctrl+Shift+A -> Win+E\n";
/// let entries = parse_remap_file(content, &StandardLayout::new())?;
/// assert_eq!(entries.len(), 2);
/// # Ok::<(), keyremap_manager::core::parser::ParseError>(())
/// ```
pub fn parse_remap_file<L: KeyboardLayout + ?Sized>(
    content: &str,
    layout: &L,
) -> Result<Vec<RemapEntry>, ParseError> {
    let mut entries = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1; // Human-readable numbers start at 1

        // Skip empty lines and comments
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let raw = match parse_remap_line(line_trimmed) {
            Ok((_, raw)) => raw,
            Err(e) => {
                return Err(ParseError::InvalidSyntax {
                    line: line_num,
                    message: format!("{:?}", e),
                });
            }
        };

        let remap = resolve_remap(&raw, line_num, layout)?;
        debug!(line = line_num, %remap, "parsed remap");
        entries.push(RemapEntry {
            line: line_num,
            remap,
        });
    }

    Ok(entries)
}

/// Parse a single remap line
///
/// Format: `key <NAME> -> <NAME>` or `shortcut <COMBO> -> <COMBO>`
pub fn parse_remap_line(input: &str) -> IResult<&str, RawRemap<'_>> {
    let (input, kind) = parse_line_kind(input)?;
    let (input, original) = take_until("->")(input)?;
    let (input, _) = (tag("->"), space0).parse(input)?;
    let (input, new) = rest(input)?;

    let original = original.trim();
    let new = new.trim();
    if original.is_empty() || new.is_empty() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::NonEmpty,
        )));
    }

    Ok((input, RawRemap { kind, original, new }))
}

/// Parse the leading keyword (`key` or `shortcut`) and its separator.
pub fn parse_line_kind(input: &str) -> IResult<&str, LineKind> {
    let (input, kind) = map(alt((tag("shortcut"), tag("key"))), |s: &str| match s {
        "key" => LineKind::Key,
        _ => LineKind::Shortcut,
    })
    .parse(input)?;
    let (input, _) = space1(input)?;

    Ok((input, kind))
}

/// Resolves the names of a raw remap line into keys.
pub fn resolve_remap<L: KeyboardLayout + ?Sized>(
    raw: &RawRemap<'_>,
    line: usize,
    layout: &L,
) -> Result<Remap, ParseError> {
    match raw.kind {
        LineKind::Key => Ok(Remap::Key(KeyRemap {
            original: resolve_single_key(raw.original, line, layout)?,
            new: resolve_single_key(raw.new, line, layout)?,
        })),
        LineKind::Shortcut => Ok(Remap::Shortcut(ShortcutRemap {
            original: parse_shortcut(raw.original, line, layout)?,
            new: parse_shortcut(raw.new, line, layout)?,
        })),
    }
}

/// Parse a `+`-separated shortcut such as `Ctrl+Shift+A`
///
/// Keys are fed through a [`ShortcutBuilder`], so the shortcut must start
/// with a modifier, cannot repeat a modifier kind, and may only end with
/// an action key. A shortcut made only of modifiers is returned as-is
/// (invalid) and reported later by validation.
pub fn parse_shortcut<L: KeyboardLayout + ?Sized>(
    text: &str,
    line: usize,
    layout: &L,
) -> Result<Shortcut, ParseError> {
    let mut builder = ShortcutBuilder::new();

    for name in text.split('+') {
        let key = resolve_key(name, line, layout)?;

        let appended = if builder.state() == BuilderState::CompleteShortcut {
            Err(ConflictKind::ShortcutNotMoreThanOneActionKey)
        } else {
            builder.append(key)
        };

        appended.map_err(|reason| ParseError::InvalidShortcut {
            text: text.to_string(),
            line,
            reason,
        })?;
    }

    Ok(builder.shortcut())
}

fn resolve_key<L: KeyboardLayout + ?Sized>(
    name: &str,
    line: usize,
    layout: &L,
) -> Result<Key, ParseError> {
    layout
        .key_from_name(name)
        .ok_or_else(|| ParseError::UnknownKey {
            name: name.trim().to_string(),
            line,
        })
}

fn resolve_single_key<L: KeyboardLayout + ?Sized>(
    name: &str,
    line: usize,
    layout: &L,
) -> Result<Key, ParseError> {
    let key = resolve_key(name, line, layout)?;

    if layout.key_codes(false).contains(&key) {
        Ok(key)
    } else {
        Err(ParseError::NotASingleKey {
            name: name.trim().to_string(),
            line,
        })
    }
}
