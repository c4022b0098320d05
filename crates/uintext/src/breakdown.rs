// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Character-to-code inspection helper.
use alloc::vec::Vec;

/// One character of a string together with its code point.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CharCode {
    /// The character itself.
    pub ch: char,
    /// Its code point.
    pub code: u32,
}

/// Maps each character of `text` to its code point, in order.
///
/// Purely informational: codes above 255 are reported as-is so callers can
/// show exactly which characters a pack attempt would reject.
pub fn character_breakdown(text: &str) -> Vec<CharCode> {
    text.chars().map(|ch| CharCode { ch, code: ch as u32 }).collect()
}
