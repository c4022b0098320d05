// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Latin-1 validation shared by the packing layouts.
use alloc::vec::Vec;

use crate::error::EncodeError;

/// Validates `text` as Latin-1 and returns one byte per character, in order.
///
/// The full 0–255 byte range is accepted, not just 7-bit ASCII. The first
/// character above 255 fails the whole conversion.
pub(crate) fn char_codes(text: &str) -> Result<Vec<u8>, EncodeError> {
    text.chars()
        .map(|ch| {
            let code = ch as u32;
            u8::try_from(code).map_err(|_| EncodeError::NonAsciiCharacter { ch, code })
        })
        .collect()
}
