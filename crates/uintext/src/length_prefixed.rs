// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Length-prefixed 3-character packing into a `u32`.
//!
//! Decimal layout: the billions digit carries the character count, then one
//! thousand-wide slot per character (`1000^2`, `1000^1`, `1000^0`), each
//! holding a code in `0..=255`. The densest value, three code-255
//! characters, packs to `3_255_255_255` and stays under `u32::MAX`, so the
//! layout can never overflow. Unlike [`base256`](crate::base256) the length
//! travels inside the value, which makes NUL characters and trailing
//! structure fully recoverable.
use alloc::string::String;

use crate::error::{DecodeError, EncodeError};
use crate::latin1::char_codes;

/// Maximum characters the decimal layout can carry.
pub const MAX_CHARS: usize = 3;

/// The decimal slot holding the character count.
const LENGTH_SLOT: u32 = 1_000_000_000;

/// Packs up to three characters of `text` with an explicit length digit.
///
/// The empty string packs to zero.
pub fn encode(text: &str) -> Result<u32, EncodeError> {
    let n = text.chars().count();
    if n > MAX_CHARS {
        return Err(EncodeError::TextTooLong {
            len: n,
            max: MAX_CHARS,
        });
    }
    if n == 0 {
        return Ok(0);
    }

    let codes = char_codes(text)?;

    let mut packed = n as u32 * LENGTH_SLOT;
    for (i, &code) in codes.iter().enumerate() {
        packed += u32::from(code) * 1000u32.pow((MAX_CHARS - 1 - i) as u32);
    }

    Ok(packed)
}

/// Unpacks a length-prefixed `u32` back into text.
///
/// Zero unpacks to the empty string. A length digit of zero with a nonzero
/// payload, or above [`MAX_CHARS`], is rejected as not produced by
/// [`encode`].
pub fn decode(packed: u32) -> Result<String, DecodeError> {
    if packed == 0 {
        return Ok(String::new());
    }

    let length = (packed / LENGTH_SLOT) as usize;
    if length == 0 || length > MAX_CHARS {
        return Err(DecodeError::InvalidLength {
            length,
            max: MAX_CHARS,
        });
    }

    let mut remaining = packed % LENGTH_SLOT;
    let mut text = String::with_capacity(length);
    for i in 0..length {
        let slot = 1000u32.pow((MAX_CHARS - 1 - i) as u32);
        let code = remaining / slot;
        remaining %= slot;

        // A slot above 255 means the value was not produced by `encode`;
        // the code point is passed through rather than truncated. Slots are
        // bounded by 999, so the conversion cannot fail.
        text.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    Ok(text)
}
