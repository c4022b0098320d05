// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Length-prefixed 30-character packing into a `U256`.
//!
//! The widest layout: the character count lives in the `256^30` slot and
//! each character is one base-256 digit below it, most significant first.
//! Thirty characters is the largest count that keeps the whole value under
//! `2^256` with the length digit in place; the densest value stays below
//! `2^245`, so the arithmetic can never overflow.
use alloc::string::String;

use alloy_primitives::U256;

use crate::error::{DecodeError, EncodeError};
use crate::latin1::char_codes;

/// Maximum characters the `U256` layout can carry.
pub const MAX_CHARS: usize = 30;

/// `256^30`, the slot holding the character count.
const LENGTH_SLOT: U256 = U256::from_limbs([0, 0, 0, 1 << 48]);

/// Packs up to thirty characters of `text` with an explicit length digit.
///
/// The empty string packs to [`U256::ZERO`].
pub fn encode(text: &str) -> Result<U256, EncodeError> {
    let n = text.chars().count();
    if n > MAX_CHARS {
        return Err(EncodeError::TextTooLong {
            len: n,
            max: MAX_CHARS,
        });
    }
    if n == 0 {
        return Ok(U256::ZERO);
    }

    let codes = char_codes(text)?;

    let mut packed = U256::from(n as u64) * LENGTH_SLOT;
    for (i, &code) in codes.iter().enumerate() {
        packed += U256::from(code) << (8 * (MAX_CHARS - 1 - i));
    }

    Ok(packed)
}

/// Unpacks a length-prefixed `U256` back into text.
///
/// Zero unpacks to the empty string. A length digit of zero with a nonzero
/// payload, or above [`MAX_CHARS`], is rejected as not produced by
/// [`encode`].
pub fn decode(packed: U256) -> Result<String, DecodeError> {
    if packed.is_zero() {
        return Ok(String::new());
    }

    // The length slot spans 16 bits at most, so the narrowing cannot panic.
    let length = (packed / LENGTH_SLOT).to::<usize>();
    if length == 0 || length > MAX_CHARS {
        return Err(DecodeError::InvalidLength {
            length,
            max: MAX_CHARS,
        });
    }

    let mut remaining = packed % LENGTH_SLOT;
    let mut text = String::with_capacity(length);
    for i in 0..length {
        let slot = U256::from(1u8) << (8 * (MAX_CHARS - 1 - i));
        let code = (remaining / slot).to::<u8>();
        remaining %= slot;
        text.push(char::from(code));
    }

    Ok(text)
}
