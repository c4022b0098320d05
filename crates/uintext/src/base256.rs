// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Implicit-length base-256 packing into a `u32`.
//!
//! The oldest of the three layouts: each character becomes one base-256
//! digit, most significant first, with no length field. Four Latin-1
//! characters always fit (four code-255 digits pack to exactly `u32::MAX`);
//! longer text only fits when every character past the top four digits is
//! NUL.
//!
//! # Caveat
//!
//! Without a length hint the decoder infers the character count from the
//! value's magnitude, so leading NUL characters are lost: `"\0ab"` packs to
//! the same value as `"ab"`. Callers that round-trip NUL-prefixed text must
//! keep the original length and pass it to [`decode`]; hints may exceed
//! [`MAX_CHARS`], since every digit above the top byte of a `u32` is NUL by
//! construction. Hints smaller than the value's significant digit count are
//! rejected, because honoring them would drop the high bytes.
use alloc::string::String;

use crate::error::{DecodeError, EncodeError};
use crate::latin1::char_codes;

/// Number of base-256 digits a `u32` can always hold.
pub const MAX_CHARS: usize = 4;

/// Packs `text` into a `u32` as big-endian base-256 digits.
///
/// The empty string packs to zero.
pub fn encode(text: &str) -> Result<u32, EncodeError> {
    let codes = char_codes(text)?;
    let n = codes.len();

    let mut packed: u32 = 0;
    for (i, &code) in codes.iter().enumerate() {
        let exponent = n - 1 - i;
        if exponent >= MAX_CHARS {
            // A digit above the top byte fits only when it is zero.
            if code != 0 {
                return Err(EncodeError::TextTooLong { len: n, max: MAX_CHARS });
            }
            continue;
        }
        packed += u32::from(code) << (8 * exponent);
    }

    Ok(packed)
}

/// Unpacks `packed` back into text, one character per base-256 digit.
///
/// Zero unpacks to the empty string regardless of any hint. When
/// `original_length` is `None` the character count is inferred as the
/// smallest `k` with `256^k > packed` (see the module caveat on leading
/// NULs). Hints above [`MAX_CHARS`] reproduce the leading NULs that
/// [`encode`] accepted; hints below the value's significant digit count
/// (including zero) are rejected rather than dropping the high bytes.
pub fn decode(packed: u32, original_length: Option<usize>) -> Result<String, DecodeError> {
    if packed == 0 {
        return Ok(String::new());
    }

    let significant = inferred_length(packed);
    let length = match original_length {
        Some(len) => {
            if len < significant {
                return Err(DecodeError::InvalidLength {
                    length: len,
                    max: MAX_CHARS,
                });
            }
            len
        }
        None => significant,
    };

    let mut text = String::with_capacity(length);
    for i in (0..length).rev() {
        // Digits above the top byte of a u32 are NUL by construction.
        let code = if i < MAX_CHARS {
            ((packed >> (8 * i)) & 0xFF) as u8
        } else {
            0
        };
        text.push(char::from(code));
    }

    Ok(text)
}

/// Smallest `k` such that `256^k > packed`, for nonzero `packed`.
fn inferred_length(packed: u32) -> usize {
    let mut length = 1;
    while length < MAX_CHARS && (packed >> (8 * length)) != 0 {
        length += 1;
    }
    length
}
