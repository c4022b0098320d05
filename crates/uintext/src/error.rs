// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for packing and unpacking.
use thiserror::Error;

/// Errors that can occur when packing text into an integer.
///
/// Packing either produces a value that unpacks to the original text, or
/// fails with one of these. Nothing is ever truncated or wrapped to force a
/// fit.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum EncodeError {
    /// A character's code point is outside the Latin-1 byte range.
    #[error("character '{ch}' has code {code} > 255, Latin-1 only")]
    NonAsciiCharacter {
        /// The offending character.
        ch: char,
        /// Its code point.
        code: u32,
    },

    /// The text has more characters than the layout can carry.
    #[error("text of {len} characters exceeds the layout's capacity of {max}")]
    TextTooLong {
        /// Character count of the input.
        len: usize,
        /// Maximum the layout supports.
        max: usize,
    },

    /// The packed value would exceed the layout's integer range.
    #[error("packed value exceeds the layout's integer range")]
    ValueOverflow,
}

/// Errors that can occur when unpacking an integer back into text.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DecodeError {
    /// The length field is zero with a nonzero payload, above the layout's
    /// maximum, or a length hint too small to reproduce the value. Either
    /// way the length cannot have described this value.
    #[error("invalid length {length} (layout maximum {max})")]
    InvalidLength {
        /// The extracted (or supplied) length.
        length: usize,
        /// Maximum the layout supports.
        max: usize,
    },

    /// The value does not fit the layout's integer width.
    #[error("value exceeds the layout's integer range")]
    ValueOverflow,
}
