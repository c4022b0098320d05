// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Closed set of packing layouts behind one encode/decode surface.
//!
//! The per-layout modules stay usable on their own with their native
//! integer widths; [`Scheme`] widens everything to `U256` so callers that
//! hand values to an integer-only encryption boundary can treat all three
//! layouts uniformly.
use alloc::string::String;

use alloy_primitives::U256;

use crate::error::{DecodeError, EncodeError};
use crate::{base256, length_prefixed, uint256};

/// A text packing layout.
///
/// The three layouts reflect successive capacity upgrades and all remain
/// decodable; values already stored under an older layout keep working.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Scheme {
    /// Implicit-length base-256 digits in a `u32`. Legacy; cannot recover
    /// leading NULs without an out-of-band length.
    Base256,
    /// Length-prefixed decimal layout in a `u32`, up to 3 characters.
    LengthPrefixed,
    /// Length-prefixed base-256 layout in a `U256`, up to 30 characters.
    Uint256,
}

impl Scheme {
    /// Picks the layout used for newly packed text: [`Scheme::Uint256`]
    /// past three characters, [`Scheme::LengthPrefixed`] otherwise.
    /// [`Scheme::Base256`] is kept for reading old values and is never
    /// selected.
    pub fn for_text(text: &str) -> Self {
        if text.chars().count() > length_prefixed::MAX_CHARS {
            Self::Uint256
        } else {
            Self::LengthPrefixed
        }
    }

    /// Maximum characters the layout can carry.
    pub const fn max_chars(self) -> usize {
        match self {
            Self::Base256 => base256::MAX_CHARS,
            Self::LengthPrefixed => length_prefixed::MAX_CHARS,
            Self::Uint256 => uint256::MAX_CHARS,
        }
    }

    /// Largest integer the layout's width can represent.
    pub fn max_value(self) -> U256 {
        match self {
            Self::Base256 | Self::LengthPrefixed => U256::from(u32::MAX),
            Self::Uint256 => U256::MAX,
        }
    }

    /// Packs `text` under this layout, widening 32-bit layouts into `U256`.
    pub fn encode(self, text: &str) -> Result<U256, EncodeError> {
        match self {
            Self::Base256 => base256::encode(text).map(U256::from),
            Self::LengthPrefixed => length_prefixed::encode(text).map(U256::from),
            Self::Uint256 => uint256::encode(text),
        }
    }

    /// Unpacks `packed` under this layout.
    ///
    /// For the 32-bit layouts a value above `u32::MAX` fails with
    /// [`DecodeError::ValueOverflow`]. [`Scheme::Base256`] decodes with
    /// inferred length; callers holding an explicit length should use
    /// [`base256::decode`] directly.
    pub fn decode(self, packed: U256) -> Result<String, DecodeError> {
        match self {
            Self::Base256 => base256::decode(narrow(packed)?, None),
            Self::LengthPrefixed => length_prefixed::decode(narrow(packed)?),
            Self::Uint256 => uint256::decode(packed),
        }
    }
}

fn narrow(packed: U256) -> Result<u32, DecodeError> {
    u32::try_from(packed).map_err(|_| DecodeError::ValueOverflow)
}
