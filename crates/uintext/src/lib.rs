// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Reversible text-to-integer packing for encrypted on-chain storage.
//!
//! Short Latin-1 strings are packed into fixed-width unsigned integers so
//! they can travel through integer-only encrypted computation and come back
//! out as the same string. Three layouts coexist, from the legacy 4-character
//! `u32` packing to the 30-character `U256` layout; [`Scheme`] dispatches
//! over all of them behind one encode/decode surface.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod breakdown;
mod error;
mod latin1;
mod scheme;

pub mod base256;
pub mod length_prefixed;
pub mod uint256;

pub use alloy_primitives::U256;
pub use breakdown::{CharCode, character_breakdown};
pub use error::{DecodeError, EncodeError};
pub use scheme::Scheme;
