// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::error::EncodeError;
use crate::scheme::Scheme;
use crate::{base256, length_prefixed, uint256};

/// Latin-1 strings up to `max_chars` characters, full 0..=255 code range.
fn latin1_string(max_chars: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 0..=max_chars)
        .prop_map(|codes| codes.into_iter().map(char::from).collect())
}

/// Characters the layouts must reject.
fn non_latin1_char() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("code must exceed 255", |ch| *ch as u32 > 255)
}

proptest! {
    #[test]
    fn roundtrip_length_prefixed(text in latin1_string(length_prefixed::MAX_CHARS)) {
        let packed = length_prefixed::encode(&text).unwrap();
        prop_assert_eq!(length_prefixed::decode(packed).unwrap(), text);
    }

    #[test]
    fn roundtrip_uint256(text in latin1_string(uint256::MAX_CHARS)) {
        let packed = uint256::encode(&text).unwrap();
        prop_assert_eq!(uint256::decode(packed).unwrap(), text);
    }

    #[test]
    fn roundtrip_base256_with_length_hint(
        nul_prefix in 0..=4usize,
        tail in prop::collection::vec(any::<u8>(), 0..=base256::MAX_CHARS)
    ) {
        // NUL-led text past four characters still packs, so the hinted
        // round trip must hold beyond MAX_CHARS as well.
        let text: String = core::iter::repeat_n(0u8, nul_prefix)
            .chain(tail)
            .map(char::from)
            .collect();

        let packed = base256::encode(&text).unwrap();

        if packed == 0 {
            // All-NUL text packs to zero, and zero always unpacks empty.
            prop_assert!(text.chars().all(|ch| ch == '\0'));
            prop_assert_eq!(base256::decode(packed, None).unwrap(), "");
        } else {
            let hint = Some(text.chars().count());
            prop_assert_eq!(base256::decode(packed, hint).unwrap(), text);
        }
    }

    #[test]
    fn roundtrip_base256_inferred_without_leading_nul(
        first in 1u8..=255,
        rest in prop::collection::vec(any::<u8>(), 0..base256::MAX_CHARS)
    ) {
        let text: String = core::iter::once(first)
            .chain(rest)
            .map(char::from)
            .collect();

        let packed = base256::encode(&text).unwrap();
        prop_assert_eq!(base256::decode(packed, None).unwrap(), text);
    }

    #[test]
    fn roundtrip_auto_selected_scheme(text in latin1_string(uint256::MAX_CHARS)) {
        let scheme = Scheme::for_text(&text);
        let packed = scheme.encode(&text).unwrap();
        prop_assert_eq!(scheme.decode(packed).unwrap(), text);
    }

    #[test]
    fn non_latin1_rejected_by_every_scheme(bad in non_latin1_char()) {
        let text: String = ['n', bad].iter().collect();

        for scheme in [Scheme::Base256, Scheme::LengthPrefixed, Scheme::Uint256] {
            prop_assert_eq!(
                scheme.encode(&text),
                Err(EncodeError::NonAsciiCharacter {
                    ch: bad,
                    code: bad as u32
                })
            );
        }
    }

    #[test]
    fn over_capacity_rejected(text in latin1_string(60)) {
        let len = text.chars().count();

        if len > uint256::MAX_CHARS {
            prop_assert_eq!(
                uint256::encode(&text),
                Err(EncodeError::TextTooLong { len, max: uint256::MAX_CHARS })
            );
        }
        if len > length_prefixed::MAX_CHARS {
            prop_assert_eq!(
                length_prefixed::encode(&text),
                Err(EncodeError::TextTooLong { len, max: length_prefixed::MAX_CHARS })
            );
        }
    }
}
