// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::breakdown::{CharCode, character_breakdown};

#[test]
fn test_breakdown_lists_codes_in_order() {
    assert_eq!(
        character_breakdown("Luv"),
        vec![
            CharCode { ch: 'L', code: 76 },
            CharCode { ch: 'u', code: 117 },
            CharCode { ch: 'v', code: 118 },
        ]
    );
}

#[test]
fn test_breakdown_empty_string() {
    assert!(character_breakdown("").is_empty());
}

#[test]
fn test_breakdown_reports_non_latin1_instead_of_rejecting() {
    // Inspection must show what encode would reject.
    assert_eq!(
        character_breakdown("€"),
        vec![CharCode {
            ch: '€',
            code: 8364
        }]
    );
}
