// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Demo: pack strings into integers and back, showing every step.
//
// Each argument (or a builtin sample set) is run through the auto-selected
// layout; when that fails, the legacy base-256 layout is tried as a
// fallback so the failure mode of each layout is visible side by side.

use uintext::{Scheme, base256, character_breakdown};

fn inspect(text: &str) {
    println!("text: {:?} ({} characters)", text, text.chars().count());

    let breakdown = character_breakdown(text);
    let codes: Vec<String> = breakdown
        .iter()
        .take(10)
        .map(|cc| format!("{:?}:{}", cc.ch, cc.code))
        .collect();
    let ellipsis = if breakdown.len() > 10 { ", ..." } else { "" };
    println!("codes: [{}{}]", codes.join(", "), ellipsis);

    let scheme = Scheme::for_text(text);
    match scheme.encode(text) {
        Ok(packed) => {
            println!("layout: {scheme:?}");
            println!("packed: {packed}");
            match scheme.decode(packed) {
                Ok(decoded) => println!("unpacked: {:?} (match: {})", decoded, decoded == text),
                Err(err) => println!("unpack failed: {err}"),
            }
        }
        Err(err) => {
            println!("{scheme:?} failed: {err}");

            // Legacy fallback, useful for text that fits four bytes.
            match base256::encode(text) {
                Ok(packed) => {
                    let decoded = base256::decode(packed, Some(text.chars().count()));
                    println!("Base256 fallback packed: {packed}, unpacked: {decoded:?}");
                }
                Err(err) => println!("Base256 fallback failed: {err}"),
            }
        }
    }

    println!();
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        for sample in ["Luv", "Hello, world!", "café", "€uro", ""] {
            inspect(sample);
        }
    } else {
        for arg in &args {
            inspect(arg);
        }
    }
}
