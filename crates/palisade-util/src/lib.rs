// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-level helpers shared across the Palisade crates.
//!
//! - [`constant_time_eq`]: full-width comparison without data-dependent
//!   early exit, for authentication tags.
//! - [`fast_zeroize_slice`]: volatile wipe of key or plaintext material.
//! - [`is_slice_zeroized`]: verification helper for zeroization tests.
//! - [`hex_to_bytes`]: test-vector decoding.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

use alloc::vec::Vec;
use core::sync::atomic::{Ordering, compiler_fence};

/// Compares two byte slices in constant time.
///
/// Every byte pair is examined regardless of earlier mismatches, so the
/// duration reveals nothing about where two values first differ. Slices
/// of different lengths compare unequal immediately; lengths are public.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }

    core::hint::black_box(diff) == 0
}

/// Overwrites a slice with zeros.
///
/// Uses volatile writes followed by a compiler fence so the wipe cannot
/// be elided even when the slice is dropped immediately afterwards.
pub fn fast_zeroize_slice(slice: &mut [u8]) {
    for byte in slice.iter_mut() {
        // SAFETY: `byte` is a valid, aligned reference into the slice.
        unsafe { core::ptr::write_volatile(byte, 0) };
    }
    compiler_fence(Ordering::SeqCst);
}

/// Returns `true` if every byte of the slice is zero.
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&byte| byte == 0)
}

/// Decodes a hex string into bytes. Test-vector helper.
///
/// # Panics
///
/// Panics on odd-length input or non-hex characters.
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string must have even length");
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}
