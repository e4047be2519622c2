// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The 320-bit permutation: round-constant addition, a five-word
//! AND/NOT/XOR substitution layer and a rotation-based linear layer.

use super::consts::{ROUNDS_A, STATE_SIZE};

/// Canonical 12-round constant schedule. A reduced-round permutation
/// consumes the trailing entries, so round i of p^b equals round
/// (12 − b + i) of p^12.
const ROUND_CONSTANTS: [u64; ROUNDS_A] = [
    0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b,
];

/// Applies `rounds` rounds of the permutation to the state.
///
/// Control flow and memory access are independent of the state
/// contents; timing observable from outside the node reveals nothing
/// about key or message material. No table lookups.
pub(crate) fn permute(state: &mut [u8; STATE_SIZE], rounds: usize) {
    debug_assert!(rounds <= ROUNDS_A);

    let mut x0 = load_word(state, 0);
    let mut x1 = load_word(state, 1);
    let mut x2 = load_word(state, 2);
    let mut x3 = load_word(state, 3);
    let mut x4 = load_word(state, 4);

    for &rc in &ROUND_CONSTANTS[ROUNDS_A - rounds..] {
        // round constant into word 2
        x2 ^= rc;

        // substitution layer
        x0 ^= x4;
        x4 ^= x3;
        x2 ^= x1;
        let t0 = !x0 & x1;
        let t1 = !x1 & x2;
        let t2 = !x2 & x3;
        let t3 = !x3 & x4;
        let t4 = !x4 & x0;
        x0 ^= t1;
        x1 ^= t2;
        x2 ^= t3;
        x3 ^= t4;
        x4 ^= t0;
        x1 ^= x0;
        x0 ^= x4;
        x3 ^= x2;
        x2 = !x2;

        // linear diffusion layer
        x0 ^= x0.rotate_right(19) ^ x0.rotate_right(28);
        x1 ^= x1.rotate_right(61) ^ x1.rotate_right(39);
        x2 ^= x2.rotate_right(1) ^ x2.rotate_right(6);
        x3 ^= x3.rotate_right(10) ^ x3.rotate_right(17);
        x4 ^= x4.rotate_right(7) ^ x4.rotate_right(41);
    }

    store_word(state, 0, x0);
    store_word(state, 1, x1);
    store_word(state, 2, x2);
    store_word(state, 3, x3);
    store_word(state, 4, x4);
}

/// Loads state word `i`, big-endian.
fn load_word(state: &[u8; STATE_SIZE], i: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&state[i * 8..(i + 1) * 8]);
    u64::from_be_bytes(bytes)
}

/// Stores state word `i`, big-endian.
fn store_word(state: &mut [u8; STATE_SIZE], i: usize, word: u64) {
    state[i * 8..(i + 1) * 8].copy_from_slice(&word.to_be_bytes());
}
