// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ASCON-128 parameter set: constants and type aliases.
//!
//! All sizes derive from the key length. The 20-byte key set named by
//! the ASCON family would derive a zero rate under this state layout
//! (40 − 2·20) and is therefore not offered.

/// Key size: 128 bits (16 bytes)
pub const KEY_SIZE: usize = 16;
/// Nonce size: 128 bits (16 bytes)
pub const NONCE_SIZE: usize = 16;
/// Tag size: equal to the key size
pub const TAG_SIZE: usize = KEY_SIZE;
/// Sponge state size: 320 bits (40 bytes)
pub const STATE_SIZE: usize = 40;
/// Capacity portion of the state, hidden from direct I/O
pub const CAPACITY: usize = 2 * KEY_SIZE;
/// Rate portion of the state, XORed with input/output blocks
pub const RATE: usize = STATE_SIZE - CAPACITY;
/// Rounds of the full permutation (initialization and finalization)
pub const ROUNDS_A: usize = 12;
/// Rounds of the partial permutation (block processing)
pub const ROUNDS_B: usize = 6;

/// ASCON-128 key type
pub type Ascon128Key = [u8; KEY_SIZE];
/// ASCON-128 nonce type
pub type Ascon128Nonce = [u8; NONCE_SIZE];
/// ASCON-128 tag type
pub type Ascon128Tag = [u8; TAG_SIZE];
