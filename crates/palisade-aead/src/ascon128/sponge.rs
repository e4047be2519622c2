// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Duplex sponge controller: state initialization with key whitening,
//! associated-data absorption with domain separation, streaming body
//! transform, and tag finalization.
//!
//! Body processing is streaming — one rate-sized block buffer, never a
//! padded copy of the whole message.

use palisade_util::fast_zeroize_slice;

use super::consts::{
    Ascon128Key, Ascon128Nonce, Ascon128Tag, KEY_SIZE, RATE, ROUNDS_A, ROUNDS_B, STATE_SIZE,
    TAG_SIZE,
};
use super::permutation::permute;

/// Processing phase. Transitions are fixed:
/// Initialized → AadAbsorbed → BodyProcessed → finalized (consumed).
/// None may be skipped, including AAD absorption for empty AAD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Initialized,
    AadAbsorbed,
    BodyProcessed,
}

/// One AEAD invocation's sponge state.
///
/// Constructed fresh per call, consumed by [`Sponge::finalize`],
/// zeroized on drop. Never shared between invocations.
pub(crate) struct Sponge {
    state: [u8; STATE_SIZE],
    phase: Phase,
}

impl Sponge {
    /// Initializes the state from key and nonce.
    ///
    /// Rate bytes carry the parameter header (key bits, round counts);
    /// capacity bytes carry key ‖ nonce. After the full permutation the
    /// key is XORed back into the trailing capacity bytes (whitening).
    /// Identical for encrypt and decrypt.
    pub(crate) fn init(key: &Ascon128Key, nonce: &Ascon128Nonce) -> Self {
        let mut state = [0u8; STATE_SIZE];
        state[0] = (KEY_SIZE * 8) as u8;
        state[1] = ROUNDS_A as u8;
        state[2] = ROUNDS_B as u8;
        state[RATE..RATE + KEY_SIZE].copy_from_slice(key);
        state[RATE + KEY_SIZE..].copy_from_slice(nonce);

        permute(&mut state, ROUNDS_A);

        for (byte, k) in state[RATE + KEY_SIZE..].iter_mut().zip(key) {
            *byte ^= k;
        }

        Self {
            state,
            phase: Phase::Initialized,
        }
    }

    /// Absorbs associated data and marks the transition to body
    /// processing.
    ///
    /// Non-empty AAD is padded with 0x80-then-zeros to a rate multiple
    /// (an exact multiple gains a full padding block). The
    /// domain-separation bit in the final state byte is flipped
    /// unconditionally, for empty AAD too.
    pub(crate) fn absorb_aad(&mut self, aad: &[u8]) {
        debug_assert_eq!(self.phase, Phase::Initialized);

        if !aad.is_empty() {
            let mut blocks = aad.chunks_exact(RATE);
            for block in blocks.by_ref() {
                self.xor_into_rate(block);
                permute(&mut self.state, ROUNDS_B);
            }

            let remainder = blocks.remainder();
            let mut last = [0u8; RATE];
            last[..remainder.len()].copy_from_slice(remainder);
            last[remainder.len()] = 0x80;
            self.xor_into_rate(&last);
            permute(&mut self.state, ROUNDS_B);
        }

        self.state[STATE_SIZE - 1] ^= 1;
        self.phase = Phase::AadAbsorbed;
    }

    /// Transforms plaintext to ciphertext in place.
    ///
    /// Full blocks: XOR into the rate portion, emit the rate bytes,
    /// permute. Final block: absorb the padded remainder but emit only
    /// the live bytes — padding never leaves the state.
    pub(crate) fn encrypt_body(&mut self, data: &mut [u8]) {
        debug_assert_eq!(self.phase, Phase::AadAbsorbed);

        let mut blocks = data.chunks_exact_mut(RATE);
        for block in blocks.by_ref() {
            for (s, byte) in self.state[..RATE].iter_mut().zip(block.iter_mut()) {
                *s ^= *byte;
                *byte = *s;
            }
            permute(&mut self.state, ROUNDS_B);
        }

        let tail = blocks.into_remainder();
        let mut last = [0u8; RATE];
        last[..tail.len()].copy_from_slice(tail);
        last[tail.len()] = 0x80;
        self.xor_into_rate(&last);
        tail.copy_from_slice(&self.state[..tail.len()]);

        self.phase = Phase::BodyProcessed;
    }

    /// Recovers plaintext from ciphertext in place.
    ///
    /// Duplex rule: after each full block the rate portion is
    /// OVERWRITTEN with the ciphertext block, not XORed as on the
    /// encrypt side. For the final partial block the live bytes are
    /// replaced and the next state byte mirrors the padding bit.
    pub(crate) fn decrypt_body(&mut self, data: &mut [u8]) {
        debug_assert_eq!(self.phase, Phase::AadAbsorbed);

        let mut blocks = data.chunks_exact_mut(RATE);
        for block in blocks.by_ref() {
            for (s, byte) in self.state[..RATE].iter_mut().zip(block.iter_mut()) {
                let c = *byte;
                *byte = *s ^ c;
                *s = c;
            }
            permute(&mut self.state, ROUNDS_B);
        }

        let tail = blocks.into_remainder();
        for (s, byte) in self.state[..tail.len()].iter_mut().zip(tail.iter_mut()) {
            let c = *byte;
            *byte = *s ^ c;
            *s = c;
        }
        self.state[tail.len()] ^= 0x80;

        self.phase = Phase::BodyProcessed;
    }

    /// Derives the authentication tag: key whitening around a full
    /// permutation. Consumes the sponge; the state is wiped on drop.
    pub(crate) fn finalize(mut self, key: &Ascon128Key) -> Ascon128Tag {
        debug_assert_eq!(self.phase, Phase::BodyProcessed);

        for (s, k) in self.state[RATE..RATE + KEY_SIZE].iter_mut().zip(key) {
            *s ^= k;
        }
        permute(&mut self.state, ROUNDS_A);

        let mut tag = [0u8; TAG_SIZE];
        for ((t, s), k) in tag
            .iter_mut()
            .zip(&self.state[RATE + KEY_SIZE..])
            .zip(key)
        {
            *t = s ^ k;
        }
        tag
    }

    fn xor_into_rate(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), RATE);
        for (s, byte) in self.state[..RATE].iter_mut().zip(block) {
            *s ^= byte;
        }
    }

    #[cfg(test)]
    pub(crate) fn state_bytes(&self) -> &[u8; STATE_SIZE] {
        &self.state
    }
}

impl Drop for Sponge {
    fn drop(&mut self) {
        fast_zeroize_slice(&mut self.state);
    }
}
