// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use palisade_rand::{
    EntropyError, EntropySource, NonceGenerator, NonceSessionGenerator, SystemEntropySource,
};
use palisade_util::{constant_time_eq, fast_zeroize_slice};

use crate::error::AeadError;
use crate::traits::AeadBackend;

use super::consts::{Ascon128Key, Ascon128Nonce, Ascon128Tag, KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use super::sponge::Sponge;

/// ASCON-128 AEAD with nonce generation.
pub struct Ascon128<E: EntropySource> {
    nonce_gen: NonceSessionGenerator<E, NONCE_SIZE>,
}

impl<E: EntropySource> Ascon128<E> {
    /// Key size in bytes
    pub const KEY_SIZE: usize = KEY_SIZE;
    /// Nonce size in bytes
    pub const NONCE_SIZE: usize = NONCE_SIZE;
    /// Authentication tag size in bytes
    pub const TAG_SIZE: usize = TAG_SIZE;

    /// Creates a new ASCON-128 instance with the provided entropy source.
    pub fn new(entropy: E) -> Self {
        Self {
            nonce_gen: NonceSessionGenerator::new(entropy),
        }
    }
}

impl Default for Ascon128<SystemEntropySource> {
    fn default() -> Self {
        Self::new(SystemEntropySource {})
    }
}

impl<E> AeadBackend for Ascon128<E>
where
    E: EntropySource,
{
    type Key = Ascon128Key;
    type Nonce = Ascon128Nonce;
    type Tag = Ascon128Tag;

    fn encrypt(
        &mut self,
        key: &Self::Key,
        nonce: &Self::Nonce,
        aad: &[u8],
        data: &mut [u8],
        tag: &mut Self::Tag,
    ) {
        let mut sponge = Sponge::init(key, nonce);
        sponge.absorb_aad(aad);
        sponge.encrypt_body(data);
        *tag = sponge.finalize(key);
    }

    fn decrypt(
        &mut self,
        key: &Self::Key,
        nonce: &Self::Nonce,
        aad: &[u8],
        data: &mut [u8],
        tag: &Self::Tag,
    ) -> Result<(), AeadError> {
        let mut sponge = Sponge::init(key, nonce);
        sponge.absorb_aad(aad);
        sponge.decrypt_body(data);
        let computed = sponge.finalize(key);

        // Constant-time tag comparison
        if constant_time_eq(&computed, tag) {
            Ok(())
        } else {
            // the caller never sees a partially authenticated buffer
            fast_zeroize_slice(data);
            Err(AeadError::AuthenticationFailed)
        }
    }

    fn generate_nonce(&mut self) -> Result<Self::Nonce, EntropyError> {
        self.nonce_gen.generate_nonce()
    }
}
