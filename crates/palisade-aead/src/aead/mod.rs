// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Frontend tying key validation, size limits and the wire format to
//! the ASCON-128 backend.

#[cfg(test)]
mod tests;

use alloc::vec::Vec;

use palisade_rand::{EntropyError, SystemEntropySource};

use crate::ascon128::consts::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::ascon128::{Ascon128, Ascon128Key, Ascon128Nonce, Ascon128Tag};
use crate::error::AeadError;
use crate::limits::{MAX_AAD_SIZE, MAX_MESSAGE_SIZE, ensure_within};
use crate::traits::{AeadApi, AeadBackend};

/// AEAD frontend.
///
/// Validates key length and size limits, then drives the ASCON-128
/// backend. The payload handed to the transport layer is `seal`'s
/// output: ciphertext body followed by the 16-byte tag, nothing else.
pub struct Aead {
    backend: Ascon128<SystemEntropySource>,
}

impl Aead {
    /// Creates a frontend over the default backend.
    pub fn new() -> Self {
        Self {
            backend: Ascon128::default(),
        }
    }

    /// Only the 16-byte parameter set is supported; the 20-byte set
    /// would derive a zero rate under this state layout.
    fn checked_key(key: &[u8]) -> Result<Ascon128Key, AeadError> {
        Ascon128Key::try_from(key).map_err(|_| AeadError::InvalidKeyLength(key.len()))
    }
}

impl Default for Aead {
    fn default() -> Self {
        Self::new()
    }
}

impl AeadApi for Aead {
    fn encrypt(
        &mut self,
        key: &[u8],
        nonce: &Ascon128Nonce,
        aad: &[u8],
        data: &mut [u8],
        tag: &mut Ascon128Tag,
    ) -> Result<(), AeadError> {
        let key = Self::checked_key(key)?;
        ensure_within(data.len(), MAX_MESSAGE_SIZE)?;
        ensure_within(aad.len(), MAX_AAD_SIZE)?;

        self.backend.encrypt(&key, nonce, aad, data, tag);
        Ok(())
    }

    fn decrypt(
        &mut self,
        key: &[u8],
        nonce: &Ascon128Nonce,
        aad: &[u8],
        data: &mut [u8],
        tag: &Ascon128Tag,
    ) -> Result<(), AeadError> {
        let key = Self::checked_key(key)?;
        ensure_within(data.len(), MAX_MESSAGE_SIZE)?;
        ensure_within(aad.len(), MAX_AAD_SIZE)?;

        self.backend.decrypt(&key, nonce, aad, data, tag)
    }

    fn seal(
        &mut self,
        key: &[u8],
        nonce: &Ascon128Nonce,
        aad: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, AeadError> {
        let key = Self::checked_key(key)?;
        ensure_within(plaintext.len(), MAX_MESSAGE_SIZE)?;
        ensure_within(aad.len(), MAX_AAD_SIZE)?;

        let mut payload = Vec::with_capacity(plaintext.len() + TAG_SIZE);
        payload.extend_from_slice(plaintext);

        let mut tag = [0u8; TAG_SIZE];
        self.backend
            .encrypt(&key, nonce, aad, payload.as_mut_slice(), &mut tag);
        payload.extend_from_slice(&tag);
        Ok(payload)
    }

    fn open(
        &mut self,
        key: &[u8],
        nonce: &Ascon128Nonce,
        aad: &[u8],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, AeadError> {
        let key = Self::checked_key(key)?;
        if ciphertext.len() < TAG_SIZE {
            return Err(AeadError::InvalidMessageLength(ciphertext.len()));
        }

        let (body, tag) = ciphertext.split_at(ciphertext.len() - TAG_SIZE);
        ensure_within(body.len(), MAX_MESSAGE_SIZE)?;
        ensure_within(aad.len(), MAX_AAD_SIZE)?;

        let mut tag_bytes = [0u8; TAG_SIZE];
        tag_bytes.copy_from_slice(tag);

        let mut plaintext = body.to_vec();
        self.backend
            .decrypt(&key, nonce, aad, plaintext.as_mut_slice(), &tag_bytes)?;
        Ok(plaintext)
    }

    fn generate_nonce(&mut self) -> Result<Ascon128Nonce, EntropyError> {
        self.backend.generate_nonce()
    }

    fn key_size(&self) -> usize {
        KEY_SIZE
    }

    fn nonce_size(&self) -> usize {
        NONCE_SIZE
    }

    fn tag_size(&self) -> usize {
        TAG_SIZE
    }

    fn backend_name(&self) -> &'static str {
        "ASCON-128"
    }
}
