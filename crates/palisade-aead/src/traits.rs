// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core traits: the typed in-place backend contract and the validated
//! frontend API.

use alloc::vec::Vec;

use palisade_rand::EntropyError;

use crate::ascon128::{Ascon128Nonce, Ascon128Tag};
use crate::error::AeadError;

/// Low-level AEAD backend contract.
///
/// Backends work on typed key/nonce/tag arrays and transform the data
/// buffer in place. Input bounds are the frontend's responsibility.
pub trait AeadBackend {
    /// Key type
    type Key;
    /// Nonce type
    type Nonce;
    /// Authentication tag type
    type Tag;

    /// Encrypts `data` in place and writes the authentication tag.
    ///
    /// Caller contract, unchecked here: `nonce` has never been used with
    /// this key for a different message.
    fn encrypt(
        &mut self,
        key: &Self::Key,
        nonce: &Self::Nonce,
        aad: &[u8],
        data: &mut [u8],
        tag: &mut Self::Tag,
    );

    /// Decrypts `data` in place and verifies the tag.
    ///
    /// On tag mismatch the buffer is zeroized and
    /// [`AeadError::AuthenticationFailed`] is returned; no partial
    /// plaintext is ever released.
    fn decrypt(
        &mut self,
        key: &Self::Key,
        nonce: &Self::Nonce,
        aad: &[u8],
        data: &mut [u8],
        tag: &Self::Tag,
    ) -> Result<(), AeadError>;

    /// Generates a fresh nonce for use with this backend.
    fn generate_nonce(&mut self) -> Result<Self::Nonce, EntropyError>;
}

/// Validated frontend interface.
///
/// Takes the key as a slice (the length selects the parameter set) and
/// enforces the configured size limits before any processing. `seal` and
/// `open` speak the wire format: ciphertext body followed by the tag,
/// with the body equal in length to the plaintext.
pub trait AeadApi {
    /// Encrypts `data` in place after validating key and size limits.
    fn encrypt(
        &mut self,
        key: &[u8],
        nonce: &Ascon128Nonce,
        aad: &[u8],
        data: &mut [u8],
        tag: &mut Ascon128Tag,
    ) -> Result<(), AeadError>;

    /// Decrypts `data` (a ciphertext body) in place and verifies `tag`.
    fn decrypt(
        &mut self,
        key: &[u8],
        nonce: &Ascon128Nonce,
        aad: &[u8],
        data: &mut [u8],
        tag: &Ascon128Tag,
    ) -> Result<(), AeadError>;

    /// Encrypts `plaintext` and returns the wire payload `body ‖ tag`.
    fn seal(
        &mut self,
        key: &[u8],
        nonce: &Ascon128Nonce,
        aad: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, AeadError>;

    /// Verifies a wire payload and returns the plaintext.
    ///
    /// The result is either the full plaintext or an error — never a
    /// partially decrypted buffer.
    fn open(
        &mut self,
        key: &[u8],
        nonce: &Ascon128Nonce,
        aad: &[u8],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, AeadError>;

    /// Generates a fresh nonce.
    fn generate_nonce(&mut self) -> Result<Ascon128Nonce, EntropyError>;

    /// Key size in bytes.
    fn key_size(&self) -> usize;

    /// Nonce size in bytes.
    fn nonce_size(&self) -> usize;

    /// Authentication tag size in bytes.
    fn tag_size(&self) -> usize;

    /// Human-readable backend name.
    fn backend_name(&self) -> &'static str;
}
