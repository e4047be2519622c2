// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for the validated frontend.

use palisade_util::hex_to_bytes;

use crate::aead::Aead;
use crate::error::AeadError;
use crate::limits::{MAX_AAD_SIZE, MAX_MESSAGE_SIZE};
use crate::traits::AeadApi;

// =============================================================================
// seal() + open() wire format
// =============================================================================

#[test]
fn test_seal_open_roundtrip() {
    let mut aead = Aead::new();
    let key = [0x42u8; 16];
    let nonce = aead.generate_nonce().expect("Failed to generate_nonce()");
    let aad = b"node-7/channel-3";
    let reading = b"temp=21.5C rh=40%";

    let payload = aead
        .seal(&key, &nonce, aad, reading)
        .expect("Failed to seal(..)");
    assert_eq!(payload.len(), reading.len() + aead.tag_size());

    let opened = aead
        .open(&key, &nonce, aad, &payload)
        .expect("Failed to open(..)");
    assert_eq!(opened, reading);
}

#[test]
fn test_seal_matches_known_vector() {
    let mut aead = Aead::new();
    let key = [0u8; 16];
    let nonce = [0u8; 16];

    let payload = aead
        .seal(&key, &nonce, b"ASCON", b"SAMSUN")
        .expect("Failed to seal(..)");

    assert_eq!(
        payload,
        hex_to_bytes("c698a33ccf3ce64cdbfa394734cd07d825e1efc604c8")
    );
}

#[test]
fn test_open_rejects_tampered_tag() {
    let mut aead = Aead::new();
    let key = [0x42u8; 16];
    let nonce = [0x24u8; 16];

    let mut payload = aead
        .seal(&key, &nonce, b"header", b"secret")
        .expect("Failed to seal(..)");
    let last = payload.len() - 1;
    payload[last] ^= 0x01;

    let result = aead.open(&key, &nonce, b"header", &payload);
    assert_eq!(result, Err(AeadError::AuthenticationFailed));
}

// =============================================================================
// Length validation
// =============================================================================

#[test]
fn test_open_rejects_ciphertext_shorter_than_tag() {
    let mut aead = Aead::new();
    let key = [0x42u8; 16];
    let nonce = [0x24u8; 16];

    for len in 0..aead.tag_size() {
        let short = vec![0u8; len];
        let result = aead.open(&key, &nonce, b"", &short);
        assert_eq!(result, Err(AeadError::InvalidMessageLength(len)));
    }
}

#[test]
fn test_seal_rejects_oversized_plaintext() {
    let mut aead = Aead::new();
    let key = [0x42u8; 16];
    let nonce = [0x24u8; 16];

    let oversized = vec![0u8; MAX_MESSAGE_SIZE + 1];
    let result = aead.seal(&key, &nonce, b"", &oversized);
    assert_eq!(
        result,
        Err(AeadError::InvalidMessageLength(MAX_MESSAGE_SIZE + 1))
    );
}

#[test]
fn test_seal_rejects_oversized_aad() {
    let mut aead = Aead::new();
    let key = [0x42u8; 16];
    let nonce = [0x24u8; 16];

    let oversized = vec![0u8; MAX_AAD_SIZE + 1];
    let result = aead.seal(&key, &nonce, &oversized, b"reading");
    assert_eq!(
        result,
        Err(AeadError::InvalidMessageLength(MAX_AAD_SIZE + 1))
    );
}

#[test]
fn test_open_rejects_oversized_body() {
    let mut aead = Aead::new();
    let key = [0x42u8; 16];
    let nonce = [0x24u8; 16];

    // body above the maximum, before any decryption work happens
    let inbound = vec![0u8; MAX_MESSAGE_SIZE + 1 + aead.tag_size()];
    let result = aead.open(&key, &nonce, b"", &inbound);
    assert_eq!(
        result,
        Err(AeadError::InvalidMessageLength(MAX_MESSAGE_SIZE + 1))
    );
}

#[test]
fn test_seal_accepts_maximum_sizes() {
    let mut aead = Aead::new();
    let key = [0x42u8; 16];
    let nonce = [0x24u8; 16];

    let plaintext = vec![0xA5u8; MAX_MESSAGE_SIZE];
    let aad = vec![0x5Au8; MAX_AAD_SIZE];

    let payload = aead
        .seal(&key, &nonce, &aad, &plaintext)
        .expect("Failed to seal(..) at the size limit");
    let opened = aead
        .open(&key, &nonce, &aad, &payload)
        .expect("Failed to open(..) at the size limit");
    assert_eq!(opened, plaintext);
}

// =============================================================================
// Key validation
// =============================================================================

#[test]
fn test_unsupported_key_lengths_rejected() {
    let mut aead = Aead::new();
    let nonce = [0x24u8; 16];

    for len in [0usize, 15, 17, 20, 32] {
        let key = vec![0u8; len];

        let sealed = aead.seal(&key, &nonce, b"", b"reading");
        assert_eq!(sealed, Err(AeadError::InvalidKeyLength(len)));

        let opened = aead.open(&key, &nonce, b"", &[0u8; 22]);
        assert_eq!(opened, Err(AeadError::InvalidKeyLength(len)));
    }
}

// =============================================================================
// In-place encrypt() + decrypt()
// =============================================================================

#[test]
fn test_encrypt_decrypt_roundtrip() {
    let mut aead = Aead::new();
    let key = [0u8; 16];
    let nonce = aead.generate_nonce().expect("Failed to generate_nonce()");
    let aad = b"additional authenticated data";
    let mut data = b"Hello, World! This is a test message.".to_vec();
    let mut tag = [0u8; 16];
    let original = data.clone();

    aead.encrypt(&key, &nonce, aad, &mut data, &mut tag)
        .expect("Failed to encrypt(..)");

    assert_ne!(data, original);

    aead.decrypt(&key, &nonce, aad, &mut data, &tag)
        .expect("Failed to decrypt(..)");

    assert_eq!(data, original);
}

#[test]
fn test_decrypt_fails_with_wrong_tag() {
    let mut aead = Aead::new();
    let key = [0u8; 16];
    let nonce = aead.generate_nonce().expect("Failed to generate_nonce()");
    let mut data = b"Hello, World!".to_vec();
    let mut tag = [0u8; 16];

    aead.encrypt(&key, &nonce, b"aad", &mut data, &mut tag)
        .expect("Failed to encrypt(..)");

    tag[0] ^= 1;

    let result = aead.decrypt(&key, &nonce, b"aad", &mut data, &tag);
    assert_eq!(result, Err(AeadError::AuthenticationFailed));
}

// =============================================================================
// Size methods
// =============================================================================

#[test]
fn test_key_size_returns_correct_value() {
    let aead = Aead::new();
    assert_eq!(aead.key_size(), 16);
}

#[test]
fn test_nonce_size_returns_correct_value() {
    let aead = Aead::new();
    assert_eq!(aead.nonce_size(), 16);
}

#[test]
fn test_tag_size_returns_correct_value() {
    let aead = Aead::new();
    assert_eq!(aead.tag_size(), 16);
}

#[test]
fn test_backend_name() {
    let aead = Aead::new();
    assert_eq!(aead.backend_name(), "ASCON-128");
}

// =============================================================================
// Nonce generation
// =============================================================================

#[test]
fn test_generate_nonce_uniqueness() {
    let mut aead = Aead::new();

    let nonce1 = aead.generate_nonce().expect("Failed to generate nonce #1");
    let nonce2 = aead.generate_nonce().expect("Failed to generate nonce #2");
    let nonce3 = aead.generate_nonce().expect("Failed to generate nonce #3");
    let nonce4 = aead.generate_nonce().expect("Failed to generate nonce #4");

    // All nonces should be distinct
    assert_ne!(nonce1, nonce2);
    assert_ne!(nonce1, nonce3);
    assert_ne!(nonce1, nonce4);
    assert_ne!(nonce2, nonce3);
    assert_ne!(nonce2, nonce4);
    assert_ne!(nonce3, nonce4);
}
