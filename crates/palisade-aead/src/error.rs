// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for palisade-aead.

use thiserror::Error;

/// Errors that can occur during AEAD operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AeadError {
    /// Key length does not match a supported parameter set.
    #[error("unsupported key length: {0} bytes")]
    InvalidKeyLength(usize),

    /// Input length outside the bounds the cipher accepts: a ciphertext
    /// shorter than the tag, or a message/AD above the configured maximum.
    #[error("invalid message length: {0} bytes")]
    InvalidMessageLength(usize),

    /// Tag verification failed on decrypt; no plaintext was released.
    #[error("authentication failed")]
    AuthenticationFailed,
}
