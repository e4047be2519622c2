// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Configuration-time size bounds.
//!
//! Working memory on a mesh node must never be sized from an untrusted
//! length field. Every input is validated against these maxima before
//! any allocation or processing, so an oversized or malicious inbound
//! ciphertext cannot exhaust memory.

use crate::error::AeadError;

/// Largest plaintext / ciphertext body accepted, in bytes.
pub const MAX_MESSAGE_SIZE: usize = 1024;

/// Largest associated data accepted, in bytes.
pub const MAX_AAD_SIZE: usize = 256;

/// Rejects lengths above `max`, reporting the offered length.
pub(crate) fn ensure_within(len: usize, max: usize) -> Result<(), AeadError> {
    if len > max {
        return Err(AeadError::InvalidMessageLength(len));
    }
    Ok(())
}
