// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for palisade-rand.

use thiserror::Error;

/// Errors from entropy acquisition.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum EntropyError {
    /// The system entropy source is unavailable or failed to produce
    /// random data.
    #[error("system entropy source not available")]
    EntropyNotAvailable,
}
