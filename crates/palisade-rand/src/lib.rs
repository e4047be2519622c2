// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # palisade_rand
//!
//! Cryptographically secure random number generation for the Palisade stack.
//!
//! Provides entropy sources and nonce generators for AEAD encryption. Nonce
//! uniqueness per key is the one precondition the cipher cannot check, so
//! this crate supplies the collaborator that upholds it.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`NonceSessionGenerator`]: session-based nonce generator with
//!   configurable size
//!
//! ## Traits
//!
//! - [`EntropySource`]: interface for CSPRNGs
//! - [`NonceGenerator`]: interface for nonce generation
//!
//! ## Example
//!
//! ```rust
//! use palisade_rand::{SystemEntropySource, NonceSessionGenerator, NonceGenerator, EntropySource};
//!
//! // Create entropy source
//! let entropy = SystemEntropySource {};
//!
//! // Generate random bytes
//! let mut key = [0u8; 16];
//! entropy.fill_bytes(&mut key).expect("Failed to generate entropy");
//!
//! // Create nonce generator
//! let mut nonce_gen = NonceSessionGenerator::<SystemEntropySource, 16>::new(SystemEntropySource {});
//! let nonce = nonce_gen.generate_nonce().expect("Failed to generate nonce");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod session;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use session::{Counter, NonceSessionGenerator};
pub use system::SystemEntropySource;
pub use traits::{EntropySource, NonceGenerator};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
