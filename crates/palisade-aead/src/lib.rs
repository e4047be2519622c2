// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # palisade_aead
//!
//! Sponge-based authenticated encryption (ASCON-128 parameter set) for
//! short telemetry messages on constrained mesh nodes.
//!
//! The cipher is a pure function of its inputs: a 40-byte sponge state is
//! built fresh per call, driven through initialization, associated-data
//! absorption, body processing and finalization, then discarded. Nothing
//! is shared between invocations.
//!
//! ## Core Types
//!
//! - [`Aead`]: frontend with input validation and the `body ‖ tag` wire
//!   format handed to the transport layer
//! - [`Ascon128`]: the cipher backend (typed key/nonce/tag, in-place)
//!
//! ## Traits
//!
//! - [`AeadApi`]: validated frontend interface
//! - [`AeadBackend`]: backend contract
//!
//! ## Caller contract
//!
//! A `(key, nonce)` pair must never be reused across two different
//! plaintexts. The cipher cannot detect reuse; violation silently
//! compromises confidentiality. [`AeadApi::generate_nonce`] supplies
//! unique nonces within a session.
//!
//! ## Example
//!
//! ```rust
//! use palisade_aead::{Aead, AeadApi};
//!
//! let mut aead = Aead::new();
//! let key = [0x42u8; 16];
//! let nonce = aead.generate_nonce().expect("entropy source unavailable");
//!
//! let payload = aead
//!     .seal(&key, &nonce, b"node-7", b"temp=21.5C")
//!     .expect("seal failed");
//! let reading = aead
//!     .open(&key, &nonce, b"node-7", &payload)
//!     .expect("open failed");
//!
//! assert_eq!(reading, b"temp=21.5C");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod aead;
mod ascon128;
mod error;
mod limits;
mod traits;

pub use aead::Aead;
pub use ascon128::{Ascon128, Ascon128Key, Ascon128Nonce, Ascon128Tag};
pub use error::AeadError;
pub use limits::{MAX_AAD_SIZE, MAX_MESSAGE_SIZE};
pub use palisade_rand::EntropyError;
pub use traits::{AeadApi, AeadBackend};
