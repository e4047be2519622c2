// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ASCON-128: duplex-sponge AEAD over a 320-bit permutation.

#[cfg(test)]
mod tests;

mod aead;
pub(crate) mod consts;
mod permutation;
mod sponge;

pub use aead::Ascon128;
pub use consts::{Ascon128Key, Ascon128Nonce, Ascon128Tag};
