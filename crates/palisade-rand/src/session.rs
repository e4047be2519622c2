// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::mem::size_of;

use crate::error::EntropyError;
use crate::traits::{EntropySource, NonceGenerator};

/// Counter embedded in the leading bytes of each session nonce.
pub type Counter = u64;

const COUNTER_SIZE: usize = size_of::<Counter>();

/// Session-based nonce generator.
///
/// Each nonce is a little-endian [`Counter`] prefix followed by a random
/// tail drawn once per session. The tail is redrawn when the counter
/// wraps, so a (counter, tail) pair never repeats within one generator.
///
/// `N` must be at least the counter width (8 bytes); smaller widths are
/// rejected at compile time.
pub struct NonceSessionGenerator<E: EntropySource, const N: usize> {
    entropy: E,
    session: Option<[u8; N]>,
    counter: Counter,
}

impl<E: EntropySource, const N: usize> NonceSessionGenerator<E, N> {
    /// Creates a generator over the given entropy source. The random
    /// session tail is drawn lazily on first use.
    pub fn new(entropy: E) -> Self {
        Self {
            entropy,
            session: None,
            counter: 0,
        }
    }

    /// Sets the counter directly. Test hook for wrap behavior.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn set_counter_for_test(&mut self, counter: Counter) {
        self.counter = counter;
    }
}

impl<E: EntropySource, const N: usize> NonceGenerator<N> for NonceSessionGenerator<E, N> {
    fn generate_nonce(&mut self) -> Result<[u8; N], EntropyError> {
        const {
            assert!(N >= COUNTER_SIZE, "nonce too small for the counter prefix");
        }

        let mut nonce = match self.session {
            Some(session) => session,
            None => {
                let mut session = [0u8; N];
                self.entropy.fill_bytes(&mut session[COUNTER_SIZE..])?;
                self.session = Some(session);
                session
            }
        };
        nonce[..COUNTER_SIZE].copy_from_slice(&self.counter.to_le_bytes());

        let (next, wrapped) = self.counter.overflowing_add(1);
        self.counter = next;
        if wrapped {
            // counter space exhausted; force a fresh session tail
            self.session = None;
        }

        Ok(nonce)
    }
}
