// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Failure schedule for [`MockEntropySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Every call succeeds with real OS entropy.
    None,
    /// Every call fails.
    FailAlways,
    /// Only the Nth call fails (1-indexed); all others succeed.
    FailAtNthFillBytes(usize),
}

/// Entropy source that injects failures on a fixed schedule, with real
/// OS entropy on the calls that succeed.
pub struct MockEntropySource {
    behaviour: MockEntropySourceBehaviour,
    calls: Cell<usize>,
}

impl MockEntropySource {
    /// Creates a source following the given failure schedule.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            behaviour,
            calls: Cell::new(0),
        }
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let call = self.calls.get() + 1;
        self.calls.set(call);

        let fail = match self.behaviour {
            MockEntropySourceBehaviour::None => false,
            MockEntropySourceBehaviour::FailAlways => true,
            MockEntropySourceBehaviour::FailAtNthFillBytes(n) => call == n,
        };
        if fail {
            return Err(EntropyError::EntropyNotAvailable);
        }

        SystemEntropySource {}.fill_bytes(dest)
    }
}
