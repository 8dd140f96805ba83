// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Millis;

/// Trailing-edge debounce: fires once, `delay` milliseconds after the most
/// recent [`Debounce::schedule`] call.
///
/// Scheduling again before the deadline pushes the deadline out, so a burst of
/// calls collapses into a single firing after the burst goes quiet.
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    delay: Millis,
    deadline: Option<Millis>,
}

impl Debounce {
    /// Creates an idle debounce with the given quiet period.
    #[must_use]
    pub const fn new(delay: Millis) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Returns the quiet period.
    #[must_use]
    pub fn delay(&self) -> Millis {
        self.delay
    }

    /// (Re)arms the debounce so it fires `delay` after `now`.
    pub fn schedule(&mut self, now: Millis) {
        self.deadline = Some(now.saturating_add(self.delay));
    }

    /// Returns `true` exactly once when the deadline has been reached.
    pub fn poll(&mut self, now: Millis) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Returns the pending deadline, if armed.
    #[must_use]
    pub fn deadline(&self) -> Option<Millis> {
        self.deadline
    }

    /// Returns `true` while a firing is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Disarms without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
