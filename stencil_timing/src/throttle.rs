// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Millis;

/// Leading-edge throttle that keeps the most recent value submitted while it
/// is cooling down.
///
/// ## Usage
///
/// 1) Call [`Throttle::submit`] for every incoming value. If the throttle is
///    ready, the value is handed straight back and should be applied now.
/// 2) Otherwise the value is parked as the single pending value, replacing
///    any value parked earlier.
/// 3) Call [`Throttle::poll`] periodically; once the interval has elapsed it
///    releases the pending value.
///
/// At most one value is released per interval, whether through `submit` or
/// `poll`.
#[derive(Clone, Debug)]
pub struct Throttle<T> {
    interval: Millis,
    last_fired: Option<Millis>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    /// Creates a throttle that releases at most one value per `interval`
    /// milliseconds.
    #[must_use]
    pub const fn new(interval: Millis) -> Self {
        Self {
            interval,
            last_fired: None,
            pending: None,
        }
    }

    /// Returns the minimum interval between released values.
    #[must_use]
    pub fn interval(&self) -> Millis {
        self.interval
    }

    /// Submits the latest value.
    ///
    /// Returns `Some(value)` when it should be applied immediately. Returns
    /// `None` when the throttle is cooling down; the value then replaces the
    /// pending one.
    pub fn submit(&mut self, now: Millis, value: T) -> Option<T> {
        if self.is_ready(now) {
            self.last_fired = Some(now);
            self.pending = None;
            Some(value)
        } else {
            self.pending = Some(value);
            None
        }
    }

    /// Releases the pending value if the interval has elapsed.
    pub fn poll(&mut self, now: Millis) -> Option<T> {
        if self.pending.is_some() && self.is_ready(now) {
            self.last_fired = Some(now);
            self.pending.take()
        } else {
            None
        }
    }

    /// Returns the value waiting for the next release, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Returns when the pending value becomes releasable, if one is waiting.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.pending.as_ref()?;
        Some(
            self.last_fired
                .map_or(0, |last| last.saturating_add(self.interval)),
        )
    }

    /// Drops the pending value without touching the cooldown.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Drops the pending value and forgets the last release, so the next
    /// submission is applied immediately.
    pub fn reset(&mut self) {
        self.pending = None;
        self.last_fired = None;
    }

    fn is_ready(&self, now: Millis) -> bool {
        match self.last_fired {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_submission_is_applied_immediately() {
        let mut t = Throttle::new(16);
        assert_eq!(t.submit(100, 'a'), Some('a'));
        assert!(t.pending().is_none());
        assert_eq!(t.next_deadline(), None);
    }

    #[test]
    fn burst_inside_interval_applies_at_most_once() {
        let mut t = Throttle::new(16);
        let mut applied = 0;
        // 100 calls spread over 0..=15 ms.
        for i in 0..100_u64 {
            let now = i * 15 / 99;
            if t.submit(now, i).is_some() {
                applied += 1;
            }
            if t.poll(now).is_some() {
                applied += 1;
            }
        }
        assert!(applied <= 1);
        // The latest intent is kept for the trailing edge.
        assert_eq!(t.pending(), Some(&99));
        assert_eq!(t.next_deadline(), Some(16));
        assert_eq!(t.poll(16), Some(99));
        assert_eq!(t.poll(100), None);
    }

    #[test]
    fn trailing_release_restarts_cooldown() {
        let mut t = Throttle::new(10);
        assert_eq!(t.submit(0, 1), Some(1));
        assert_eq!(t.submit(4, 2), None);
        assert_eq!(t.poll(10), Some(2));
        // Cooldown now runs from 10.
        assert_eq!(t.submit(15, 3), None);
        assert_eq!(t.submit(20, 4), Some(4));
        assert!(t.pending().is_none());
    }

    #[test]
    fn cancel_keeps_cooldown_reset_clears_it() {
        let mut t = Throttle::new(10);
        t.submit(0, 1);
        t.submit(2, 2);
        t.cancel();
        assert_eq!(t.poll(50), None);
        assert_eq!(t.submit(5, 3), None);

        t.reset();
        assert_eq!(t.submit(6, 4), Some(4));
    }

    #[test]
    fn clock_going_backwards_does_not_release_early() {
        let mut t = Throttle::new(16);
        t.submit(100, 1);
        assert_eq!(t.submit(50, 2), None);
        assert_eq!(t.poll(60), None);
        assert_eq!(t.poll(116), Some(2));
    }

    #[test]
    fn zero_interval_never_holds_back() {
        let mut t = Throttle::new(0);
        assert_eq!(t.submit(1, 1), Some(1));
        assert_eq!(t.submit(1, 2), Some(2));
    }
}
