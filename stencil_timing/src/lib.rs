// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stencil_timing --heading-base-level=0

//! Stencil Timing: host-agnostic rate-limit primitives.
//!
//! UI input arrives far more often than expensive work should run. This crate
//! provides two small, named policies for taming it:
//!
//! - [`Throttle`]: runs at most once per interval. The first call in a quiet
//!   period is applied immediately; later calls inside the interval replace a
//!   single pending value, which is released by [`Throttle::poll`] once the
//!   interval has elapsed. Intermediate values are dropped, the latest intent
//!   is kept.
//! - [`Debounce`]: coalesces a burst of calls into one firing, a fixed delay
//!   after the last call.
//!
//! Neither type owns a clock or a scheduler. Callers pass timestamps in
//! milliseconds ([`Millis`]) from whatever monotonic source the host has
//! (`performance.now()`, a frame clock, a test counter), and poll at their own
//! cadence. [`next_deadline`] folds several pending deadlines into the one the
//! host should wake up for.
//!
//! ## Minimal example
//!
//! ```rust
//! use stencil_timing::{Debounce, Throttle};
//!
//! let mut pan = Throttle::new(16);
//! assert_eq!(pan.submit(0, 1), Some(1));
//! // Inside the interval: held back, only the latest survives.
//! assert_eq!(pan.submit(5, 2), None);
//! assert_eq!(pan.submit(9, 3), None);
//! assert_eq!(pan.poll(12), None);
//! assert_eq!(pan.poll(16), Some(3));
//!
//! let mut commit = Debounce::new(600);
//! commit.schedule(0);
//! commit.schedule(100);
//! assert!(!commit.poll(600));
//! assert!(commit.poll(700));
//! assert!(!commit.poll(800));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod debounce;
mod throttle;

pub use debounce::Debounce;
pub use throttle::Throttle;

/// Timestamp or duration in milliseconds from a host-defined monotonic origin.
pub type Millis = u64;

/// Returns the earliest of a set of optional deadlines.
///
/// Hosts that drive several timers from one wake-up source use this to decide
/// when to poll next. Returns `None` when nothing is pending.
#[must_use]
pub fn next_deadline(deadlines: impl IntoIterator<Item = Option<Millis>>) -> Option<Millis> {
    deadlines.into_iter().flatten().min()
}
