//! Cancellation and supersession for in-flight fetches.
//!
//! Every data-fetching screen owns one [`FetchCoordinator`]. Each fetch
//! takes a ticket before starting and asks [`FetchCoordinator::commit`]
//! before applying its result:
//!
//! - a newer `begin` supersedes every earlier ticket, so a stale completion
//!   from an overlapping refresh is dropped instead of clobbering newer
//!   state;
//! - `cancel` on screen teardown invalidates all tickets, preventing state
//!   updates after the consumer is gone.
//!
//! Cancellation is advisory: the underlying network call is not aborted,
//! its result is just never committed.
//!
//! ```rust
//! use shopwire_client::fetch::FetchCoordinator;
//!
//! let coordinator = FetchCoordinator::new();
//! let first = coordinator.begin();
//! let refresh = coordinator.begin(); // pull-to-refresh while first is in flight
//!
//! assert!(!coordinator.commit(&first)); // stale, dropped
//! assert!(coordinator.commit(&refresh));
//! ```

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Per-screen fetch coordinator.
#[derive(Debug, Default)]
pub struct FetchCoordinator {
    latest: AtomicU64,
    cancelled: AtomicBool,
}

/// Token for one issued fetch. Present it back via
/// [`FetchCoordinator::commit`] before applying the fetch's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
}

impl FetchCoordinator {
    /// Create a coordinator with no fetches issued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new fetch, superseding all earlier tickets.
    pub fn begin(&self) -> FetchTicket {
        let seq = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        FetchTicket { seq }
    }

    /// Whether the result behind `ticket` may be applied.
    ///
    /// True iff the coordinator is not cancelled and no later fetch has
    /// been issued since the ticket was taken.
    #[must_use]
    pub fn commit(&self, ticket: &FetchTicket) -> bool {
        !self.cancelled.load(Ordering::Acquire) && self.latest.load(Ordering::Acquire) == ticket.seq
    }

    /// Invalidate all tickets, current and future. Called on teardown.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether the coordinator has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
