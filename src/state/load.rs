//! Load-state machine shared by every page.
//!
//! DESIGN
//! ======
//! Initial list loads never surface an error screen. A rejected fetch fills
//! its slice with the empty default and logs a warning; the page renders its
//! empty state. Each page owns a `RequestSeq` so a response that arrives after
//! a newer load started (rapid navigation between ids) is discarded instead
//! of overwriting the newer state.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use crate::net::error::ApiError;

/// Where a page is in its initial fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
}

impl LoadPhase {
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, LoadPhase::Loading)
    }
}

/// Monotonic ticket issued when a load starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Per-page request generation counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Start a new request generation, invalidating all earlier tickets.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Ticket of the load in progress, for follow-up fetches (refetch after
    /// a mutation) that should be dropped if the user navigates meanwhile.
    #[must_use]
    pub fn current(&self) -> Ticket {
        Ticket(self.latest)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

/// All-settled join helper: a fulfilled fetch yields its value, a rejected
/// one yields the default and a warning naming `label`.
pub fn settle<T: Default>(label: &str, result: Result<T, ApiError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            leptos::logging::warn!("failed to load {label}: {err}");
            T::default()
        }
    }
}
