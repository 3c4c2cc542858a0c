//! Monotonic request-id guard for discarding superseded results.
//!
//! The gateway cannot cancel an in-flight call; when a view re-issues a
//! request (or navigates away), the earlier result still resolves. A view
//! takes a ticket per request and checks it when the result arrives — only
//! the latest ticket is current.

use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket identifying one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Per-view issuer of monotonically increasing tickets.
#[derive(Debug, Default)]
pub struct StaleGuard {
    current: AtomicU64,
}

impl StaleGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new request; every earlier ticket becomes stale.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.current.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Whether `ticket` still belongs to the most recent request.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.current.load(Ordering::Relaxed) == ticket.0
    }
}
