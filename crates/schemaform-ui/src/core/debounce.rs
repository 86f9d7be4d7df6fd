//! Debounce stage shared by the enum editor and the search bar.
//!
//! # Design
//! - Time is passed in as milliseconds so the stage stays DOM-free and
//!   deterministic under test.
//! - Scheduling replaces the pending value and hands back a ticket. Timer
//!   callbacks present their ticket; stale tickets yield nothing, so a view
//!   only ever needs to hold the latest timer handle.

use tracing::trace;

/// Identifies one scheduled emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DebounceTicket(u64);

#[derive(Clone, Debug, PartialEq)]
struct Pending<T> {
    value: T,
    due_at: u64,
    ticket: DebounceTicket,
}

/// Single debounce stage: only the last value scheduled within a quiet window
/// is released.
#[derive(Clone, Debug, PartialEq)]
pub struct Debounced<T> {
    delay_ms: u32,
    next_ticket: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debounced<T> {
    /// Create an idle stage with the given quiet period.
    #[must_use]
    pub const fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            next_ticket: 0,
            pending: None,
        }
    }

    /// Quiet period in milliseconds.
    #[must_use]
    pub const fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Whether a value is waiting for its quiet period to elapse.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending value, if any.
    #[must_use]
    pub fn due_at(&self) -> Option<u64> {
        self.pending.as_ref().map(|pending| pending.due_at)
    }

    /// Peek at the pending value.
    #[must_use]
    pub fn pending_value(&self) -> Option<&T> {
        self.pending.as_ref().map(|pending| &pending.value)
    }

    /// Schedule `value`, discarding anything still pending.
    pub fn schedule(&mut self, value: T, now_ms: u64) -> DebounceTicket {
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = DebounceTicket(self.next_ticket);
        if self.pending.is_some() {
            trace!(ticket = ticket.0, "superseded pending debounce");
        }
        self.pending = Some(Pending {
            value,
            due_at: now_ms.saturating_add(u64::from(self.delay_ms)),
            ticket,
        });
        ticket
    }

    /// Release the pending value once its deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        if self.pending.as_ref()?.due_at > now_ms {
            return None;
        }
        self.pending.take().map(|pending| pending.value)
    }

    /// Release the pending value when `ticket` is still the latest schedule.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<T> {
        if self.pending.as_ref()?.ticket != ticket {
            trace!(ticket = ticket.0, "ignored stale debounce timer");
            return None;
        }
        self.pending.take().map(|pending| pending.value)
    }

    /// Drop the pending value without releasing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.value)
    }
}
