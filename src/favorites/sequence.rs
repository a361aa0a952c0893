//! Click Sequencing
//!
//! Numbers the clicks on one control so overlapping responses resolve
//! deterministically: a response renders only if no response from a later
//! click has rendered already.

use std::cell::Cell;
use std::rc::Rc;

/// Position of a click in its control's click order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-control click counter, shared by the handler and its in-flight requests
#[derive(Debug, Clone, Default)]
pub struct ToggleSequencer {
    issued: Rc<Cell<u64>>,
    applied: Rc<Cell<u64>>,
}

impl ToggleSequencer {
    /// Number a new click
    pub fn issue(&self) -> Ticket {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        Ticket(next)
    }

    /// True when a response from this or a later click already rendered
    pub fn is_superseded(&self, ticket: Ticket) -> bool {
        ticket.0 <= self.applied.get()
    }

    /// Record that `ticket`'s response finished rendering
    pub fn mark_applied(&self, ticket: Ticket) {
        if ticket.0 > self.applied.get() {
            self.applied.set(ticket.0);
        }
    }

    /// Clicks numbered so far
    #[cfg(test)]
    pub fn issued(&self) -> u64 {
        self.issued.get()
    }
}
