//! Debounce of geometry and layout-change notification bursts.
//!
//! Rapid-fire notifications within one event-loop turn must collapse into a
//! single recomputation. [`UpdateCoalescer`] hands out [`LayoutTicket`]s:
//! each new notification supersedes the pending ticket, and only the newest
//! ticket redeems. The owning event loop does the actual scheduling — it
//! posts the ticket to its next idle slot and redeems it there — while the
//! coalescer owns deduplication, supersession, and cancellation. A ticket
//! that fires after `cancel` (surface detach, session release) redeems as
//! stale and must not be acted on.

use crate::geometry::Bounds;

/// Handle for one scheduled recomputation. Superseded by any later ticket.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayoutTicket(u64);

/// Collapses notification bursts into a single pending recomputation.
#[derive(Debug, Default)]
pub struct UpdateCoalescer {
    last: u64,
    pending: Option<u64>,
    bounds: Option<Bounds>,
}

impl UpdateCoalescer {
    /// Create an empty coalescer with no pending work.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a layout-change notification.
    ///
    /// Returns a ticket only when at least one edge actually moved;
    /// repeated notifications with identical bounds coalesce to nothing.
    pub fn bounds_changed(&mut self, bounds: Bounds) -> Option<LayoutTicket> {
        if self.bounds == Some(bounds) {
            return None;
        }
        self.bounds = Some(bounds);
        Some(self.reschedule())
    }

    /// Record a geometry change that the caller verified actually updated
    /// state. Always supersedes any pending ticket.
    pub fn geometry_changed(&mut self) -> LayoutTicket {
        self.reschedule()
    }

    /// Redeem a ticket. True exactly once, for the newest pending ticket;
    /// superseded and cancelled tickets are stale.
    pub fn redeem(&mut self, ticket: LayoutTicket) -> bool {
        if self.pending == Some(ticket.0) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Invalidate any pending ticket. Already-issued tickets become stale.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Cancel and forget the last seen bounds, so the first notification
    /// after a reattach always schedules.
    pub fn reset(&mut self) {
        self.pending = None;
        self.bounds = None;
    }

    /// Whether a scheduled recomputation is outstanding.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn reschedule(&mut self) -> LayoutTicket {
        self.last += 1;
        self.pending = Some(self.last);
        LayoutTicket(self.last)
    }
}
