//! DP cell: accumulated cost coupled with the trace that produced it.

use crate::backtrace::{Backtrace, EditEvent};

/// One cell of the rolling DP row.
///
/// The operators derive a successor cell from a predecessor, charging the
/// operation's cost and recording its event(s). They take `&self`: a
/// predecessor stays usable as the source of the other transitions out of
/// it. Accumulated costs saturate at `u32::MAX`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditCell {
    cost: u32,
    trace: Backtrace,
}

impl EditCell {
    /// Fresh cell: zero cost, empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated cost of the path into this cell.
    #[inline]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Event log of the path into this cell.
    #[inline]
    pub fn trace(&self) -> &Backtrace {
        &self.trace
    }

    /// Consume a target symbol with no query counterpart.
    pub fn delete(&self, cost: u32) -> EditCell {
        EditCell {
            cost: self.cost.saturating_add(cost),
            trace: self.trace.append(EditEvent::Target),
        }
    }

    /// Consume a query symbol with no target counterpart.
    pub fn insert(&self, cost: u32) -> EditCell {
        EditCell {
            cost: self.cost.saturating_add(cost),
            trace: self.trace.append(EditEvent::Query),
        }
    }

    /// Consume a mismatched pair, target event first.
    pub fn substitute(&self, cost: u32) -> EditCell {
        EditCell {
            cost: self.cost.saturating_add(cost),
            trace: self.pair(),
        }
    }

    /// Consume a matching pair, target event first. Free.
    pub fn matched(&self) -> EditCell {
        EditCell {
            cost: self.cost,
            trace: self.pair(),
        }
    }

    fn pair(&self) -> Backtrace {
        self.trace
            .append(EditEvent::Target)
            .append(EditEvent::Query)
    }
}
