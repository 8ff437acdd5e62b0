//! Persistent event log attached to every DP cell.
//!
//! Each cell of the search carries the chronological sequence of edit
//! events that produced it. Kept naively that is a growing vector cloned
//! on every cell derivation, O(query × target) space and time in total.
//! Instead, events are packed one bit per event into a 64-event *open
//! block*; when a full block receives another event it is *sealed* behind
//! an [`Arc`] and a fresh open block begins. Sealed blocks form a chain
//! (newest first) shared structurally between every log descending from
//! them, so cloning a log copies one `u64` and bumps a reference count.
//! Deriving a cell from its predecessor is O(1) amortized and live memory
//! is proportional to the number of live cells, not to the DP table.

use std::fmt::{self, Write};
use std::sync::Arc;

/// One edit event, identified by the side of the alignment it consumed.
///
/// Substitutions and matches consume both sides and are recorded as a
/// [`Target`](EditEvent::Target) event followed by a
/// [`Query`](EditEvent::Query) event; the pair order is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEvent {
    /// A query symbol was consumed. Rendered as `'1'`.
    Query,
    /// A target symbol was consumed. Rendered as `'0'`.
    Target,
}

/// Events per block.
const BLOCK_EVENTS: u8 = 64;

/// A completely filled, immutable block of [`BLOCK_EVENTS`] events and the
/// chain of blocks sealed before it.
///
/// Every sealed block links to the block sealed immediately before it, so
/// walking `prev` visits the history newest block first with no gaps.
#[derive(Debug, PartialEq, Eq)]
struct SealedBlock {
    bits: u64,
    prev: Option<Arc<SealedBlock>>,
}

/// Append-only edit event log with value semantics.
///
/// [`append`](Backtrace::append) takes `&self` and returns a new log; the
/// receiver is never mutated, so one cell can seed several successor
/// cells. The open block is copied per derivation, sealed blocks are
/// shared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Backtrace {
    /// Open-block bits; bit `i` is event `i`, set for [`EditEvent::Query`].
    /// Bits at and above `len` are zero.
    bits: u64,
    /// Events in the open block, 0..=64.
    len: u8,
    /// Sealed history, newest block first.
    sealed: Option<Arc<SealedBlock>>,
}

impl Backtrace {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of recorded events.
    pub fn len(&self) -> usize {
        let mut n = usize::from(self.len);
        let mut block = self.sealed.as_deref();
        while let Some(b) = block {
            n += usize::from(BLOCK_EVENTS);
            block = b.prev.as_deref();
        }
        n
    }

    /// Returns true if no event has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len == 0 && self.sealed.is_none()
    }

    /// Number of events that consumed a query symbol.
    pub fn query_events(&self) -> usize {
        let mut n = self.bits.count_ones() as usize;
        let mut block = self.sealed.as_deref();
        while let Some(b) = block {
            n += b.bits.count_ones() as usize;
            block = b.prev.as_deref();
        }
        n
    }

    /// Number of events that consumed a target symbol.
    pub fn target_events(&self) -> usize {
        self.len() - self.query_events()
    }

    /// Returns a new log with `event` appended. `self` is unchanged.
    pub fn append(&self, event: EditEvent) -> Backtrace {
        let mut next = self.clone();
        next.push(event);
        next
    }

    fn push(&mut self, event: EditEvent) {
        if self.len == BLOCK_EVENTS {
            // Open block is full: seal it onto the chain, start a fresh one.
            self.sealed = Some(Arc::new(SealedBlock {
                bits: self.bits,
                prev: self.sealed.take(),
            }));
            self.bits = 0;
            self.len = 0;
        }
        if let EditEvent::Query = event {
            self.bits |= 1u64 << self.len;
        }
        self.len += 1;
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> Vec<EditEvent> {
        let mut sealed_bits = Vec::new();
        let mut block = self.sealed.as_deref();
        while let Some(b) = block {
            sealed_bits.push(b.bits);
            block = b.prev.as_deref();
        }
        let mut out = Vec::with_capacity(self.len());
        for bits in sealed_bits.into_iter().rev() {
            unpack_block(&mut out, bits, BLOCK_EVENTS);
        }
        unpack_block(&mut out, self.bits, self.len);
        out
    }
}

fn unpack_block(out: &mut Vec<EditEvent>, bits: u64, len: u8) {
    for i in 0..len {
        if (bits >> i) & 1 == 1 {
            out.push(EditEvent::Query);
        } else {
            out.push(EditEvent::Target);
        }
    }
}

/// Renders the log as one character per event, oldest first: `'1'` for a
/// query-consuming event, `'0'` for a target-consuming one.
impl fmt::Display for Backtrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in self.events() {
            f.write_char(match event {
                EditEvent::Query => '1',
                EditEvent::Target => '0',
            })?;
        }
        Ok(())
    }
}
