//! Search results and edit-script reconstruction.

use std::ops::Range;

use crate::backtrace::{Backtrace, EditEvent};
use crate::cell::EditCell;

/// One best-scoring placement of the whole query inside the target.
///
/// The placement is identified by the target column it was collected at
/// and carries the event log of its edit path; everything else (consumed
/// region, typed edit script) is derived from those two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    cost: u32,
    end: usize,
    trace: Backtrace,
}

impl Alignment {
    pub(crate) fn from_cell(cell: &EditCell, end: usize) -> Self {
        Self {
            cost: cell.cost(),
            end,
            trace: cell.trace().clone(),
        }
    }

    /// Total edit cost of this placement.
    #[inline]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// 0-based target index of the column this placement was collected at;
    /// the last consumed target symbol whenever the script consumed any.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// 0-based target index of the first consumed target symbol.
    ///
    /// Equals `end() + 1` when the script consumed no target symbol at
    /// all, making [`target_range`](Alignment::target_range) empty.
    pub fn start(&self) -> usize {
        self.end + 1 - self.trace.target_events()
    }

    /// The consumed target region, as a half-open index range.
    pub fn target_range(&self) -> Range<usize> {
        self.start()..self.end + 1
    }

    /// Event log of the edit path, oldest event first.
    #[inline]
    pub fn trace(&self) -> &Backtrace {
        &self.trace
    }

    /// Reconstructs the typed edit script against the sequences this
    /// placement was computed from.
    ///
    /// A target event immediately followed by a query event forms one
    /// aligned pair, reported as [`AlignOp::Match`] or
    /// [`AlignOp::Substitute`] by comparing the two symbols. A lone target
    /// event is a [`AlignOp::Delete`], any other query event an
    /// [`AlignOp::Insert`].
    ///
    /// # Panics
    ///
    /// Panics if `query` or `target` is not the sequence the search ran
    /// on: the event log then indexes past a sequence end.
    pub fn steps<T: PartialEq>(&self, query: &[T], target: &[T]) -> Vec<AlignStep> {
        let events = self.trace.events();
        let mut steps = Vec::new();
        let mut qi = 0;
        let mut ti = self.start();
        let mut i = 0;
        while i < events.len() {
            match events[i] {
                EditEvent::Target if events.get(i + 1) == Some(&EditEvent::Query) => {
                    let op = if query[qi] == target[ti] {
                        AlignOp::Match
                    } else {
                        AlignOp::Substitute
                    };
                    steps.push(AlignStep {
                        op,
                        query_pos: Some(qi),
                        target_pos: Some(ti),
                    });
                    qi += 1;
                    ti += 1;
                    i += 2;
                }
                EditEvent::Target => {
                    steps.push(AlignStep {
                        op: AlignOp::Delete,
                        query_pos: None,
                        target_pos: Some(ti),
                    });
                    ti += 1;
                    i += 1;
                }
                EditEvent::Query => {
                    steps.push(AlignStep {
                        op: AlignOp::Insert,
                        query_pos: Some(qi),
                        target_pos: None,
                    });
                    qi += 1;
                    i += 1;
                }
            }
        }
        steps
    }
}

/// Kind of one reconstructed edit step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignOp {
    Match,
    Substitute,
    Insert,
    Delete,
}

/// One reconstructed edit step and the indices it consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignStep {
    pub op: AlignOp,
    /// Consumed query index; `None` for deletions.
    pub query_pos: Option<usize>,
    /// Consumed target index; `None` for insertions.
    pub target_pos: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::{AlignOp, AlignStep, Alignment};
    use crate::cell::EditCell;

    fn step(op: AlignOp, q: Option<usize>, t: Option<usize>) -> AlignStep {
        AlignStep {
            op,
            query_pos: q,
            target_pos: t,
        }
    }

    #[test]
    fn region_is_derived_from_target_events() {
        // Match, delete, match: three target symbols, two query symbols.
        let cell = EditCell::new().matched().delete(1).matched();
        let hit = Alignment::from_cell(&cell, 4);
        assert_eq!(hit.start(), 2);
        assert_eq!(hit.target_range(), 2..5);
    }

    #[test]
    fn pure_insert_script_has_empty_region() {
        let cell = EditCell::new().insert(1).insert(1);
        let hit = Alignment::from_cell(&cell, 0);
        assert_eq!(hit.start(), 1);
        assert!(hit.target_range().is_empty());
    }

    #[test]
    fn script_reconstruction_types_each_event() {
        // Query "AXB" against the window "AB" starting at index 1 of
        // target "CAB": match, insert, match. Build the path by hand and
        // type it back.
        let query: &[u8] = b"AXB";
        let target: &[u8] = b"CAB";
        let cell = EditCell::new().matched().insert(1).matched();
        let hit = Alignment::from_cell(&cell, 2);
        assert_eq!(hit.start(), 1);
        assert_eq!(
            hit.steps(query, target),
            vec![
                step(AlignOp::Match, Some(0), Some(1)),
                step(AlignOp::Insert, Some(1), None),
                step(AlignOp::Match, Some(2), Some(2)),
            ]
        );
    }

    #[test]
    fn mismatched_pair_reports_substitute() {
        let query: &[u8] = b"AB";
        let target: &[u8] = b"AC";
        let cell = EditCell::new().matched().substitute(1);
        let hit = Alignment::from_cell(&cell, 1);
        let steps = hit.steps(query, target);
        assert_eq!(steps[0].op, AlignOp::Match);
        assert_eq!(steps[1].op, AlignOp::Substitute);
        assert_eq!(steps[1].query_pos, Some(1));
        assert_eq!(steps[1].target_pos, Some(1));
    }

    #[test]
    fn lone_target_event_reports_delete() {
        let query: &[u8] = b"A";
        let target: &[u8] = b"XA";
        // Delete then match: consumes target 0 and 1, query 0.
        let cell = EditCell::new().delete(1).matched();
        let hit = Alignment::from_cell(&cell, 1);
        assert_eq!(
            hit.steps(query, target),
            vec![
                step(AlignOp::Delete, None, Some(0)),
                step(AlignOp::Match, Some(0), Some(1)),
            ]
        );
    }
}
