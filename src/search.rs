//! Infix (semi-global) Levenshtein search.
//!
//! The query aligns in full, the target contributes an arbitrary window:
//! row 0 of the DP restarts at zero cost on every target column, which
//! makes skipping a target prefix free, and the row's tail cell is a
//! candidate result after every column, which makes the suffix free. One
//! rolling row of `query.len() + 1` [`EditCell`]s is kept live and
//! updated in place per column.
//!
//! Result collection tracks the best tail cost seen so far. A column that
//! ties it adds a placement, a column that beats it restarts the
//! collection, so the caller receives one [`Alignment`] per best-scoring
//! end position, in target order.

use crate::alignment::Alignment;
use crate::cell::EditCell;
use crate::costs::EditCosts;
use crate::error::{AlignError, Result};

/// Computes the infix Levenshtein distance of `query` against `target`
/// and collects every best-scoring placement.
///
/// Equal symbols always extend the path as a free match. Otherwise the
/// cheapest predecessor cell decides the operation, with a fixed
/// preference on ties: delete, then insert, then substitute.
///
/// # Errors
///
/// [`AlignError::EmptyTarget`] if `target` is empty.
///
/// # Examples
///
/// ```
/// use infix_align::{infix_levenshtein, EditCosts};
///
/// let query: &[u8] = b"ACT";
/// let target: &[u8] = b"CGACTGAC";
/// let (distance, hits) = infix_levenshtein(query, target, EditCosts::default())?;
/// assert_eq!(distance, 0);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].target_range(), 2..5);
/// # Ok::<(), infix_align::AlignError>(())
/// ```
pub fn infix_levenshtein<T: PartialEq>(
    query: &[T],
    target: &[T],
    costs: EditCosts,
) -> Result<(u32, Vec<Alignment>)> {
    let mut alignments = Vec::new();
    let distance = infix_levenshtein_into(query, target, costs, &mut alignments)?;
    Ok((distance, alignments))
}

/// Same search as [`infix_levenshtein`], writing the placements into a
/// caller-owned buffer.
///
/// `alignments` is cleared on entry, on every call: after an `Err` and
/// after an empty-query `Ok(0)` it is empty, otherwise it holds exactly
/// the best-scoring placements of this call.
///
/// # Errors
///
/// [`AlignError::EmptyTarget`] if `target` is empty.
pub fn infix_levenshtein_into<T: PartialEq>(
    query: &[T],
    target: &[T],
    costs: EditCosts,
    alignments: &mut Vec<Alignment>,
) -> Result<u32> {
    alignments.clear();
    if target.is_empty() {
        return Err(AlignError::EmptyTarget);
    }
    if query.is_empty() {
        return Ok(0);
    }

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!(
        "infix_levenshtein",
        query_len = query.len(),
        target_len = target.len()
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let q = query.len();
    let mut row: Vec<EditCell> = Vec::with_capacity(q + 1);
    row.push(EditCell::new());
    for k in 1..=q {
        let cell = row[k - 1].insert(costs.insert);
        row.push(cell);
    }

    let mut best: Option<u32> = None;
    for (j, t_sym) in target.iter().enumerate() {
        // Free prefix: every column restarts row 0 at zero cost.
        let mut diag = std::mem::replace(&mut row[0], EditCell::new());
        for k in 1..=q {
            let next = if query[k - 1] == *t_sym {
                diag.matched()
            } else {
                // Predecessor costs decide, not the resulting costs.
                let del_src = row[k].cost();
                let ins_src = row[k - 1].cost();
                let sub_src = diag.cost();
                if del_src <= ins_src && del_src <= sub_src {
                    row[k].delete(costs.delete)
                } else if ins_src <= del_src && ins_src <= sub_src {
                    row[k - 1].insert(costs.insert)
                } else {
                    diag.substitute(costs.substitute)
                }
            };
            diag = std::mem::replace(&mut row[k], next);
        }

        let tail_cost = row[q].cost();
        if best.map_or(true, |b| tail_cost <= b) {
            if best.map_or(false, |b| tail_cost < b) {
                alignments.clear();
            }
            best = Some(tail_cost);
            alignments.push(Alignment::from_cell(&row[q], j));
        }
    }

    Ok(best.expect("non-empty target scores at least one column"))
}
