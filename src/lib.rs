//! Infix (semi-global) Levenshtein alignment with full traceback.
//!
//! This crate computes the minimal edit cost of placing a whole query
//! sequence anywhere inside a target sequence: the target prefix before
//! the placement and the suffix after it are free, only the aligned
//! window is charged. Alongside the distance, every best-scoring end
//! position yields an [`Alignment`] carrying a compact event log from
//! which the full edit script is reconstructed on demand.
//!
//! ## Core idea
//! 1. A single rolling row of [`EditCell`]s scans the target left to
//!    right; row 0 restarts at zero cost on every column, so any target
//!    prefix is skipped for free.
//! 2. Each cell carries a persistent [`Backtrace`]: events pack one bit
//!    each into 64-event blocks, and full blocks are sealed behind
//!    reference counts and shared between cells, so deriving a cell from
//!    its predecessor is O(1) amortized rather than a history copy.
//! 3. After every column the row's tail cell is a candidate placement;
//!    ties on the best cost accumulate, a strictly better column replaces
//!    them.
//!
//! ## Quick start
//! ```
//! use infix_align::{infix_levenshtein, EditCosts};
//!
//! let query: &[u8] = b"ACT";
//! let target: &[u8] = b"CGACTGAC";
//! let (distance, hits) = infix_levenshtein(query, target, EditCosts::default())?;
//! assert_eq!(distance, 0);
//! assert_eq!(hits[0].target_range(), 2..5);
//! assert_eq!(hits[0].trace().to_string(), "010101");
//! # Ok::<(), infix_align::AlignError>(())
//! ```
//!
//! Sequences are plain `&[T]` with `T: PartialEq`: bytes, chars, token
//! ids, anything comparable.

pub mod alignment;
pub mod backtrace;
pub mod cell;
pub mod costs;
pub mod error;
pub mod search;

pub use crate::alignment::{AlignOp, AlignStep, Alignment};
pub use crate::backtrace::{Backtrace, EditEvent};
pub use crate::cell::EditCell;
pub use crate::costs::EditCosts;
pub use crate::error::{AlignError, Result};
pub use crate::search::{infix_levenshtein, infix_levenshtein_into};
