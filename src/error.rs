//! Error type for the search entry points.

/// Errors reported by [`crate::infix_levenshtein`] and
/// [`crate::infix_levenshtein_into`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlignError {
    /// The target was empty. An infix placement needs at least one target
    /// column to score the query against.
    #[error("target sequence must be non-empty")]
    EmptyTarget,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, AlignError>;
