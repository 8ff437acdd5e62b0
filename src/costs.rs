//! Per-operation edit costs.

/// Costs charged per edit operation. Matches are always free.
///
/// The `Default` configuration (1, 1, 1) gives the classic Levenshtein
/// distance. Costs are plain non-negative integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditCosts {
    /// Cost of consuming a query symbol with no target counterpart.
    pub insert: u32,
    /// Cost of consuming a target symbol with no query counterpart.
    pub delete: u32,
    /// Cost of consuming a mismatched query/target pair.
    pub substitute: u32,
}

impl EditCosts {
    pub fn new(insert: u32, delete: u32, substitute: u32) -> Self {
        Self {
            insert,
            delete,
            substitute,
        }
    }
}

impl Default for EditCosts {
    fn default() -> Self {
        Self {
            insert: 1,
            delete: 1,
            substitute: 1,
        }
    }
}
