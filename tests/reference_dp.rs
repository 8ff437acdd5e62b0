use infix_align::{infix_levenshtein, EditCosts};
use proptest::prelude::*;

/// Full-matrix semi-global reference with one uniform operation cost:
/// row 0 is zero across the whole target, the answer is the last row's
/// minimum over all columns.
fn full_infix_distance(query: &[u8], target: &[u8], cost: u32) -> u32 {
    let q = query.len();
    let t = target.len();
    let mut dp = vec![vec![0u32; t + 1]; q + 1];
    for k in 1..=q {
        dp[k][0] = dp[k - 1][0] + cost;
    }
    for k in 1..=q {
        for j in 1..=t {
            let charged = if query[k - 1] == target[j - 1] { 0 } else { cost };
            let diag = dp[k - 1][j - 1] + charged;
            let del = dp[k][j - 1] + cost;
            let ins = dp[k - 1][j] + cost;
            dp[k][j] = diag.min(del).min(ins);
        }
    }
    (1..=t).map(|j| dp[q][j]).min().unwrap_or(0)
}

proptest! {
    #[test]
    fn distance_matches_full_matrix(
        a in "[ACGT]{0,12}",
        b in "[ACGT]{1,24}",
        cost in 1u32..4,
    ) {
        let query = a.as_bytes();
        let target = b.as_bytes();
        let costs = EditCosts::new(cost, cost, cost);
        let (distance, _hits) = infix_levenshtein(query, target, costs).unwrap();
        prop_assert_eq!(distance, full_infix_distance(query, target, cost));
    }

    #[test]
    fn substring_occurrences_score_zero(
        b in "[ACGT]{1,40}",
        lo_seed in 0usize..40,
        hi_seed in 0usize..40,
    ) {
        let target = b.as_bytes();
        let lo = lo_seed % target.len();
        let hi = hi_seed % target.len();
        let (lo, hi) = (lo.min(hi), lo.max(hi));
        let query = &target[lo..=hi];

        let (distance, hits) =
            infix_levenshtein(query, target, EditCosts::default()).unwrap();
        prop_assert_eq!(distance, 0);
        let at_occurrence = hits.iter().find(|h| h.end() == hi);
        prop_assert!(at_occurrence.is_some());
        prop_assert_eq!(at_occurrence.unwrap().target_range(), lo..hi + 1);
    }

    #[test]
    fn corrupting_one_symbol_never_improves(
        a in "[ACGT]{1,12}",
        b in "[ACGT]{1,24}",
        pos_seed in 0usize..12,
    ) {
        let query = a.as_bytes();
        let target = b.as_bytes();
        let costs = EditCosts::default();
        let (clean, _) = infix_levenshtein(query, target, costs).unwrap();

        // 'X' is outside the alphabet, so the corrupted position can
        // never match.
        let mut corrupted = query.to_vec();
        corrupted[pos_seed % query.len()] = b'X';
        let (dirty, _) = infix_levenshtein(&corrupted, target, costs).unwrap();

        prop_assert!(dirty >= clean, "corruption improved {clean} to {dirty}");
        prop_assert!(dirty <= clean + 1, "corruption cost more than one: {clean} to {dirty}");
    }

    #[test]
    fn distance_is_bounded_by_query_length(
        a in "[ACGT]{0,16}",
        b in "[ACGT]{1,32}",
    ) {
        let query = a.as_bytes();
        let target = b.as_bytes();
        let (distance, _) =
            infix_levenshtein(query, target, EditCosts::default()).unwrap();
        prop_assert!(distance as usize <= query.len());
    }

    #[test]
    fn uniform_costs_scale_the_distance(
        a in "[ACGT]{0,12}",
        b in "[ACGT]{1,24}",
        scale in 2u32..5,
    ) {
        let query = a.as_bytes();
        let target = b.as_bytes();
        let (unit, _) =
            infix_levenshtein(query, target, EditCosts::default()).unwrap();
        let (scaled, _) =
            infix_levenshtein(query, target, EditCosts::new(scale, scale, scale)).unwrap();
        prop_assert_eq!(scaled, unit * scale);
    }

    #[test]
    fn hits_are_tied_ordered_and_in_bounds(
        a in "[ACGT]{1,12}",
        b in "[ACGT]{1,24}",
    ) {
        let query = a.as_bytes();
        let target = b.as_bytes();
        let (distance, hits) =
            infix_levenshtein(query, target, EditCosts::default()).unwrap();

        prop_assert!(!hits.is_empty());
        for hit in &hits {
            prop_assert_eq!(hit.cost(), distance);
            prop_assert!(hit.end() < target.len());
            prop_assert!(hit.start() <= hit.end() + 1);
            prop_assert_eq!(hit.trace().query_events(), query.len());
        }
        for pair in hits.windows(2) {
            prop_assert!(pair[0].end() < pair[1].end());
        }
    }
}
