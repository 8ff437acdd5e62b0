//! Example: infix search with materialized alignments.
//!
//! Run with:
//! `cargo run --example align`

use infix_align::{infix_levenshtein, AlignOp, AlignStep, EditCosts};

fn main() {
    let query: &[u8] = b"ACTG";
    let target: &[u8] = b"TTGACTAGGCAT";

    let (distance, hits) =
        infix_levenshtein(query, target, EditCosts::default()).expect("target is non-empty");

    println!("Infix distance: {distance}");
    println!("Best-scoring placements: {}", hits.len());

    for hit in &hits {
        let steps = hit.steps(query, target);
        let (aln_q, aln_m, aln_t) = materialize_alignment(query, target, &steps);
        println!();
        println!(
            "end {} (target[{}..{}], trace {}):",
            hit.end(),
            hit.start(),
            hit.end() + 1,
            hit.trace()
        );
        println!("Q: {aln_q}");
        println!("   {aln_m}");
        println!("T: {aln_t}");
    }
}

/// Gapped three-line rendering of one placement.
///
/// This is a visualization helper for the example only.
fn materialize_alignment(
    query: &[u8],
    target: &[u8],
    steps: &[AlignStep],
) -> (String, String, String) {
    let mut out_q = String::new();
    let mut out_m = String::new();
    let mut out_t = String::new();

    for step in steps {
        match step.op {
            AlignOp::Match | AlignOp::Substitute => {
                let qi = step.query_pos.expect("pair consumes a query symbol");
                let ti = step.target_pos.expect("pair consumes a target symbol");
                out_q.push(query[qi] as char);
                out_m.push(if step.op == AlignOp::Match { '|' } else { 'x' });
                out_t.push(target[ti] as char);
            }
            AlignOp::Insert => {
                let qi = step.query_pos.expect("insert consumes a query symbol");
                out_q.push(query[qi] as char);
                out_m.push(' ');
                out_t.push('-');
            }
            AlignOp::Delete => {
                let ti = step.target_pos.expect("delete consumes a target symbol");
                out_q.push('-');
                out_m.push(' ');
                out_t.push(target[ti] as char);
            }
        }
    }

    (out_q, out_m, out_t)
}
