//! Property suites over randomly generated token sequences.
//!
//! A small alphabet keeps the sequences collision-rich so the tie-break
//! paths are exercised, while short lengths keep the O(m·n) sweeps cheap.

use distance::{Alignment, compute_alignment, compute_distance, value_equal};
use policy::{EditKind, HighestMatch, LowestCost, TieBreak};
use proptest::prelude::*;

fn tokens() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..12)
}

/// Textbook two-row Levenshtein, used as an independent cost reference.
fn reference_levenshtein(a: &[u8], b: &[u8]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for (i, a_token) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b_token) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(a_token != b_token);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn assert_covers(alignment: &Alignment, a_len: usize, b_len: usize) {
    let mut next_a = 0;
    let mut next_b = 0;
    for opcode in &alignment.opcodes {
        assert_eq!(opcode.a_start, next_a, "gap or overlap in a-ranges");
        assert_eq!(opcode.b_start, next_b, "gap or overlap in b-ranges");
        assert!(opcode.a_end >= opcode.a_start);
        assert!(opcode.b_end >= opcode.b_start);
        next_a = opcode.a_end;
        next_b = opcode.b_end;
    }
    assert_eq!(next_a, a_len, "a-ranges must cover the source exactly");
    assert_eq!(next_b, b_len, "b-ranges must cover the target exactly");
}

fn check_policy<P: TieBreak>(a: &[u8], b: &[u8], policy: &P) {
    let distance = compute_distance(a, b, policy, value_equal).expect("distance");
    let alignment = compute_alignment(a, b, policy, value_equal).expect("alignment");

    // Both engines agree on cost and match count.
    assert_eq!(distance.cost, alignment.cost);
    assert_eq!(distance.matches, alignment.matches);

    // The emitted ranges tile both sequences.
    assert_covers(&alignment, a.len(), b.len());

    // Each unmerged equal opcode covers exactly one matched pair.
    let equal_opcodes = alignment
        .opcodes
        .iter()
        .filter(|opcode| opcode.kind == EditKind::Equal)
        .count();
    assert_eq!(alignment.matches, equal_opcodes);

    // Every opcode spans at most one token per side.
    for opcode in &alignment.opcodes {
        assert!(opcode.a_end - opcode.a_start <= 1);
        assert!(opcode.b_end - opcode.b_start <= 1);
    }
}

proptest! {
    #[test]
    fn lowest_cost_invariants(a in tokens(), b in tokens()) {
        check_policy(&a, &b, &LowestCost);
    }

    #[test]
    fn highest_match_invariants(a in tokens(), b in tokens()) {
        check_policy(&a, &b, &HighestMatch);
    }

    #[test]
    fn lowest_cost_matches_reference_levenshtein(a in tokens(), b in tokens()) {
        let distance = compute_distance(&a, &b, &LowestCost, value_equal).expect("distance");
        prop_assert_eq!(distance.cost, reference_levenshtein(&a, &b));
    }

    #[test]
    fn zero_distance_iff_sequences_equal(a in tokens(), b in tokens()) {
        let distance = compute_distance(&a, &b, &LowestCost, value_equal).expect("distance");
        prop_assert_eq!(distance.cost == 0, a == b);
    }

    #[test]
    fn self_distance_is_zero_with_full_matches(a in tokens()) {
        let copy = a.clone();
        let distance = compute_distance(&a, &copy, &LowestCost, value_equal).expect("distance");
        prop_assert_eq!(distance.cost, 0);
        prop_assert_eq!(distance.matches, a.len());
    }

    #[test]
    fn highest_match_never_undercounts(a in tokens(), b in tokens()) {
        // The match-first policy retains at least as many matched pairs as
        // the cost-first policy on the same inputs.
        let lowest = compute_distance(&a, &b, &LowestCost, value_equal).expect("lowest");
        let highest = compute_distance(&a, &b, &HighestMatch, value_equal).expect("highest");
        prop_assert!(highest.matches >= lowest.matches);
    }
}
