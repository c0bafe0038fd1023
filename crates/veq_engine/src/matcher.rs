//! Multiset matching for set-like containers.
//!
//! Set elements have no keys and no order, so comparing two sets means
//! finding a one-to-one pairing between their elements under structural
//! equality: each right-hand element may be consumed by at most one
//! left-hand element. The pairing strategy lives behind [`SetMatcher`] so
//! callers can choose between the historical greedy behavior and a true
//! maximum-matching solver.

use smallvec::{smallvec, SmallVec};
use tracing::trace;
use veq_value::Value;

/// Structural-equality callback handed to a matcher.
///
/// The callback closes over the engine's traversal state (the visited
/// registry), so nested and cyclic elements compare correctly.
pub type EqFn<'a> = dyn FnMut(&Value, &Value) -> bool + 'a;

/// Strategy for pairing the elements of two equal-cardinality sets.
pub trait SetMatcher {
    /// Whether every left-hand element can be paired with a distinct,
    /// structurally-equal right-hand element.
    ///
    /// Both slices have the same length; the engine has already rejected
    /// sets of differing cardinality.
    fn perfect_matching(&self, left: &[Value], right: &[Value], eq: &mut EqFn<'_>) -> bool;
}

/// First-fit greedy matching, the default.
///
/// Scans right-hand elements in iteration order and permanently claims the
/// first unclaimed structural match. No backtracking: an assignment order
/// that starves a later element is reported as unequal even when a
/// different assignment would have succeeded. Under an equivalence
/// relation this cannot happen; it is reachable only when equality itself
/// is order-sensitive (cycle-guard verdicts). O(n^2) comparisons.
pub struct GreedyMatcher;

impl SetMatcher for GreedyMatcher {
    fn perfect_matching(&self, left: &[Value], right: &[Value], eq: &mut EqFn<'_>) -> bool {
        debug_assert_eq!(left.len(), right.len());
        let mut claimed: SmallVec<[bool; 16]> = smallvec![false; right.len()];
        'next_left: for l in left {
            for (pos, r) in right.iter().enumerate() {
                if !claimed[pos] && eq(l, r) {
                    claimed[pos] = true;
                    continue 'next_left;
                }
            }
            trace!(element = %l, "no unclaimed counterpart for set element");
            return false;
        }
        true
    }
}

/// Maximum bipartite matching via augmenting paths.
///
/// Accepts every pair of multisets that admits a perfect matching under
/// some assignment order, at the cost of diverging from the historical
/// greedy behavior in the starvation cases `GreedyMatcher` rejects.
pub struct ExactMatcher;

impl SetMatcher for ExactMatcher {
    fn perfect_matching(&self, left: &[Value], right: &[Value], eq: &mut EqFn<'_>) -> bool {
        debug_assert_eq!(left.len(), right.len());
        let n = left.len();

        // Materialize the adjacency once; augmenting revisits edges.
        let mut adjacent = vec![false; n * n];
        for (i, l) in left.iter().enumerate() {
            for (j, r) in right.iter().enumerate() {
                adjacent[i * n + j] = eq(l, r);
            }
        }

        // owner[j] = left index currently holding right position j
        let mut owner: Vec<Option<usize>> = vec![None; n];
        for i in 0..n {
            let mut visited = vec![false; n];
            if !augment(i, n, &adjacent, &mut visited, &mut owner) {
                return false;
            }
        }
        true
    }
}

/// Try to assign left element `i`, displacing current owners along an
/// augmenting path where possible.
fn augment(
    i: usize,
    n: usize,
    adjacent: &[bool],
    visited: &mut [bool],
    owner: &mut [Option<usize>],
) -> bool {
    for j in 0..n {
        if !adjacent[i * n + j] || visited[j] {
            continue;
        }
        visited[j] = true;
        let current = owner[j];
        match current {
            None => {
                owner[j] = Some(i);
                return true;
            }
            Some(holder) if augment(holder, n, adjacent, visited, owner) => {
                owner[j] = Some(i);
                return true;
            }
            Some(_) => {}
        }
    }
    false
}
