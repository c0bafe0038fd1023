//! The recursive decision procedure.

use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use tracing::trace;
use veq_value::{Heap, Key, Value};

use crate::matcher::{GreedyMatcher, SetMatcher};

/// Deep structural equality with the default (greedy) set matcher.
///
/// Pure and deterministic; never errors. See the crate docs for the full
/// contract, including the stack-depth caveat for deeply nested acyclic
/// inputs.
pub fn structural_eq(a: &Value, b: &Value) -> bool {
    structural_eq_with(a, b, &GreedyMatcher)
}

/// Deep structural equality with a caller-chosen set matcher.
pub fn structural_eq_with(a: &Value, b: &Value, matcher: &dyn SetMatcher) -> bool {
    let mut cmp = Comparer::new(matcher);
    let verdict = cmp.eq_values(a, b);
    trace!(verdict, left = %a, right = %b, "structural comparison finished");
    verdict
}

/// Container pairs currently on the comparison call stack.
///
/// Keyed by the left-hand allocation address, recording the right-hand
/// allocation address it is being compared against. An entry lives exactly
/// as long as that comparison frame: re-encountering a registered left-hand
/// reference means the traversal has looped back into an in-progress pair,
/// so instead of recursing again the engine asks whether the right-hand
/// side is the very allocation recorded on the way down. That terminates
/// cycles and rejects cycles that close differently.
///
/// Entries are removed when their frame returns. A pairing tried during a
/// failed candidate comparison (the multiset matcher probes many) must not
/// outlive that attempt, or it would veto later comparisons of the same
/// left container against a different right container.
#[derive(Default)]
struct VisitedRegistry {
    pairs: FxHashMap<usize, usize>,
}

impl VisitedRegistry {
    /// Consult the registry before comparing two containers.
    ///
    /// `None` means the pair was unseen and is now registered: proceed to
    /// compare contents. `Some(verdict)` means the left side is already on
    /// the stack and `verdict` is the final answer for this pair.
    fn check_or_insert(&mut self, left: usize, right: usize) -> Option<bool> {
        match self.pairs.entry(left) {
            Entry::Occupied(seen) => Some(*seen.get() == right),
            Entry::Vacant(slot) => {
                slot.insert(right);
                None
            }
        }
    }

    /// Unregister a pair whose comparison frame has returned.
    fn remove(&mut self, left: usize) {
        self.pairs.remove(&left);
    }
}

/// One top-level comparison: the visited registry plus the set-matching
/// strategy, threaded by `&mut` through every recursive step.
struct Comparer<'m> {
    matcher: &'m dyn SetMatcher,
    visited: VisitedRegistry,
}

impl<'m> Comparer<'m> {
    fn new(matcher: &'m dyn SetMatcher) -> Self {
        Comparer {
            matcher,
            visited: VisitedRegistry::default(),
        }
    }

    /// The engine proper: identity and scalar fast paths, then kind
    /// dispatch. Operands of differing kinds fall through to the final
    /// arm and are never equal.
    fn eq_values(&mut self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Int(x), Value::Int(y)) => x == y,
            (Value::Float(x), Value::Float(y)) => same_value_zero(*x, *y),
            (Value::Bool(x), Value::Bool(y)) => x == y,
            (Value::Absent, Value::Absent) => true,
            (Value::Time(x), Value::Time(y)) => x == y,
            (Value::Str(x), Value::Str(y)) => Heap::ptr_eq(x, y) || x.as_str() == y.as_str(),
            (Value::Pattern(x), Value::Pattern(y)) => {
                Heap::ptr_eq(x, y) || (x.source() == y.source() && x.flags() == y.flags())
            }
            (Value::Seq(x), Value::Seq(y)) => {
                Heap::ptr_eq(x, y)
                    || self.guarded(x.addr(), y.addr(), |cmp| {
                        let (xs, ys) = (x.read(), y.read());
                        cmp.seq_eq(&xs, &ys)
                    })
            }
            (Value::Set(x), Value::Set(y)) => {
                Heap::ptr_eq(x, y)
                    || self.guarded(x.addr(), y.addr(), |cmp| {
                        let (xs, ys) = (x.read(), y.read());
                        cmp.set_eq(&xs, &ys)
                    })
            }
            (Value::Map(x), Value::Map(y)) => {
                Heap::ptr_eq(x, y)
                    || self.guarded(x.addr(), y.addr(), |cmp| {
                        let (xs, ys) = (x.read(), y.read());
                        cmp.map_eq(&xs, &ys)
                    })
            }
            (Value::Record(x), Value::Record(y)) => {
                Heap::ptr_eq(x, y)
                    || self.guarded(x.addr(), y.addr(), |cmp| {
                        let (xs, ys) = (x.read(), y.read());
                        cmp.record_eq(&xs, &ys)
                    })
            }
            _ => false,
        }
    }

    /// Run a container comparison with its (left, right) pair registered
    /// for the duration of the frame.
    ///
    /// A registry hit short-circuits with the cycle verdict; otherwise the
    /// pair is registered, compared, and unregistered on the way out.
    fn guarded<F>(&mut self, left: usize, right: usize, compare: F) -> bool
    where
        F: FnOnce(&mut Self) -> bool,
    {
        if let Some(verdict) = self.visited.check_or_insert(left, right) {
            return verdict;
        }
        let verdict = compare(self);
        self.visited.remove(left);
        verdict
    }

    /// Index-wise, left to right, early exit on the first mismatch.
    fn seq_eq(&mut self, a: &[Value], b: &[Value]) -> bool {
        if a.len() != b.len() {
            return false;
        }
        for (va, vb) in a.iter().zip(b) {
            if !self.eq_values(va, vb) {
                return false;
            }
        }
        true
    }

    /// One-to-one pairing of elements, delegated to the matcher.
    fn set_eq(&mut self, a: &[Value], b: &[Value]) -> bool {
        if a.len() != b.len() {
            return false;
        }
        let matcher = self.matcher;
        let mut eq = |x: &Value, y: &Value| self.eq_values(x, y);
        matcher.perfect_matching(a, b, &mut eq)
    }

    /// Entry-wise by native key lookup; keys are never compared deeply.
    fn map_eq(&mut self, a: &FxHashMap<Key, Value>, b: &FxHashMap<Key, Value>) -> bool {
        if a.len() != b.len() {
            return false;
        }
        for (k, va) in a {
            let Some(vb) = b.get(k) else {
                return false;
            };
            if !self.eq_values(va, vb) {
                return false;
            }
        }
        true
    }

    /// Same key count, every left key present on the right, values equal.
    /// Key order is irrelevant.
    fn record_eq(&mut self, a: &FxHashMap<String, Value>, b: &FxHashMap<String, Value>) -> bool {
        if a.len() != b.len() {
            return false;
        }
        for (k, va) in a {
            let Some(vb) = b.get(k) else {
                return false;
            };
            if !self.eq_values(va, vb) {
                return false;
            }
        }
        true
    }
}

/// The SameValueZero scalar rule: NaN equals NaN, +0 equals -0, everything
/// else is exact.
fn same_value_zero(a: f64, b: f64) -> bool {
    if a.is_nan() {
        return b.is_nan();
    }
    a == b
}
