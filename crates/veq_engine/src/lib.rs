//! Veq Engine - structural equality for dynamic values.
//!
//! The engine decides whether two arbitrarily-shaped, possibly
//! self-referential [`Value`]s are deeply equivalent. It is a single
//! recursive decision procedure:
//!
//! 1. **Identity & scalar check** - same-allocation handles and scalars
//!    under the SameValueZero rule (NaN equals NaN, +0 equals -0) resolve
//!    without recursion.
//! 2. **Kind dispatch** - operands of differing structural kinds are never
//!    equal; same-kind containers route to their comparator.
//! 3. **Cycle guard** - a visited registry pairs each left-hand allocation
//!    with the right-hand allocation it is being compared against, for as
//!    long as that comparison is on the call stack, so cyclic values
//!    terminate and mismatched cycles are detected.
//! 4. **Container comparators** - timestamps, patterns, maps, sequences,
//!    records, each recursing back into the engine for nested values.
//! 5. **Multiset matcher** - sets need a one-to-one pairing of their
//!    elements; see [`SetMatcher`].
//!
//! # Contract
//!
//! [`structural_eq`] is pure and total: no I/O, no error path, a boolean
//! for every well-formed pair of inputs, cyclic or not. Recursion depth is
//! bounded by the nesting depth of the operands, so a pathologically deep
//! *acyclic* value can exhaust the call stack; bounding input depth is the
//! caller's job.
//!
//! # Example
//!
//! ```
//! use veq_engine::structural_eq;
//! use veq_value::Value;
//!
//! let a = Value::record([("x", Value::seq(vec![Value::int(1)]))]);
//! let b = Value::record([("x", Value::seq(vec![Value::int(1)]))]);
//! assert!(structural_eq(&a, &b));
//! ```

mod engine;
mod matcher;

pub use engine::{structural_eq, structural_eq_with};
pub use matcher::{EqFn, ExactMatcher, GreedyMatcher, SetMatcher};
