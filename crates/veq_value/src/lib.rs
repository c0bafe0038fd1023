//! Veq Value - the dynamic value model compared by the veq engine.
//!
//! This crate provides:
//! - The closed `Value` union over every structural kind the engine knows
//!   (scalars, absence, timestamps, patterns, maps, sets, sequences, records)
//! - The `Heap<T>` wrapper that enforces factory-method allocation and gives
//!   every container a stable reference identity
//! - `Key`, the hashable map-key type with SameValueZero semantics
//! - `Pattern` and `PatternFlags`, the source-plus-flag-set pattern value
//!
//! # Arc Enforcement Architecture
//!
//! All heap allocations go through factory methods on `Value`. The `Heap<T>`
//! wrapper has a private constructor, so external code cannot create heap
//! values directly:
//!
//! ```text
//! let s = Value::string("hello");                  // OK
//! let xs = Value::seq(vec![Value::int(1)]);        // OK
//! let s = Value::Str(Heap::new(...));              // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Cycles
//!
//! Container values carry interior mutability so callers can close reference
//! cycles after allocation:
//!
//! ```text
//! let a = Value::record([("x", Value::int(1))]);
//! a.insert_field("self", a.clone());               // a now contains itself
//! ```
//!
//! Cloning a `Value` clones the handle, not the allocation, so identity and
//! cycles survive `clone()`.

mod value;

pub use value::{
    FlagError, FloatBits, Heap, Key, Kind, Pattern, PatternFlags, Timestamp, Value,
};
