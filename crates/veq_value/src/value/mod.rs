//! Dynamic values for the veq engine.
//!
//! `Value` is a closed union over every structural kind the engine can
//! compare. Scalars live inline; everything else is heap-allocated behind
//! `Heap<T>` so it has a reference identity. Container variants additionally
//! carry a `RwLock` so callers can close reference cycles after allocation.
//!
//! The engine only ever takes read locks. Mutating a value while it is
//! being compared is undefined behavior (the comparison stays memory-safe
//! but its verdict is unspecified).

mod heap;
mod key;
mod pattern;
mod time;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;

pub use heap::Heap;
pub use key::{FloatBits, Key};
pub use pattern::{FlagError, Pattern, PatternFlags};
pub use time::Timestamp;

/// The structural kind of a value.
///
/// Operands of differing kinds are never structurally equal; the engine
/// decides which comparator applies from this tag alone.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Kind {
    Int,
    Float,
    Bool,
    Str,
    Absent,
    Time,
    Pattern,
    Seq,
    Set,
    Map,
    Record,
}

/// A dynamic value.
#[derive(Clone)]
pub enum Value {
    // Scalars (inline, no heap allocation)
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// The absence-of-value marker.
    Absent,
    /// An instant in time.
    Time(Timestamp),

    // Heap values (factory-method allocation via `Heap<T>`)
    /// String value. Compared by content, not identity.
    Str(Heap<String>),
    /// Pattern value: source text plus flag set.
    Pattern(Heap<Pattern>),
    /// Ordered, index-addressed sequence.
    Seq(Heap<RwLock<Vec<Value>>>),
    /// Unordered collection of elements with no keys, in insertion order.
    Set(Heap<RwLock<Vec<Value>>>),
    /// Associative container with scalar keys.
    Map(Heap<RwLock<FxHashMap<Key, Value>>>),
    /// Record with string keys. Every key is an own key; there is no
    /// inheritance chain in this model.
    Record(Heap<RwLock<FxHashMap<String, Value>>>),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a floating-point value.
    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a timestamp value from epoch milliseconds.
    #[inline]
    pub fn time(ms: i64) -> Self {
        Value::Time(Timestamp::from_millis(ms))
    }

    /// Create a pattern value.
    #[inline]
    pub fn pattern(p: Pattern) -> Self {
        Value::Pattern(Heap::new(p))
    }

    /// Create a sequence value.
    ///
    /// # Example
    ///
    /// ```text
    /// let empty = Value::seq(vec![]);
    /// let nums = Value::seq(vec![Value::int(1), Value::int(2)]);
    /// ```
    #[inline]
    pub fn seq(items: Vec<Value>) -> Self {
        Value::Seq(Heap::new(RwLock::new(items)))
    }

    /// Create a set value from elements in insertion order.
    ///
    /// Elements are stored as given; the engine's matcher is what gives the
    /// container its unordered semantics.
    #[inline]
    pub fn set(items: Vec<Value>) -> Self {
        Value::Set(Heap::new(RwLock::new(items)))
    }

    /// Create a map value.
    ///
    /// # Example
    ///
    /// ```text
    /// let m = Value::map([(Key::from("a"), Value::int(1))]);
    /// ```
    #[inline]
    pub fn map<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        Value::Map(Heap::new(RwLock::new(entries.into_iter().collect())))
    }

    /// Create a record value.
    ///
    /// # Example
    ///
    /// ```text
    /// let r = Value::record([("a", Value::int(1))]);
    /// ```
    #[inline]
    pub fn record<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let entries = entries.into_iter().map(|(k, v)| (k.into(), v));
        Value::Record(Heap::new(RwLock::new(entries.collect())))
    }

    /// Create an empty record value.
    #[inline]
    pub fn empty_record() -> Self {
        Value::Record(Heap::new(RwLock::new(FxHashMap::default())))
    }
}

// Mutation helpers (cycle construction)

impl Value {
    /// Insert a field into a record, replacing any existing value.
    ///
    /// Returns `false` (and does nothing) when `self` is not a record.
    /// Passing a clone of the record itself closes a reference cycle.
    pub fn insert_field(&self, key: impl Into<String>, value: Value) -> bool {
        match self {
            Value::Record(h) => {
                h.write().insert(key.into(), value);
                true
            }
            _ => false,
        }
    }

    /// Insert an entry into a map, replacing any existing value for the key.
    ///
    /// Returns `false` (and does nothing) when `self` is not a map.
    pub fn map_insert(&self, key: Key, value: Value) -> bool {
        match self {
            Value::Map(h) => {
                h.write().insert(key, value);
                true
            }
            _ => false,
        }
    }

    /// Append an element to a sequence.
    ///
    /// Returns `false` (and does nothing) when `self` is not a sequence.
    pub fn push(&self, value: Value) -> bool {
        match self {
            Value::Seq(h) => {
                h.write().push(value);
                true
            }
            _ => false,
        }
    }

    /// Append an element to a set.
    ///
    /// Returns `false` (and does nothing) when `self` is not a set.
    pub fn add(&self, value: Value) -> bool {
        match self {
            Value::Set(h) => {
                h.write().push(value);
                true
            }
            _ => false,
        }
    }
}

// Accessors

impl Value {
    /// The structural kind tag.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Bool(_) => Kind::Bool,
            Value::Absent => Kind::Absent,
            Value::Time(_) => Kind::Time,
            Value::Str(_) => Kind::Str,
            Value::Pattern(_) => Kind::Pattern,
            Value::Seq(_) => Kind::Seq,
            Value::Set(_) => Kind::Set,
            Value::Map(_) => Kind::Map,
            Value::Record(_) => Kind::Record,
        }
    }

    /// The integer payload, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Number of entries or elements, if this is a container.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Seq(h) | Value::Set(h) => Some(h.read().len()),
            Value::Map(h) => Some(h.read().len()),
            Value::Record(h) => Some(h.read().len()),
            _ => None,
        }
    }
}

// Containers are summarized rather than recursed into: a value may contain
// itself, and formatting must not hang on it.

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Absent => write!(f, "absent"),
            Value::Time(t) => write!(f, "{t}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Pattern(p) => write!(f, "{p}"),
            Value::Seq(h) => write!(f, "<seq[{}]>", h.read().len()),
            Value::Set(h) => write!(f, "<set[{}]>", h.read().len()),
            Value::Map(h) => write!(f, "<map[{}]>", h.read().len()),
            Value::Record(h) => write!(f, "<record[{}]>", h.read().len()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Absent => write!(f, "Absent"),
            Value::Time(t) => write!(f, "Time({})", t.millis()),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Pattern(p) => write!(f, "Pattern({p})"),
            Value::Seq(h) => write!(f, "Seq(len={}, addr={:#x})", h.read().len(), h.addr()),
            Value::Set(h) => write!(f, "Set(len={}, addr={:#x})", h.read().len(), h.addr()),
            Value::Map(h) => write!(f, "Map(len={}, addr={:#x})", h.read().len(), h.addr()),
            Value::Record(h) => {
                write!(f, "Record(len={}, addr={:#x})", h.read().len(), h.addr())
            }
        }
    }
}

#[cfg(test)]
mod tests;
