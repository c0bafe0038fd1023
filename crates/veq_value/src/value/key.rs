//! Map keys with SameValueZero semantics.
//!
//! Associative containers look keys up by the container's native
//! key-equality, never by deep structural equality. `Key` is that native
//! key type: a hashable scalar where a NaN key equals itself and negative
//! zero is the same key as positive zero.

use std::fmt;

/// The canonical bit pattern used for every NaN key.
const CANONICAL_NAN: u64 = f64::NAN.to_bits();

/// A floating-point key, stored as canonicalized bits.
///
/// Canonicalization happens at construction: all NaN payloads collapse to
/// one bit pattern and `-0.0` collapses to `+0.0`, so the derived `Eq` and
/// `Hash` implement the SameValueZero rule.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatBits(u64);

impl FloatBits {
    pub fn new(f: f64) -> Self {
        if f.is_nan() {
            FloatBits(CANONICAL_NAN)
        } else if f == 0.0 {
            FloatBits(0)
        } else {
            FloatBits(f.to_bits())
        }
    }

    pub fn get(self) -> f64 {
        f64::from_bits(self.0)
    }
}

impl fmt::Debug for FloatBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A scalar key in an associative container.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Int(i64),
    Float(FloatBits),
    Bool(bool),
    Str(String),
}

impl Key {
    /// Create a float key, canonicalizing NaN and signed zero.
    pub fn float(f: f64) -> Self {
        Key::Float(FloatBits::new(f))
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{n}"),
            Key::Float(bits) => write!(f, "{}", bits.get()),
            Key::Bool(b) => write!(f, "{b}"),
            Key::Str(s) => write!(f, "{s:?}"),
        }
    }
}
