//! Pattern values: source text plus a flag set.
//!
//! A pattern value carries no compiled matcher, only the two components the
//! engine compares: the source text and the set of behavior flags. Flags are
//! a genuine set, so `"gi"` and `"ig"` construct the same value.

use bitflags::bitflags;
use std::fmt;
use thiserror::Error;

bitflags! {
    /// Behavior flags for a pattern value.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct PatternFlags: u8 {
        const IGNORE_CASE = 1 << 0;
        const GLOBAL = 1 << 1;
        const MULTI_LINE = 1 << 2;
        const DOT_ALL = 1 << 3;
        const UNICODE = 1 << 4;
        const STICKY = 1 << 5;
    }
}

/// Invalid compact flag string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FlagError {
    #[error("unknown pattern flag `{0}`")]
    Unknown(char),
    #[error("duplicate pattern flag `{0}`")]
    Duplicate(char),
}

/// Compact flag letters in canonical emission order.
const FLAG_LETTERS: [(PatternFlags, char); 6] = [
    (PatternFlags::GLOBAL, 'g'),
    (PatternFlags::IGNORE_CASE, 'i'),
    (PatternFlags::MULTI_LINE, 'm'),
    (PatternFlags::DOT_ALL, 's'),
    (PatternFlags::UNICODE, 'u'),
    (PatternFlags::STICKY, 'y'),
];

impl PatternFlags {
    /// Parse a compact flag string such as `"gi"`.
    ///
    /// Order is immaterial; a repeated or unrecognized letter is an error.
    pub fn parse(s: &str) -> Result<Self, FlagError> {
        let mut flags = PatternFlags::empty();
        for c in s.chars() {
            let flag = match c {
                'g' => PatternFlags::GLOBAL,
                'i' => PatternFlags::IGNORE_CASE,
                'm' => PatternFlags::MULTI_LINE,
                's' => PatternFlags::DOT_ALL,
                'u' => PatternFlags::UNICODE,
                'y' => PatternFlags::STICKY,
                _ => return Err(FlagError::Unknown(c)),
            };
            if flags.contains(flag) {
                return Err(FlagError::Duplicate(c));
            }
            flags.insert(flag);
        }
        Ok(flags)
    }

    /// The compact flag string in canonical order.
    pub fn compact(&self) -> String {
        let mut s = String::with_capacity(FLAG_LETTERS.len());
        for (flag, c) in FLAG_LETTERS {
            if self.contains(flag) {
                s.push(c);
            }
        }
        s
    }
}

/// A pattern value.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Pattern {
    source: String,
    flags: PatternFlags,
}

impl Pattern {
    pub fn new(source: impl Into<String>, flags: PatternFlags) -> Self {
        Pattern {
            source: source.into(),
            flags,
        }
    }

    /// Build a pattern from source text and a compact flag string.
    pub fn parse(source: impl Into<String>, flags: &str) -> Result<Self, FlagError> {
        Ok(Pattern::new(source, PatternFlags::parse(flags)?))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> PatternFlags {
        self.flags
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags.compact())
    }
}

#[cfg(test)]
mod tests;
