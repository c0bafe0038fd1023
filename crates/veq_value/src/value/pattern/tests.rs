use super::*;
use pretty_assertions::assert_eq;

#[test]
fn flag_order_is_immaterial() {
    let a = PatternFlags::parse("gi");
    let b = PatternFlags::parse("ig");
    assert_eq!(a, b);
}

#[test]
fn unknown_flag_rejected() {
    assert_eq!(PatternFlags::parse("gx"), Err(FlagError::Unknown('x')));
}

#[test]
fn duplicate_flag_rejected() {
    assert_eq!(PatternFlags::parse("gig"), Err(FlagError::Duplicate('g')));
}

#[test]
fn empty_flag_string_is_empty_set() {
    assert_eq!(PatternFlags::parse(""), Ok(PatternFlags::empty()));
}

#[test]
fn compact_emits_canonical_order() {
    let flags = match PatternFlags::parse("yig") {
        Ok(flags) => flags,
        Err(e) => panic!("parse failed: {e}"),
    };
    assert_eq!(flags.compact(), "giy");
}

#[test]
fn pattern_display() {
    let p = match Pattern::parse("a+b", "im") {
        Ok(p) => p,
        Err(e) => panic!("parse failed: {e}"),
    };
    assert_eq!(p.to_string(), "/a+b/im");
}

#[test]
fn pattern_equality_is_source_and_flags() {
    let a = Pattern::new("abc", PatternFlags::GLOBAL);
    let b = Pattern::new("abc", PatternFlags::GLOBAL);
    let c = Pattern::new("abc", PatternFlags::IGNORE_CASE);
    let d = Pattern::new("abd", PatternFlags::GLOBAL);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, d);
}
