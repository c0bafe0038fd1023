use super::*;
use pretty_assertions::assert_eq;

#[test]
fn kind_tags() {
    assert_eq!(Value::int(1).kind(), Kind::Int);
    assert_eq!(Value::float(1.0).kind(), Kind::Float);
    assert_eq!(Value::Absent.kind(), Kind::Absent);
    assert_eq!(Value::time(0).kind(), Kind::Time);
    assert_eq!(Value::string("x").kind(), Kind::Str);
    assert_eq!(Value::seq(vec![]).kind(), Kind::Seq);
    assert_eq!(Value::set(vec![]).kind(), Kind::Set);
    assert_eq!(Value::map([]).kind(), Kind::Map);
    assert_eq!(Value::empty_record().kind(), Kind::Record);
}

#[test]
fn factory_methods() {
    let s = Value::string("hello");
    assert_eq!(s.as_str(), Some("hello"));

    let xs = Value::seq(vec![Value::int(1), Value::int(2)]);
    assert_eq!(xs.len(), Some(2));

    let r = Value::record([("a", Value::int(1))]);
    assert_eq!(r.len(), Some(1));

    let m = Value::map([(Key::from("a"), Value::int(1))]);
    assert_eq!(m.len(), Some(1));

    assert_eq!(Value::int(7).len(), None);
}

#[test]
fn clone_shares_the_allocation() {
    let xs = Value::seq(vec![Value::int(1)]);
    let ys = xs.clone();
    match (&xs, &ys) {
        (Value::Seq(a), Value::Seq(b)) => assert!(Heap::ptr_eq(a, b)),
        _ => panic!("expected sequences"),
    }
    // Mutation through one handle is visible through the other.
    assert!(ys.push(Value::int(2)));
    assert_eq!(xs.len(), Some(2));
}

#[test]
fn mutation_helpers_respect_kind() {
    let r = Value::empty_record();
    assert!(r.insert_field("x", Value::int(1)));
    assert!(!r.push(Value::int(1)));
    assert!(!r.add(Value::int(1)));
    assert!(!r.map_insert(Key::Int(0), Value::int(1)));
    assert_eq!(r.len(), Some(1));
}

#[test]
fn a_record_can_contain_itself() {
    let r = Value::empty_record();
    r.insert_field("self", r.clone());
    match &r {
        Value::Record(h) => match h.read().get("self") {
            Some(Value::Record(inner)) => assert!(Heap::ptr_eq(h, inner)),
            _ => panic!("expected the record itself"),
        },
        _ => panic!("expected a record"),
    }
}

#[test]
fn display_is_cycle_safe() {
    let r = Value::empty_record();
    r.insert_field("self", r.clone());
    assert_eq!(r.to_string(), "<record[1]>");
}

#[test]
fn timestamp_from_secs_scales_to_millis() {
    assert_eq!(Timestamp::from_secs(2), Timestamp::from_millis(2000));
    assert_eq!(Timestamp::from_secs(2).millis(), 2000);
    // Out-of-range seconds saturate instead of wrapping.
    assert_eq!(Timestamp::from_secs(i64::MAX).millis(), i64::MAX);
}

#[test]
fn display_scalars() {
    assert_eq!(Value::int(42).to_string(), "42");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Absent.to_string(), "absent");
    assert_eq!(Value::string("hi").to_string(), "\"hi\"");
    assert_eq!(Value::time(1500).to_string(), "@1500ms");
}
