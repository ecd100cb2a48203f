use crate::{Document, Error, Kind};

#[test]
fn name_and_index_lookups_compose() {
    let mut doc = Document::from_string(r#"{"a":1,"b":[2,3,"x"]}"#).unwrap();

    let a = doc.root().get_by_name("a").unwrap();
    assert_eq!(a.kind(), Kind::Misc);
    assert_eq!(a.to_u64().unwrap(), 1);

    let b = doc.root().get_by_name("b").unwrap();
    assert_eq!(b.kind(), Kind::Array);
    let third = b.get_by_index(2).unwrap();
    assert_eq!(third.kind(), Kind::String);
    assert_eq!(third.as_str().unwrap(), "x");
}

#[test]
fn expansion_counts_direct_children_only() {
    let mut doc =
        Document::from_string(r#"{"a": 1, "b": {"c": 2, "d": 3}, "e": [4, 5, 6]}"#).unwrap();
    assert_eq!(doc.root().child_count().unwrap(), 3);
    assert_eq!(
        doc.root().get_by_name("b").unwrap().child_count().unwrap(),
        2
    );
    assert_eq!(
        doc.root().get_by_name("e").unwrap().child_count().unwrap(),
        3
    );
}

#[test]
fn second_expansion_is_a_no_op() {
    let mut doc = Document::from_string(r#"{"a":1,"b":2}"#).unwrap();
    assert_eq!(doc.root().child_count().unwrap(), 2);
    let _ = doc.root().get_by_name("a").unwrap();
    assert_eq!(doc.root().child_count().unwrap(), 2);
    assert_eq!(doc.root().child_count().unwrap(), 2);
}

#[test]
fn lookups_miss_with_not_found() {
    let mut doc = Document::from_string(r#"{"a":[1]}"#).unwrap();
    assert!(matches!(
        doc.root().get_by_name("z").unwrap_err(),
        Error::NotFound
    ));

    let arr = doc.root().get_by_name("a").unwrap();
    assert!(matches!(arr.get_by_index(1).unwrap_err(), Error::NotFound));
}

#[test]
fn lookups_on_the_wrong_kind_are_rejected() {
    let mut doc = Document::from_string(r#"{"a":[1],"s":"x"}"#).unwrap();

    assert!(matches!(
        doc.root().get_by_index(0).unwrap_err(),
        Error::TypeMismatch {
            expected: "array",
            found: Kind::Object,
        }
    ));

    let arr = doc.root().get_by_name("a").unwrap();
    assert!(matches!(
        arr.get_by_name("a").unwrap_err(),
        Error::TypeMismatch {
            expected: "object",
            found: Kind::Array,
        }
    ));

    let mut s = doc.root().get_by_name("s").unwrap();
    assert!(matches!(
        s.child_count().unwrap_err(),
        Error::TypeMismatch { .. }
    ));
}

#[test]
fn matching_is_exact_and_first_wins() {
    let mut doc = Document::from_string(r#"{"ab":1,"abc":2,"ab":3}"#).unwrap();
    // Exact byte comparison: "ab" must not match "abc".
    assert_eq!(doc.root().get_by_name("abc").unwrap().to_u64().unwrap(), 2);
    // Duplicate keys resolve to the first member in insertion order.
    assert_eq!(doc.root().get_by_name("ab").unwrap().to_u64().unwrap(), 1);
    assert!(matches!(
        doc.root().get_by_name("AB").unwrap_err(),
        Error::NotFound
    ));
}

#[test]
fn empty_containers_have_no_children() {
    let mut doc = Document::from_string(r#"{"o":{},"a":[]}"#).unwrap();
    assert_eq!(
        doc.root().get_by_name("o").unwrap().child_count().unwrap(),
        0
    );
    assert_eq!(
        doc.root().get_by_name("a").unwrap().child_count().unwrap(),
        0
    );
}

#[test]
fn broken_member_is_absent_not_fatal() {
    // The value of "a" never closes its quote; expansion drops the member
    // instead of failing the object.
    let mut doc = Document::from_string(r#"{"a":"oops}"#).unwrap();
    assert!(matches!(
        doc.root().get_by_name("a").unwrap_err(),
        Error::NotFound
    ));
    assert_eq!(doc.root().child_count().unwrap(), 0);
}

#[test]
fn members_before_a_broken_one_survive() {
    let mut doc = Document::from_string(r#"{"ok":7,"bad":"oops}"#).unwrap();
    assert_eq!(doc.root().get_by_name("ok").unwrap().to_u64().unwrap(), 7);
    assert!(matches!(
        doc.root().get_by_name("bad").unwrap_err(),
        Error::NotFound
    ));
    assert_eq!(doc.root().child_count().unwrap(), 1);
}

#[test]
fn member_with_no_value_is_dropped() {
    let mut doc = Document::from_string(r#"{"a":,"b":2}"#).unwrap();
    assert!(matches!(
        doc.root().get_by_name("a").unwrap_err(),
        Error::NotFound
    ));
    assert_eq!(doc.root().get_by_name("b").unwrap().to_u64().unwrap(), 2);
}

#[test]
fn missing_commas_between_string_values_are_tolerated() {
    let mut doc = Document::from_string(r#"{"a":"x" "b":"y"}"#).unwrap();
    assert_eq!(doc.root().get_by_name("a").unwrap().as_str().unwrap(), "x");
    assert_eq!(doc.root().get_by_name("b").unwrap().as_str().unwrap(), "y");
}

#[test]
fn names_and_raw_views_are_exposed() {
    let mut doc = Document::from_string(r#"{ "key" : [1, 2] }"#).unwrap();
    assert!(doc.root().name().is_none());

    let child = doc.root().get_by_name("key").unwrap();
    assert_eq!(child.name().unwrap(), "key");
    assert_eq!(child.raw(), "[1, 2]");
    assert!(child.get_by_index(0).unwrap().name().is_none());
}

#[test]
fn deep_paths_expand_level_by_level() {
    let text = r#"
        {
            "flows": [
                { "ttl": 64, "tags": ["fast", "wide"] },
                { "ttl": 32, "tags": [] }
            ]
        }
    "#;
    let mut doc = Document::from_string(text).unwrap();

    let first = doc.root().get_by_name("flows").unwrap().get_by_index(0).unwrap();
    assert_eq!(first.get_by_name("ttl").unwrap().to_u64().unwrap(), 64);

    let tag = doc
        .root()
        .get_by_name("flows")
        .unwrap()
        .get_by_index(0)
        .unwrap()
        .get_by_name("tags")
        .unwrap()
        .get_by_index(1)
        .unwrap();
    assert_eq!(tag.as_str().unwrap(), "wide");

    let second = doc.root().get_by_name("flows").unwrap().get_by_index(1).unwrap();
    assert_eq!(second.get_by_name("ttl").unwrap().to_u64().unwrap(), 32);

    let second = doc.root().get_by_name("flows").unwrap().get_by_index(1).unwrap();
    assert_eq!(
        second.get_by_name("tags").unwrap().child_count().unwrap(),
        0
    );
}
