use rstest::rstest;

use crate::{Document, Error, Kind};

#[rstest]
#[case("123", 123)]
#[case("0", 0)]
#[case("0x1f", 0x1f)]
#[case("017", 0o17)]
#[case("true", 1)]
#[case("yes", 1)]
#[case("false", 0)]
#[case("no", 0)]
#[case("null", 0)]
fn unsigned_readings(#[case] input: &str, #[case] expected: u64) {
    let mut doc = Document::from_string(input).unwrap();
    assert_eq!(doc.root().kind(), Kind::Misc);
    assert_eq!(doc.root().to_u64().unwrap(), expected);
}

#[rstest]
#[case("-42", -42)]
#[case("42", 42)]
#[case("-0x10", -16)]
#[case("true", 1)]
#[case("no", 0)]
fn signed_readings(#[case] input: &str, #[case] expected: i64) {
    let mut doc = Document::from_string(input).unwrap();
    assert_eq!(doc.root().to_i64().unwrap(), expected);
}

#[rstest]
#[case("abc")]
#[case("12a")]
#[case("-true")]
#[case("1.5")]
fn unconvertible_tokens(#[case] input: &str) {
    let mut doc = Document::from_string(input).unwrap();
    assert!(matches!(doc.root().to_u64().unwrap_err(), Error::Conversion));
    assert!(matches!(doc.root().to_i64().unwrap_err(), Error::Conversion));
}

#[test]
fn numeric_accessors_require_a_misc_leaf() {
    let mut doc = Document::from_string(r#"{"s":"1"}"#).unwrap();
    assert!(matches!(
        doc.root().to_u64().unwrap_err(),
        Error::TypeMismatch {
            expected: "misc",
            found: Kind::Object,
        }
    ));
    let s = doc.root().get_by_name("s").unwrap();
    assert!(matches!(s.to_u64().unwrap_err(), Error::TypeMismatch { .. }));
}

#[test]
fn string_content_round_trips() {
    let mut doc = Document::from_string(r#""hello""#).unwrap();
    assert_eq!(doc.root().kind(), Kind::String);
    assert_eq!(doc.root().as_str().unwrap(), "hello");
}

#[test]
fn empty_string_literal_reads_as_empty() {
    let mut doc = Document::from_string(r#""""#).unwrap();
    assert_eq!(doc.root().as_str().unwrap(), "");
    let mut out = [0u8; 4];
    assert_eq!(doc.root().copy_str_to(&mut out).unwrap(), 0);
}

#[test]
fn escapes_are_not_decoded() {
    // The scanner closes the string at the quote after the backslash, so
    // the content keeps the backslash verbatim.
    let mut doc = Document::from_string(r#"{"k":"a\"}"#).unwrap();
    let child = doc.root().get_by_name("k").unwrap();
    assert_eq!(child.as_str().unwrap(), "a\\");
}

#[test]
fn string_accessors_require_a_string_leaf() {
    let mut doc = Document::from_string("42").unwrap();
    assert!(matches!(
        doc.root().as_str().unwrap_err(),
        Error::TypeMismatch {
            expected: "string",
            found: Kind::Misc,
        }
    ));
}

#[test]
fn copy_out_checks_capacity() {
    let mut doc = Document::from_string(r#""hello""#).unwrap();

    let mut exact = [0u8; 5];
    assert_eq!(doc.root().copy_str_to(&mut exact).unwrap(), 5);
    assert_eq!(&exact, b"hello");

    let mut short = [0u8; 4];
    assert!(matches!(
        doc.root().copy_str_to(&mut short).unwrap_err(),
        Error::InsufficientCapacity {
            needed: 5,
            capacity: 4,
        }
    ));
}

#[test]
fn non_utf8_content_is_still_reachable_as_bytes() {
    let bytes = alloc::vec![b'"', 0xff, 0xfe, b'"'];
    let mut doc = Document::from_bytes(bytes).unwrap();
    assert!(matches!(doc.root().as_str().unwrap_err(), Error::Conversion));
    assert_eq!(doc.root().as_bstr().unwrap(), bstr::BStr::new(&[0xff, 0xfe]));
}

#[test]
fn accessors_never_expand_children() {
    // Reading a scalar from an expanded sibling must not disturb the
    // container's child list.
    let mut doc = Document::from_string(r#"{"a":1,"b":"x"}"#).unwrap();
    assert_eq!(doc.root().child_count().unwrap(), 2);
    assert_eq!(doc.root().get_by_name("a").unwrap().to_u64().unwrap(), 1);
    assert_eq!(doc.root().get_by_name("b").unwrap().as_str().unwrap(), "x");
    assert_eq!(doc.root().child_count().unwrap(), 2);
}
