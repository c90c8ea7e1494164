//! Error kinds and offsets for malformed or mismatched input.

mod common;

use common::{BoonSmall, FathersData, Person, Status};
use insta::assert_snapshot;
use jsonbind::{Decimal, JsonError, JsonErrorKind, Value, from_str};
use jsonbind_testhelpers::setup;

fn error<T: jsonbind::Describe + std::fmt::Debug>(input: &str) -> JsonError {
    setup();
    match from_str::<T>(input) {
        Ok(value) => panic!("expected an error for {input:?}, got {value:?}"),
        Err(err) => err,
    }
}

fn message<T: jsonbind::Describe + std::fmt::Debug>(input: &str) -> String {
    error::<T>(input).to_string()
}

#[test]
fn unfinished_string() {
    assert_snapshot!(message::<String>("\"unfinished"), @"Bad string at 11");
}

#[test]
fn number_into_string_element() {
    assert_snapshot!(message::<Vec<String>>("[123]"), @"Bad string at 1");
}

#[test]
fn null_into_number_element() {
    assert_snapshot!(message::<Vec<i16>>("[null]"), @"Bad number (i16) at 1");
}

#[test]
fn fraction_into_integer_element() {
    assert_snapshot!(message::<Vec<i32>>("[123.456]"), @"Bad number (i32) at 1");
}

#[test]
fn unknown_enum_name() {
    assert_snapshot!(message::<Status>("\"Unknown\""), @"Bad enum value at 0");
    assert_snapshot!(message::<Status>("7"), @"Bad enum value at 0");
    assert_snapshot!(message::<Status>("\"married\""), @"Bad enum value at 0");
    assert_snapshot!(message::<Status>("1.0"), @"Bad enum value at 0");
    assert_snapshot!(message::<Status>("null"), @"Bad enum value at 0");
}

#[test]
fn scalar_mismatches() {
    assert_snapshot!(message::<bool>("1"), @"Bad boolean at 0");
    assert_snapshot!(message::<bool>("null"), @"Bad boolean at 0");
    assert_snapshot!(message::<u8>("256"), @"Bad number (u8) at 0");
    assert_snapshot!(message::<u32>("-1"), @"Bad number (u32) at 0");
    assert_snapshot!(message::<i32>("\"12\""), @"Bad number (i32) at 0");
    assert_snapshot!(message::<f32>("1e39"), @"Bad number (f32) at 0");
    assert_snapshot!(message::<Decimal>("1e40"), @"Bad number (Decimal) at 0");
    assert_snapshot!(
        message::<Decimal>("79228162514264337593543950336"),
        @"Bad number (Decimal) at 0"
    );
    assert_snapshot!(message::<char>("\"ab\""), @"Bad string at 0");
    assert_snapshot!(message::<String>("true"), @"Bad string at 0");
}

#[test]
fn null_into_non_nullable_targets() {
    assert_snapshot!(message::<Vec<char>>("[null]"), @"Bad string at 1");
    assert_snapshot!(message::<Box<u16>>("null"), @"Bad number (u16) at 0");
    assert_snapshot!(message::<Vec<Box<Status>>>("[null]"), @"Bad enum value at 1");
    assert_snapshot!(message::<Box<Box<f64>>>("null"), @"Bad number (f64) at 0");
    assert_snapshot!(message::<Decimal>("null"), @"Bad number (Decimal) at 0");
}

#[test]
fn container_mismatches() {
    assert_snapshot!(message::<Person>("[]"), @"Bad object (Person) at 0");
    assert_snapshot!(message::<Vec<u8>>("{}"), @"Bad array (Vec<u8>) at 0");
    assert_snapshot!(message::<[u8; 2]>("[1]"), @"Bad array length (expected 2) at 0");
    assert_snapshot!(message::<[u8; 2]>("[1, 2, 3]"), @"Bad array length (expected 2) at 0");
    assert_snapshot!(
        message::<BoonSmall>(r#"{"debug": "x", "nums": {"a": 1}}"#),
        @"Bad array (Vec<i32>) at 23"
    );
}

#[test]
fn nested_offsets() {
    let input = r#"{"fathers": [{"id": 1, "sons": [{"age": "old"}]}]}"#;
    assert_snapshot!(message::<FathersData>(input), @"Bad number (i32) at 40");
}

#[test]
fn structural_errors() {
    assert_snapshot!(message::<Value>(""), @"Unexpected end of input at 0");
    assert_snapshot!(message::<Value>("   "), @"Unexpected end of input at 3");
    assert_snapshot!(message::<Value>("[1,]"), @"Unexpected character at 3");
    assert_snapshot!(message::<Value>(r#"{"a":1,}"#), @"Unexpected character at 7");
    assert_snapshot!(message::<Value>(r#"{"a" 1}"#), @"Unexpected character at 5");
    assert_snapshot!(message::<Vec<i32>>("[1 2]"), @"Unexpected character at 3");
    assert_snapshot!(message::<i32>("12 13"), @"Unexpected character at 3");
    assert_snapshot!(message::<i32>("nul"), @"Unexpected end of input at 3");
    assert_snapshot!(message::<BoonSmall>(r#"{"debug": "x""#), @"Unexpected end of input at 13");
}

#[test]
fn unknown_members_are_still_validated() {
    assert_snapshot!(
        message::<BoonSmall>(r#"{"other": [1, tru], "debug": ""}"#),
        @"Unexpected character at 17"
    );
}

#[test]
fn errors_carry_stable_codes() {
    let err = error::<Vec<i16>>("[null]");
    assert_eq!(err.code(), "json::bad_number");
    assert_eq!(err.offset, 1);
    assert!(matches!(err.kind, JsonErrorKind::BadNumber { target: "i16" }));
}
