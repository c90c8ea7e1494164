//! Parse options: member matching and nesting limits.

mod common;

use common::{FathersData, Person, Status};
use jsonbind::{
    DEFAULT_MAX_DEPTH, JsonErrorKind, JsonParser, MemberMatching, ParseOptions, Value,
    from_str, from_str_with_options,
};
use jsonbind_testhelpers::{IPanic, setup};

#[test]
fn members_match_exactly_by_default() -> Result<(), IPanic> {
    setup();

    let person = from_str::<Person>(r#"{"name": "lower", "NAME": "upper", "Name": "exact"}"#)?;
    assert_eq!(person.name, "exact");

    let person = from_str::<Person>(r#"{"name": "lower"}"#)?;
    assert_eq!(person.name, "");
    Ok(())
}

#[test]
fn case_insensitive_matching() -> Result<(), IPanic> {
    setup();

    let options = ParseOptions::default().case_insensitive();
    assert_eq!(options.member_matching, MemberMatching::AsciiCaseInsensitive);

    let person = from_str_with_options::<Person>(
        r#"{"id": 3, "NAME": "Ann", "status": "Married", "scores": [1]}"#,
        options,
    )?;
    assert_eq!(person.id, 3);
    assert_eq!(person.name, "Ann");
    assert_eq!(person.status, Status::Married);
    assert_eq!(person.scores, [1]);
    Ok(())
}

#[test]
fn enum_names_stay_exact_when_members_fold() {
    setup();

    let options = ParseOptions::default().case_insensitive();
    let err = from_str_with_options::<Person>(r#"{"status": "married"}"#, options).unwrap_err();
    assert_eq!(err.to_string(), "Bad enum value at 11");
}

#[test]
fn depth_limit_counts_every_container() -> Result<(), IPanic> {
    setup();

    let input = r#"{"fathers": [{"sons": [{"age": 1}]}]}"#;
    let parser = JsonParser::with_options(ParseOptions::new().max_depth(4));
    let err = parser.parse::<FathersData>(input).unwrap_err();
    assert_eq!(err.to_string(), "Nesting too deep (max 4) at 23");

    let parser = JsonParser::with_options(ParseOptions::new().max_depth(5));
    let parsed = parser.parse::<FathersData>(input)?;
    assert_eq!(parsed.fathers[0].sons[0].age, 1);
    Ok(())
}

#[test]
fn default_depth_limit() {
    setup();

    let ok = "[".repeat(DEFAULT_MAX_DEPTH) + &"]".repeat(DEFAULT_MAX_DEPTH);
    assert!(from_str::<Value>(&ok).is_ok());

    let deep = "[".repeat(DEFAULT_MAX_DEPTH + 1) + &"]".repeat(DEFAULT_MAX_DEPTH + 1);
    let err = from_str::<Value>(&deep).unwrap_err();
    assert!(matches!(err.kind, JsonErrorKind::NestingTooDeep { max_depth } if max_depth == DEFAULT_MAX_DEPTH));
    assert_eq!(err.offset, DEFAULT_MAX_DEPTH);
}

#[test]
fn skipped_members_count_toward_depth() {
    setup();

    let input = format!(
        r#"{{"ignored": {}{}}}"#,
        "[".repeat(DEFAULT_MAX_DEPTH),
        "]".repeat(DEFAULT_MAX_DEPTH)
    );
    let err = from_str::<Person>(&input).unwrap_err();
    assert!(matches!(err.kind, JsonErrorKind::NestingTooDeep { .. }));
}
