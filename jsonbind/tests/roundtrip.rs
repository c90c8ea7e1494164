//! Documents written by serde_json bind back to the values they came from.

mod common;

use std::collections::{BTreeMap, HashMap, VecDeque};

use common::{BoonSmall, FathersData, Son, Status, fathers};
use indexmap::IndexMap;
use jsonbind::{Value, describe_struct, from_str};
use jsonbind_testhelpers::{IPanic, setup};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Chain {
    label: String,
    next: Option<Box<Chain>>,
}
describe_struct!(Chain { label, next });

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Shapes {
    small: u8,
    wide: u64,
    signed: i64,
    tiny: i8,
    ratio: f32,
    precise: f64,
    flag: bool,
    initial: char,
    status: Status,
    history: Vec<Status>,
    grid: [u16; 3],
    queue: VecDeque<i32>,
    counts: HashMap<String, u32>,
    sorted: BTreeMap<String, Vec<i16>>,
    ordered: IndexMap<String, Status>,
    maybe: Option<u32>,
    missing: Option<String>,
    boxed: Box<Son>,
    chain: Option<Box<Chain>>,
}
describe_struct!(Shapes {
    small,
    wide,
    signed,
    tiny,
    ratio,
    precise,
    flag,
    initial,
    status,
    history,
    grid,
    queue,
    counts,
    sorted,
    ordered,
    maybe,
    missing,
    boxed,
    chain,
});

fn shapes() -> Shapes {
    Shapes {
        small: u8::MAX,
        wide: u64::MAX,
        signed: i64::MIN,
        tiny: -7,
        ratio: 0.1,
        precise: -6.02214076e23,
        flag: true,
        initial: 'ß',
        status: Status::Divorced,
        history: vec![Status::Single, Status::Married, Status::Divorced],
        grid: [0, 512, u16::MAX],
        queue: VecDeque::from([3, -1, 4]),
        counts: HashMap::from([("one".to_owned(), 1), ("many".to_owned(), u32::MAX)]),
        sorted: BTreeMap::from([
            ("a".to_owned(), vec![-1, 0, 1]),
            ("b".to_owned(), Vec::new()),
        ]),
        ordered: IndexMap::from([
            ("z".to_owned(), Status::Married),
            ("a".to_owned(), Status::Single),
        ]),
        maybe: Some(42),
        missing: None,
        boxed: Box::new(Son {
            age: 12,
            name: "Tom".to_owned(),
        }),
        chain: Some(Box::new(Chain {
            label: "first".to_owned(),
            next: Some(Box::new(Chain {
                label: "second".to_owned(),
                next: None,
            })),
        })),
    }
}

#[test]
fn family_register() -> Result<(), IPanic> {
    setup();

    let expected = fathers(64);
    let compact = serde_json::to_string(&expected)?;
    assert_eq!(from_str::<FathersData>(&compact)?, expected);

    let pretty = serde_json::to_string_pretty(&expected)?;
    assert_eq!(from_str::<FathersData>(&pretty)?, expected);
    Ok(())
}

#[test]
fn every_member_shape() -> Result<(), IPanic> {
    setup();

    let expected = shapes();
    let json = serde_json::to_string(&expected)?;
    let parsed = from_str::<Shapes>(&json)?;
    assert_eq!(parsed, expected);
    assert_eq!(
        parsed.ordered.keys().collect::<Vec<_>>(),
        ["z", "a"],
        "map members keep document order"
    );

    let pretty = serde_json::to_string_pretty(&expected)?;
    assert_eq!(from_str::<Shapes>(&pretty)?, expected);

    let empty = Shapes::default();
    let json = serde_json::to_string(&empty)?;
    assert_eq!(from_str::<Shapes>(&json)?, empty);
    Ok(())
}

#[test]
fn small_records() -> Result<(), IPanic> {
    setup();

    let expected = BoonSmall {
        debug: "line\nbreak \u{1} \"quoted\" \u{1F600}".to_owned(),
        nums: vec![i32::MIN, -1, 0, 1, i32::MAX],
    };
    let json = serde_json::to_string(&expected)?;
    assert_eq!(from_str::<BoonSmall>(&json)?, expected);
    Ok(())
}

#[test]
fn enum_names() -> Result<(), IPanic> {
    setup();

    for status in [Status::Single, Status::Married, Status::Divorced] {
        let json = serde_json::to_string(&status)?;
        assert_eq!(from_str::<Status>(&json)?, status);
    }
    Ok(())
}

#[test]
fn untyped_trees_match_serde_json() -> Result<(), IPanic> {
    setup();

    let json = serde_json::to_string(&fathers(8))?;
    let ours = from_str::<Value>(&json)?;
    let theirs: serde_json::Value = serde_json::from_str(&json)?;

    let fathers = ours["fathers"].as_array().map(Vec::len);
    assert_eq!(fathers, theirs["fathers"].as_array().map(Vec::len));
    for (index, father) in theirs["fathers"].as_array().into_iter().flatten().enumerate() {
        assert_eq!(ours["fathers"][index]["id"].as_i64(), father["id"].as_i64());
        assert_eq!(ours["fathers"][index]["name"].as_str(), father["name"].as_str());
        assert_eq!(ours["fathers"][index]["married"].as_bool(), father["married"].as_bool());
    }
    Ok(())
}

#[test]
fn floats() -> Result<(), IPanic> {
    setup();

    let expected = [0.1, -2.5e-8, 1.7976931348623157e308, 5e-324, 123.456];
    let json = serde_json::to_string(&expected)?;
    assert_eq!(from_str::<[f64; 5]>(&json)?, expected);
    Ok(())
}
