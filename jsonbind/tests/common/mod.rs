//! Types shared by the integration tests.

#![allow(dead_code)]

use jsonbind::{Value, describe_enum, describe_struct};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Single,
    Married,
    Divorced,
}
describe_enum!(Status { Single, Married, Divorced });

#[derive(Debug, Default, PartialEq)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub status: Status,
    pub address: String,
    pub scores: Vec<i32>,
    pub data: Value,
}
describe_struct!(Person {
    id as "Id",
    name as "Name",
    status as "Status",
    address as "Address",
    scores as "Scores",
    data as "Data",
});

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoonSmall {
    pub debug: String,
    pub nums: Vec<i32>,
}
describe_struct!(BoonSmall { debug, nums });

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FathersData {
    pub fathers: Vec<Father>,
}
describe_struct!(FathersData { fathers });

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Father {
    pub id: i32,
    pub name: String,
    pub married: bool,
    pub sons: Vec<Son>,
    pub daughters: Vec<Daughter>,
}
describe_struct!(Father {
    id,
    name,
    married,
    sons,
    daughters,
});

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Son {
    pub age: i32,
    pub name: String,
}
describe_struct!(Son { age, name });

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Daughter {
    pub age: i32,
    pub name: String,
}
describe_struct!(Daughter { age, name });

/// A family register with `count` fathers and a varying number of children.
pub fn fathers(count: i32) -> FathersData {
    const NAMES: [&str; 5] = ["Aaron", "Bjørn", "Chloé", "Dmitri \"Dima\"", "Émile\\Li"];
    let name = |i: i32| NAMES[i.rem_euclid(NAMES.len() as i32) as usize].to_owned();
    FathersData {
        fathers: (0..count)
            .map(|id| Father {
                id,
                name: name(id),
                married: id % 2 == 0,
                sons: (0..id % 3)
                    .map(|n| Son {
                        age: n * 7 + 1,
                        name: name(id + n),
                    })
                    .collect(),
                daughters: (0..id % 4)
                    .map(|n| Daughter {
                        age: n * 5 + 2,
                        name: name(id * 3 + n),
                    })
                    .collect(),
            })
            .collect(),
    }
}
