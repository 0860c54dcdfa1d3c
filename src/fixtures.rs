//! Sample friend graphs for tests.
//!
//! Only compiled for this crate's tests or with the `test-utils` feature.

use crate::friend::{Friend, Gender};

/// Eight friends in three circles around the best friends Sam and Sally.
///
/// Circles: `[Sally, Sam]`, `[Brad, Emily, Mat, Sharon]`, `[Itan, Julia]`.
#[must_use]
pub fn party() -> Vec<Friend> {
    vec![
        Friend::new("Sam")
            .with_gender(Gender::Male)
            .with_best(true)
            .with_friends(["Mat", "Sharon"]),
        Friend::new("Sally")
            .with_gender(Gender::Female)
            .with_best(true)
            .with_friends(["Brad", "Emily"]),
        Friend::new("Mat")
            .with_gender(Gender::Male)
            .with_friends(["Sam", "Sharon"]),
        Friend::new("Sharon")
            .with_gender(Gender::Female)
            .with_friends(["Sam", "Itan", "Mat"]),
        Friend::new("Brad")
            .with_gender(Gender::Male)
            .with_friends(["Sally", "Emily", "Julia"]),
        Friend::new("Emily")
            .with_gender(Gender::Female)
            .with_friends(["Sally", "Brad"]),
        Friend::new("Itan")
            .with_gender(Gender::Male)
            .with_friends(["Sharon", "Julia"]),
        Friend::new("Julia")
            .with_gender(Gender::Female)
            .with_friends(["Brad", "Itan"]),
    ]
}

/// The same graph as [`party`], as JSON.
pub const PARTY_JSON: &str = r#"[
    { "name": "Sam", "friends": ["Mat", "Sharon"], "gender": "male", "best": true },
    { "name": "Sally", "friends": ["Brad", "Emily"], "gender": "female", "best": true },
    { "name": "Mat", "friends": ["Sam", "Sharon"], "gender": "male" },
    { "name": "Sharon", "friends": ["Sam", "Itan", "Mat"], "gender": "female" },
    { "name": "Brad", "friends": ["Sally", "Emily", "Julia"], "gender": "male" },
    { "name": "Emily", "friends": ["Sally", "Brad"], "gender": "female" },
    { "name": "Itan", "friends": ["Sharon", "Julia"], "gender": "male" },
    { "name": "Julia", "friends": ["Brad", "Itan"], "gender": "female" }
]"#;
