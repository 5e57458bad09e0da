//! Decode a user profile twice: once with a hand-written decoder, once by
//! walking the record's shape.
//!
//! Run with `cargo run -p mapshape --example user_profile`.

use jiff::Timestamp;
use mapshape::{from_map, map};

#[path = "../tests/integration/fixtures.rs"]
mod fixtures;

use fixtures::{User, user_by_hand};

fn main() -> Result<(), Box<dyn core::error::Error>> {
    let joined: Timestamp = "2018-07-02T07:00:00Z".parse()?;
    let me = map! {
        "id" => 1u64,
        "name" => "Suhail Patel",
        "pronouns" => vec!["he", "him", "his"],
        "location" => "London, UK",
        "bio" => "I look at 📉 charts",
        "job" => map! {
            "role" => "Backend Engineer",
            "squad" => "Platform",
            "joined" => joined,
        },
    };

    let by_hand = user_by_hand(&me);
    println!("hand-written: {by_hand:#?}");

    let decoded: User = from_map(&me)?;
    println!("shape-walking: {decoded:#?}");

    assert_eq!(by_hand, decoded);
    Ok(())
}
