//! Sample records, sample data and hand-written decoders for them.
//!
//! The hand-written decoders map fields one by one with explicit matches on
//! the value's variant. They serve as the reference the generic decoder is
//! checked against, and as the baseline in the benchmark.

#![allow(dead_code)]

use jiff::Timestamp;
use mapshape::{Map, Record, Value, map};

#[derive(Clone, Debug, Default, PartialEq, Record)]
pub struct UserJob {
    pub role: String,
    pub squad: String,
    pub joined: Timestamp,
}

#[derive(Clone, Debug, Default, PartialEq, Record)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub pronouns: Vec<String>,
    pub location: String,
    pub bio: String,
    pub job: Option<Box<UserJob>>,
}

/// Like [`User`], but the job is held inline.
#[derive(Clone, Debug, Default, PartialEq, Record)]
pub struct Employee {
    pub id: u64,
    pub name: String,
    pub job: UserJob,
}

/// 2015-01-01T07:00:00Z
pub fn joined() -> Timestamp {
    Timestamp::from_second(1_420_095_600).unwrap()
}

pub fn sample_job() -> Map {
    map! {
        "role" => "Office Dog",
        "squad" => "All",
        "joined" => joined(),
    }
}

pub fn sample_user() -> Map {
    map! {
        "id" => 100u64,
        "name" => "Bingo 🐕",
        "pronouns" => vec!["🐶"],
        "location" => "Cardboard Heaven",
        "bio" => "Woof",
        "job" => sample_job(),
    }
}

fn unexpected(field: &str, expected: &str, got: &Value) -> ! {
    panic!("{field}: expected {expected}, got {}", got.value_type())
}

pub fn user_job_by_hand(source: &Map) -> UserJob {
    let mut job = UserJob::default();
    if let Some(value) = source.get("role") {
        match value {
            Value::String(role) => job.role = role.clone(),
            other => unexpected("role", "string", other),
        }
    }
    if let Some(value) = source.get("squad") {
        match value {
            Value::String(squad) => job.squad = squad.clone(),
            other => unexpected("squad", "string", other),
        }
    }
    if let Some(value) = source.get("joined") {
        match value {
            Value::Timestamp(joined) => job.joined = *joined,
            other => unexpected("joined", "timestamp", other),
        }
    }
    job
}

pub fn user_by_hand(source: &Map) -> User {
    let mut user = User::default();
    if let Some(value) = source.get("id") {
        match value {
            Value::U64(id) => user.id = *id,
            other => unexpected("id", "u64", other),
        }
    }
    if let Some(value) = source.get("name") {
        match value {
            Value::String(name) => user.name = name.clone(),
            other => unexpected("name", "string", other),
        }
    }
    if let Some(value) = source.get("pronouns") {
        match value {
            Value::Strings(pronouns) => user.pronouns = pronouns.clone(),
            other => unexpected("pronouns", "string sequence", other),
        }
    }
    if let Some(value) = source.get("location") {
        match value {
            Value::String(location) => user.location = location.clone(),
            other => unexpected("location", "string", other),
        }
    }
    if let Some(value) = source.get("bio") {
        match value {
            Value::String(bio) => user.bio = bio.clone(),
            other => unexpected("bio", "string", other),
        }
    }
    if let Some(value) = source.get("job") {
        match value {
            Value::Map(job) => user.job = Some(Box::new(user_job_by_hand(job))),
            other => unexpected("job", "map", other),
        }
    }
    user
}

pub fn employee_by_hand(source: &Map) -> Employee {
    let mut employee = Employee::default();
    if let Some(value) = source.get("id") {
        match value {
            Value::U64(id) => employee.id = *id,
            other => unexpected("id", "u64", other),
        }
    }
    if let Some(value) = source.get("name") {
        match value {
            Value::String(name) => employee.name = name.clone(),
            other => unexpected("name", "string", other),
        }
    }
    if let Some(value) = source.get("job") {
        match value {
            Value::Map(job) => employee.job = user_job_by_hand(job),
            other => unexpected("job", "map", other),
        }
    }
    employee
}
