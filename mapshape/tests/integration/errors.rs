use mapshape::{
    DEFAULT_MAX_DEPTH, DecodeErrorKind, DecodeOptions, Map, PathSegment, Record, ValueType, decode,
    decode_with, from_map, from_map_with, map,
};
use mapshape_testhelpers::test;

use crate::fixtures::{Employee, User, UserJob, sample_job};

#[derive(Debug, Default, Record)]
struct Node {
    name: String,
    child: Option<Box<Node>>,
}

/// A map nested `depth` levels below the root.
fn chain(depth: usize) -> Map {
    let mut map = map! { "name" => "leaf" };
    for _ in 0..depth {
        map = map! { "name" => "link", "child" => map };
    }
    map
}

fn chain_len(node: &Node) -> usize {
    let mut len = 0;
    let mut cur = node;
    while let Some(child) = &cur.child {
        len += 1;
        cur = child;
    }
    len
}

#[test]
fn string_into_unsigned() {
    let err = from_map::<User>(&map! { "id" => "100" }).unwrap_err();
    assert!(matches!(
        err.kind,
        DecodeErrorKind::TypeMismatch {
            expected: "u64",
            got: ValueType::String,
        }
    ));
    assert_eq!(err.path, [PathSegment::Field("id")]);
    assert_eq!(err.target_shape.map(|s| s.type_identifier), Some("User"));
    insta::assert_snapshot!(err, @"at .id: cannot assign value of type string to field of type u64");
}

#[test]
fn no_numeric_coercion() {
    let mut user = User::default();
    let err = decode(&map! { "id" => 100i64 }, &mut user).unwrap_err();
    insta::assert_snapshot!(err, @"at .id: cannot assign value of type i64 to field of type u64");
    assert_eq!(user.id, 0);
}

#[test]
fn string_into_timestamp() {
    let source = map! { "job" => map! { "joined" => "2015-01-01T07:00:00Z" } };
    let err = from_map::<User>(&source).unwrap_err();
    assert_eq!(
        err.path,
        [PathSegment::Field("job"), PathSegment::Field("joined")]
    );
    insta::assert_snapshot!(err, @"at .job.joined: cannot assign value of type string to field of type Timestamp");
}

#[test]
fn single_string_into_sequence() {
    let err = from_map::<User>(&map! { "pronouns" => "he" }).unwrap_err();
    insta::assert_snapshot!(err, @"at .pronouns: cannot assign value of type string to field of type Vec<String>");
}

#[test]
fn leaf_into_nested_record() {
    let err = from_map::<Employee>(&map! { "job" => "Office Dog" }).unwrap_err();
    insta::assert_snapshot!(err, @"at .job: cannot assign value of type string to field of type UserJob");
}

#[test]
fn map_into_string_field() {
    let err = from_map::<User>(&map! { "bio" => map! { "short" => "Woof" } }).unwrap_err();
    assert!(matches!(
        err.kind,
        DecodeErrorKind::UnsupportedShape {
            field: "bio",
            shape: "String",
        }
    ));
    insta::assert_snapshot!(err, @"at .bio: can only decode inner maps into structs, but field `bio` is String");
}

#[test]
fn map_into_sequence_field() {
    let err = from_map::<User>(&map! { "pronouns" => map! {} }).unwrap_err();
    assert!(matches!(
        err.kind,
        DecodeErrorKind::UnsupportedShape {
            field: "pronouns",
            ..
        }
    ));
}

#[test]
fn scalar_target() {
    let mut bio = String::new();
    let err = decode(&map! { "bio" => "Woof" }, &mut bio).unwrap_err();
    insta::assert_snapshot!(err, @"expected a record to decode into, got String");
    assert!(err.path.is_empty());
    assert_eq!(bio, "");
}

#[test]
fn option_target() {
    let mut job: Option<UserJob> = None;
    let err = decode(&sample_job(), &mut job).unwrap_err();
    assert!(matches!(
        err.kind,
        DecodeErrorKind::InvalidTarget { got: "Option" }
    ));
    assert!(job.is_none());
}

#[test]
fn boxed_target_is_the_record() {
    let mut job = Box::new(UserJob::default());
    decode(&sample_job(), &mut job).unwrap();
    assert_eq!(job.role, "Office Dog");
}

#[test]
fn earlier_fields_stay_assigned() {
    let mut user = User::default();
    let source = map! {
        "id" => 100u64,
        "name" => "Bingo",
        "job" => map! { "role" => "Office Dog", "squad" => 3u64 },
        "bio" => "Woof",
    };
    let err = decode(&source, &mut user).unwrap_err();
    assert_eq!(
        err.path,
        [PathSegment::Field("job"), PathSegment::Field("squad")]
    );

    // fields are visited in declaration order, so `bio` comes before `job`
    assert_eq!(user.id, 100);
    assert_eq!(user.name, "Bingo");
    assert_eq!(user.bio, "Woof");
    let job = user.job.expect("job was allocated before the failure");
    assert_eq!(job.role, "Office Dog");
    assert_eq!(job.squad, "");
}

#[test]
fn default_depth_accepts_its_bound() {
    let node: Node = from_map(&chain(DEFAULT_MAX_DEPTH)).unwrap();
    assert_eq!(chain_len(&node), DEFAULT_MAX_DEPTH);
}

#[test]
fn default_depth_rejects_one_more() {
    let mut node = Node::default();
    let err = decode(&chain(DEFAULT_MAX_DEPTH + 1), &mut node).unwrap_err();
    assert!(matches!(
        err.kind,
        DecodeErrorKind::DepthExceeded {
            max_depth: DEFAULT_MAX_DEPTH
        }
    ));
    assert_eq!(err.path.len(), DEFAULT_MAX_DEPTH + 1);
    assert!(
        err.path
            .iter()
            .all(|segment| *segment == PathSegment::Field("child"))
    );
    // everything above the limit was allocated, nothing below it
    assert_eq!(chain_len(&node), DEFAULT_MAX_DEPTH);
}

#[test]
fn custom_depth() {
    let options = DecodeOptions::new().max_depth(2);
    let node: Node = from_map_with(&chain(2), &options).unwrap();
    assert_eq!(chain_len(&node), 2);

    let err = from_map_with::<Node>(&chain(3), &options).unwrap_err();
    insta::assert_snapshot!(err, @"at .child.child.child: maps nested deeper than the maximum depth of 2");
}

#[test]
fn zero_depth_allows_only_leaves() {
    let options = DecodeOptions::new().max_depth(0);
    let mut user = User::default();
    decode_with(&map! { "name" => "Bingo" }, &mut user, &options).unwrap();

    let err = decode_with(&map! { "job" => map! {} }, &mut user, &options).unwrap_err();
    assert!(matches!(err.kind, DecodeErrorKind::DepthExceeded { .. }));
    assert!(user.job.is_none());
}

#[test]
fn unknown_keys() {
    let source = map! { "name" => "Bingo", "favourite_toy" => "ball" };

    let user: User = from_map(&source).unwrap();
    assert_eq!(user.name, "Bingo");

    let options = DecodeOptions::new().deny_unknown_keys(true);
    let err = from_map_with::<User>(&source, &options).unwrap_err();
    assert!(matches!(&err.kind, DecodeErrorKind::UnknownKey { key } if key == "favourite_toy"));
    insta::assert_snapshot!(err, @"unknown key `favourite_toy`");
}

#[test]
fn unknown_keys_are_case_sensitive() {
    let options = DecodeOptions::new().deny_unknown_keys(true);
    let err = from_map_with::<User>(&map! { "Name" => "Bingo" }, &options).unwrap_err();
    insta::assert_snapshot!(err, @"unknown key `Name`");
}

#[test]
fn unknown_keys_in_nested_maps() {
    let options = DecodeOptions::new().deny_unknown_keys(true);
    let mut user = User::default();
    let source = map! {
        "name" => "Bingo",
        "job" => map! { "role" => "Office Dog", "desk" => "3F" },
    };
    let err = decode_with(&source, &mut user, &options).unwrap_err();
    insta::assert_snapshot!(err, @"at .job: unknown key `desk`");
    assert_eq!(user.name, "Bingo");
    // the nested keys are rejected before the option is filled in
    assert!(user.job.is_none());
}
