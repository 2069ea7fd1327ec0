//! End-to-end selection tests using `#[derive(Record)]`.

#![allow(dead_code)]

use fieldsel::prelude::*;
use fieldsel::{FieldValue, SelectError};

#[derive(Debug, Default, Record)]
struct PlainPerson {
    nickname: String,
    first_name: String,
    last_name: String,
    age: i32,
}

#[derive(Debug, Default, Record)]
#[record(rename_all = "PascalCase")]
struct Person {
    nickname: String,
    first_name: String,
    last_name: String,
    age: i32,
}

#[derive(Debug, Default, Record)]
struct TaggedPerson {
    #[record(col = "nickname")]
    nickname: String,
    #[record(col = "first_name")]
    first_name: String,
    #[record(col = "last_name")]
    last_name: String,
    #[record(col = "age")]
    age: i32,
}

#[derive(Debug, Record)]
struct Account {
    #[record(col = "id", sql = "UUID PRIMARY KEY")]
    id: uuid::Uuid,
    #[record(col = "email", sql = "TEXT NOT NULL")]
    email: String,
    #[record(col = "display_name", sql = "TEXT")]
    display_name: Option<String>,
    #[record(col = "created_at", sql = "TIMESTAMPTZ NOT NULL")]
    created_at: chrono::DateTime<chrono::Utc>,
    #[record(skip)]
    session_cache: Vec<(String, String)>,
}

fn tagged() -> TaggedPerson {
    TaggedPerson {
        nickname: "jd".to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        age: 21,
    }
}

fn account() -> Account {
    Account {
        id: uuid::Uuid::nil(),
        email: "john@example.com".to_string(),
        display_name: None,
        created_at: chrono::DateTime::<chrono::Utc>::UNIX_EPOCH,
        session_cache: vec![("k".to_string(), "v".to_string())],
    }
}

fn debug(v: FieldValue<'_>) -> String {
    format!("{v:?}")
}

#[test]
fn all_untagged_uses_declared_names() {
    let person = Person::default();
    let s = select_all(&person).unwrap();
    assert_eq!(s.fields(), ["Nickname", "FirstName", "LastName", "Age"]);
    assert_eq!(s.fields().len(), s.args().len());
}

#[test]
fn all_without_rename_uses_rust_names() {
    let person = PlainPerson::default();
    let s = select_all(&person).unwrap();
    assert_eq!(s.fields(), ["nickname", "first_name", "last_name", "age"]);
}

#[test]
fn except_with_tags() {
    let person = TaggedPerson::default();
    let s = select_except(&person, &["age"]).unwrap();
    assert_eq!(s.fields(), ["nickname", "first_name", "last_name"]);
}

#[test]
fn only_with_tags() {
    let person = TaggedPerson::default();
    let s = select_only(&person, &["first_name"]).unwrap();
    assert_eq!(s.fields(), ["first_name"]);
}

#[test]
fn bind_vars_four_fields() {
    let person = TaggedPerson::default();
    assert_eq!(select_all(&person).unwrap().bind_vars(), "?, ?, ?, ?");
}

#[test]
fn prepare_select_and_insert() {
    let person = TaggedPerson::default();
    let s = select_all(&person).unwrap();
    assert_eq!(
        s.prepare("SELECT (%fields%) FROM persons"),
        "SELECT (nickname, first_name, last_name, age) FROM persons"
    );
    assert_eq!(
        s.prepare("INSERT INTO persons (%fields%) VALUES (%vars%)"),
        "INSERT INTO persons (nickname, first_name, last_name, age) VALUES (?, ?, ?, ?)"
    );
}

#[test]
fn args_follow_field_order() {
    let person = tagged();
    let s = select_only(&person, &["age", "nickname"]).unwrap();
    assert_eq!(s.fields(), ["nickname", "age"]);
    assert_eq!(debug(s.args()[0]), "\"jd\"");
    assert_eq!(debug(s.args()[1]), "21");
}

#[test]
fn update_statement_with_trailing_key() {
    let person = tagged();
    let s = select_except(&person, &["nickname"]).unwrap();
    let sql = s.render("UPDATE persons SET $updates WHERE nickname = ?");
    let args = s.args_and(&[&person.nickname]);

    assert_eq!(
        sql,
        "UPDATE persons SET first_name = ?, last_name = ?, age = ? WHERE nickname = ?"
    );
    assert_eq!(sql.matches('?').count(), args.len());
    assert_eq!(debug(args[3]), "\"jd\"");
}

#[test]
fn pointer_records_are_followed() {
    let person = Box::new(tagged());
    let s = select_all(&person).unwrap();
    assert_eq!(s.len(), 4);

    let shared = std::sync::Arc::new(tagged());
    let s = select_only(&shared, &["AGE"]).unwrap();
    assert_eq!(s.fields(), ["age"]);
}

#[test]
fn non_struct_records_are_rejected() {
    assert_eq!(select_all(&0).unwrap_err(), SelectError::InvalidRecordKind);
    assert_eq!(
        select_except(&String::from("x"), &[]).unwrap_err(),
        SelectError::InvalidRecordKind
    );
    assert_eq!(
        select_only(&Box::new(7_i64), &["a"]).unwrap_err(),
        SelectError::InvalidRecordKind
    );
}

#[test]
fn unknown_filter_names_are_mismatches() {
    let person = tagged();
    let err = select_except(&person, &["this is an invalid field"]).unwrap_err();
    assert!(err.is_field_set_mismatch());
    let err = select_only(&person, &["this is an invalid field"]).unwrap_err();
    assert_eq!(
        err,
        SelectError::FieldSetMismatch {
            expected: 1,
            found: 0,
            unmatched: vec!["this is an invalid field".to_string()],
        }
    );
}

#[derive(Debug, Default, Record)]
struct Overlap {
    #[record(col = "a")]
    x: i32,
    #[record(col = "a")]
    y: i32,
    #[record(col = "c")]
    z: i32,
}

#[test]
fn filter_names_must_match_exactly_one_field() {
    let o = Overlap { x: 1, y: 2, z: 3 };

    let err = select_only(&o, &["a", "b"]).unwrap_err();
    assert_eq!(
        err,
        SelectError::FieldSetMismatch {
            expected: 2,
            found: 2,
            unmatched: vec!["a".to_string(), "b".to_string()],
        }
    );

    let err = select_except(&o, &["a", "nope"]).unwrap_err();
    assert!(err.is_field_set_mismatch());
    assert_eq!(
        err.to_string(),
        "field set mismatch: expected 1 selected fields, found 1 (unmatched: a, nope)"
    );

    let s = select_except(&o, &["c"]).unwrap();
    assert_eq!(s.fields(), ["a", "a"]);

    let s = select_only(&o, &["c"]).unwrap();
    assert_eq!(s.fields(), ["c"]);
}

#[test]
fn skipped_fields_are_not_selected() {
    let acc = account();
    let s = select_all(&acc).unwrap();
    assert_eq!(s.fields(), ["id", "email", "display_name", "created_at"]);
    let err = select_only(&acc, &["session_cache"]).unwrap_err();
    assert!(err.is_field_set_mismatch());
}

#[test]
fn table_fragment_from_type_tags() {
    let acc = account();
    let s = select_all(&acc).unwrap();
    assert_eq!(
        s.render("CREATE TABLE accounts ($table)"),
        "CREATE TABLE accounts (id UUID PRIMARY KEY, email TEXT NOT NULL, display_name TEXT, created_at TIMESTAMPTZ NOT NULL)"
    );
}

#[test]
fn optional_values_are_bound_as_is() {
    let acc = account();
    let s = select_only(&acc, &["display_name"]).unwrap();
    assert_eq!(debug(s.args()[0]), "None");
}

#[test]
fn builder_style_selection() {
    let person = tagged();
    let sql = select(&person)
        .unwrap()
        .only(&["first_name", "last_name"])
        .unwrap()
        .render("SELECT $names FROM persons")
        .unwrap();
    assert_eq!(sql, "SELECT first_name, last_name FROM persons");
}

#[test]
fn builder_filter_is_write_once() {
    let person = tagged();
    let err = select(&person)
        .unwrap()
        .exclude(&["age"])
        .unwrap()
        .exclude(&["age"])
        .unwrap_err();
    assert_eq!(err, SelectError::FilterAlreadyConfigured);
}

#[test]
fn builder_rejects_non_struct() {
    assert_eq!(select(&1_u8).unwrap_err(), SelectError::NotAggregateKind);
}

#[test]
fn custom_tag_keys() {
    #[derive(Record)]
    struct Legacy {
        #[record(db = "legacy_id", ddl = "INTEGER")]
        id: i32,
        #[record(col = "ignored", db = "label")]
        label: String,
    }

    let legacy = Legacy {
        id: 1,
        label: "x".to_string(),
    };
    let selector = Selector::with_options(
        SelectOptions::new().with_name_key("db").with_type_key("ddl"),
    );
    let s = selector.all(&legacy).unwrap();
    assert_eq!(s.fields(), ["legacy_id", "label"]);
    assert_eq!(s.formatter().table(), "legacy_id INTEGER, label ");
}

#[test]
fn args_encode_as_postgres_parameters() {
    use bytes::BytesMut;
    use tokio_postgres::types::{IsNull, Type};

    let person = tagged();
    let s = select_only(&person, &["last_name", "age"]).unwrap();

    let mut buf = BytesMut::new();
    let is_null = s.args()[0].to_sql_checked(&Type::TEXT, &mut buf).unwrap();
    assert!(matches!(is_null, IsNull::No));
    assert_eq!(&buf[..], &b"Doe"[..]);

    let mut buf = BytesMut::new();
    s.args()[1].to_sql_checked(&Type::INT4, &mut buf).unwrap();
    assert_eq!(&buf[..], 21_i32.to_be_bytes());

    let mut buf = BytesMut::new();
    assert!(s.args()[1].to_sql_checked(&Type::TEXT, &mut buf).is_err());
}
