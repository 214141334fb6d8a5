/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use dynamo_mapper::{
    AttributeValue, Document, DynamoItem, Item, ItemConverter, MappingErrorKind,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tracing_test::traced_test;

#[derive(Debug, Clone, PartialEq, DynamoItem)]
struct TestItem {
    #[dynamo(name = "ID", tag = "S", not_null)]
    id: Option<String>,
    #[dynamo(name = "NAME", tag = "S")]
    name: Option<String>,
    #[dynamo(name = "TAGS", tag = "SS")]
    tags: Vec<String>,
    #[dynamo(name = "IS_ACTIVE", tag = "BOOL")]
    active: bool,
    revision: u32,
}

impl Default for TestItem {
    fn default() -> Self {
        TestItem {
            id: None,
            name: Some("-----".into()),
            tags: Vec::new(),
            active: true,
            revision: 7,
        }
    }
}

#[derive(Debug, Default, DynamoItem)]
struct LooseItem {
    #[dynamo(name = "ID", tag = "S", not_null)]
    id: Document,
}

#[derive(Debug, Default, PartialEq, DynamoItem)]
struct Named {
    #[dynamo(tag = "S")]
    nickname: String,
}

fn full_item() -> Item {
    Item::from([
        ("ID".to_owned(), AttributeValue::S("654321".into())),
        ("NAME".to_owned(), AttributeValue::S("Full Name".into())),
        (
            "TAGS".to_owned(),
            AttributeValue::Ss(vec!["1".into(), "2".into(), "3".into()]),
        ),
        ("IS_ACTIVE".to_owned(), AttributeValue::Bool(false)),
    ])
}

#[test]
fn item_to_object() {
    let record = TestItem::from_item(full_item()).unwrap();
    assert_eq!(
        TestItem {
            id: Some("654321".into()),
            name: Some("Full Name".into()),
            tags: vec!["1".into(), "2".into(), "3".into()],
            active: false,
            revision: 7,
        },
        record
    );
}

#[test]
fn default_values() {
    let record =
        TestItem::from_item(Item::from([("ID".to_owned(), "654321".into())])).unwrap();
    assert_eq!(Some("654321".to_owned()), record.id);
    assert_eq!(Some("-----".to_owned()), record.name);
    assert!(record.tags.is_empty());
    assert!(record.active);
}

#[test]
fn missing_attribute() {
    let mut item = full_item();
    item.remove("ID");
    let err = TestItem::from_item(item).unwrap_err();
    assert_eq!(&MappingErrorKind::NullableViolation, err.kind());
    assert_eq!("Non-nullable value is null: ID", err.to_string());
}

#[test]
fn wrong_attribute() {
    let mut item = full_item();
    item.insert("ID".to_owned(), AttributeValue::Ss(vec!["654321".into()]));
    let err = TestItem::from_item(item).unwrap_err();
    assert_eq!(&MappingErrorKind::NullableViolation, err.kind());
    assert_eq!(Some("ID"), err.field());
}

#[test]
fn object_to_item() {
    let record = TestItem::from_item(full_item()).unwrap();
    assert_eq!(full_item(), record.to_item().unwrap());
}

#[test]
fn object_with_nulls() {
    let record = TestItem {
        id: Some("654321".into()),
        name: None,
        ..Default::default()
    };
    let item = record.to_item().unwrap();
    assert_eq!(
        Item::from([
            ("ID".to_owned(), AttributeValue::S("654321".into())),
            ("TAGS".to_owned(), AttributeValue::Ss(Vec::new())),
            ("IS_ACTIVE".to_owned(), AttributeValue::Bool(true)),
        ]),
        item
    );

    let err = TestItem::default().to_item().unwrap_err();
    assert_eq!(&MappingErrorKind::NullableViolation, err.kind());
}

#[test]
fn incorrect_type() {
    let record = LooseItem {
        id: Document::Array(vec![Document::from("654321")]),
    };
    let err = record.to_item().unwrap_err();
    assert_eq!(&MappingErrorKind::TypeMismatch, err.kind());
    assert!(std::error::Error::source(&err).is_some());

    let record = LooseItem {
        id: Document::from("654321"),
    };
    let item = record.to_item().unwrap();
    let back = LooseItem::from_item(item).unwrap();
    assert_eq!(Document::from("654321"), back.id);
}

#[test]
fn wire_name_defaults_to_field_name() {
    let record = Named {
        nickname: "ace".into(),
    };
    let item = record.to_item().unwrap();
    assert_eq!(Some(&AttributeValue::S("ace".into())), item.get("nickname"));
    assert_eq!(record, Named::from_item(item).unwrap());
}

#[test]
fn schema_lists_mapped_fields_only() {
    let schema = dynamo_mapper::schema::<TestItem>().unwrap();
    let names: Vec<_> = schema.fields().iter().map(|f| f.wire_name()).collect();
    assert_eq!(vec!["ID", "NAME", "TAGS", "IS_ACTIVE"], names);
    assert!(!schema.field("ID").unwrap().is_nullable());
    assert!(schema.field("NAME").unwrap().is_nullable());
}

#[test]
#[traced_test]
fn missing_attribute_is_logged() {
    let _ = TestItem::from_item(Item::new());
    assert!(logs_contain("non-nullable attribute is absent"));
}

proptest! {
    #[test]
    fn derived_records_survive_a_round_trip(
        id in ".*",
        name in proptest::option::of(".*"),
        tags in proptest::collection::vec(".*", 0..5),
        active in any::<bool>(),
    ) {
        let record = TestItem { id: Some(id), name, tags, active, revision: 7 };
        let item = record.to_item().unwrap();
        prop_assert_eq!(item.contains_key("NAME"), record.name.is_some());
        // An absent NAME reads back as the declared default.
        let expected = TestItem {
            name: record.name.clone().or_else(|| TestItem::default().name),
            ..record.clone()
        };
        prop_assert_eq!(expected, TestItem::from_item(item).unwrap());
    }
}
