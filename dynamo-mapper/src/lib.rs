/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Maps strongly-typed Rust records to and from DynamoDB items.
//!
//! Records declare which fields are stored, under which attribute name and with which attribute
//! type. The mapper then converts between records and `HashMap<String, AttributeValue>` items,
//! filling in defaults for missing attributes and rejecting absent required values.
//!
//! # Example
//!
//! ```
//! use dynamo_mapper::{AttributeValue, DynamoItem, ItemConverter};
//!
//! #[derive(Debug, PartialEq, DynamoItem)]
//! struct User {
//!     #[dynamo(name = "ID", tag = "S", not_null)]
//!     id: Option<String>,
//!     #[dynamo(name = "NAME", tag = "S")]
//!     name: Option<String>,
//!     #[dynamo(name = "TAGS", tag = "SS")]
//!     tags: Vec<String>,
//!     #[dynamo(name = "IS_ACTIVE", tag = "BOOL")]
//!     active: bool,
//! }
//!
//! impl Default for User {
//!     fn default() -> Self {
//!         User { id: None, name: Some("-----".into()), tags: vec![], active: true }
//!     }
//! }
//!
//! let user = User::from_item(
//!     [("ID".to_string(), AttributeValue::S("654321".into()))].into(),
//! )
//! .unwrap();
//! assert_eq!(Some("-----".to_string()), user.name);
//!
//! let item = user.to_item().unwrap();
//! assert_eq!(Some(&AttributeValue::Bool(true)), item.get("IS_ACTIVE"));
//! ```

#![warn(missing_docs)]

pub use dynamo_mapper_core::*;
pub use dynamo_mapper_macros::DynamoItem;
