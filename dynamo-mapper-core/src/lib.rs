/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Core types for the DynamoDB item mapper.
//!
//! The mapper converts between strongly-typed records and loosely-typed wire items
//! (`HashMap<String, AttributeValue>`):
//!
//! - [`AttributeValue`] - The wire-level values: `S`, `SS` and `BOOL`
//! - [`codec`] - One [`TypeCodec`](codec::TypeCodec) per [`TypeTag`], and the
//!   [`FieldType`](codec::FieldType) trait linking Rust field types to codecs
//! - [`SchemaBuilder`] / [`Schema`] - The ordered field descriptors of a record type
//! - [`MappedItem`] - Links a record type to its schema registration
//! - [`Mapper`] - Performs the conversions, caching one schema per type
//!
//! # Example
//!
//! ```
//! use dynamo_mapper_core::codec::{Bool, Ss, S};
//! use dynamo_mapper_core::{AttributeValue, Item, MappedItem, SchemaBuilder};
//!
//! #[derive(Debug, PartialEq)]
//! struct User {
//!     id: Option<String>,
//!     name: Option<String>,
//!     tags: Vec<String>,
//!     active: bool,
//! }
//!
//! impl Default for User {
//!     fn default() -> Self {
//!         User { id: None, name: Some("-----".into()), tags: vec![], active: true }
//!     }
//! }
//!
//! impl MappedItem for User {
//!     fn schema_builder() -> SchemaBuilder<Self> {
//!         SchemaBuilder::<Self>::with_default()
//!             .required("ID", S, |u| &u.id, |u| &mut u.id)
//!             .nullable("NAME", S, |u| &u.name, |u| &mut u.name)
//!             .nullable("TAGS", Ss, |u| &u.tags, |u| &mut u.tags)
//!             .nullable("IS_ACTIVE", Bool, |u| &u.active, |u| &mut u.active)
//!     }
//! }
//!
//! let item = Item::from([("ID".to_string(), AttributeValue::S("654321".into()))]);
//! let user: User = dynamo_mapper_core::from_item(item).unwrap();
//! assert_eq!(Some("-----".to_string()), user.name);
//! assert!(user.active);
//! ```

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

mod attribute;
mod cache;
pub mod codec;
pub mod config;
mod convert;
mod document;
pub mod error;
mod mapper;
mod schema;
#[cfg(feature = "aws-sdk")]
pub mod sdk;
mod traits;

pub use attribute::{AttributeValue, Item, TypeTag};
pub use cache::SchemaCache;
pub use config::{MapperConfig, VariantPolicy};
pub use document::Document;
pub use error::{BoxError, CastError, MappingError, MappingErrorKind, SchemaError};
pub use mapper::{from_item, schema, to_item, Mapper};
pub use schema::{FieldDescriptor, Schema, SchemaBuilder};
pub use traits::{ItemConverter, MappedItem};
