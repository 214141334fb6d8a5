/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Core traits for the mapper.

use crate::attribute::Item;
use crate::error::MappingError;
use crate::schema::SchemaBuilder;

/// A record type with a registered schema.
///
/// This is the schema registration interface. Implement it by hand with a
/// [`SchemaBuilder`], or derive it with `#[derive(DynamoItem)]` from the `dynamo-mapper` crate.
/// The builder is only invoked the first time a mapper needs the schema; the result is cached.
pub trait MappedItem: Sized + 'static {
    /// Registers the mapped fields of this type.
    fn schema_builder() -> SchemaBuilder<Self>;
}

/// Converts complete records to and from items through the process-wide default mapper.
///
/// Implemented for every [`MappedItem`].
pub trait ItemConverter: Sized {
    /// Converts this record to an item.
    fn to_item(&self) -> Result<Item, MappingError>;

    /// Constructs a record from an item.
    fn from_item(item: Item) -> Result<Self, MappingError>;
}

impl<T: MappedItem> ItemConverter for T {
    fn to_item(&self) -> Result<Item, MappingError> {
        crate::mapper::to_item(self)
    }

    fn from_item(item: Item) -> Result<Self, MappingError> {
        crate::mapper::from_item(item)
    }
}
