/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Item/record conversion.
//!
//! Both directions are a single pass over the schema's field descriptors. The first failing
//! field aborts the pass: callers get either a complete record or item, or the error.

use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::attribute::Item;
use crate::cache::SchemaCache;
use crate::config::{MapperConfig, VariantPolicy};
use crate::error::{MappingError, SchemaError};
use crate::schema::Schema;
use crate::traits::MappedItem;

static DEFAULT_MAPPER: Lazy<Mapper> = Lazy::new(Mapper::default);

/// Converts records to and from items, caching one schema per record type.
#[derive(Debug, Default)]
pub struct Mapper {
    config: MapperConfig,
    cache: SchemaCache,
}

impl Mapper {
    /// Creates a mapper with its own, empty schema cache.
    pub fn new(config: MapperConfig) -> Self {
        Self {
            config,
            cache: SchemaCache::new(),
        }
    }

    /// The mapper's configuration.
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Returns the schema for `T`, building it on first use.
    pub fn schema<T: MappedItem>(&self) -> Result<Arc<Schema<T>>, SchemaError> {
        self.cache.get_or_build::<T>()
    }

    /// Maps an item to a new `T`.
    ///
    /// The record starts from its own defaults. Each present attribute overwrites its field; an
    /// absent one leaves a nullable field untouched and fails a non-nullable one.
    pub fn from_item<T: MappedItem>(&self, item: Item) -> Result<T, MappingError> {
        let schema = self.schema::<T>().map_err(MappingError::invalid_schema)?;
        read_item(&schema, item, self.config.variant_policy())
    }

    /// Maps `record` to an item. Absent nullable fields are omitted from the item.
    pub fn to_item<T: MappedItem>(&self, record: &T) -> Result<Item, MappingError> {
        let schema = self.schema::<T>().map_err(MappingError::invalid_schema)?;
        write_item(&schema, record)
    }
}

/// Returns the schema for `T` from the process-wide cache.
pub fn schema<T: MappedItem>() -> Result<Arc<Schema<T>>, SchemaError> {
    DEFAULT_MAPPER.schema::<T>()
}

/// Maps an item to a new `T` with the default, lenient mapper.
pub fn from_item<T: MappedItem>(item: Item) -> Result<T, MappingError> {
    DEFAULT_MAPPER.from_item(item)
}

/// Maps `record` to an item with the default mapper.
pub fn to_item<T: MappedItem>(record: &T) -> Result<Item, MappingError> {
    DEFAULT_MAPPER.to_item(record)
}

pub(crate) fn read_item<T>(
    schema: &Schema<T>,
    mut item: Item,
    policy: VariantPolicy,
) -> Result<T, MappingError> {
    let mut record = schema.instantiate().map_err(|err| {
        tracing::debug!(owner = schema.owner(), "failed to construct record");
        err
    })?;

    for field in schema.fields() {
        let decoded = match item.remove(field.wire_name()) {
            Some(value) => {
                let actual = value.tag();
                let decoded = field.decode_into(&mut record, value);
                if !decoded {
                    tracing::trace!(
                        field = field.wire_name(),
                        expected = %field.tag(),
                        actual = %actual,
                        "attribute holds another variant"
                    );
                    if policy == VariantPolicy::Strict {
                        return Err(MappingError::unexpected_variant(
                            field.name(),
                            field.tag(),
                            actual,
                        ));
                    }
                }
                decoded
            }
            None => false,
        };

        if decoded {
            tracing::trace!(field = field.wire_name(), tag = %field.tag(), "decoded attribute");
        } else if field.is_nullable() {
            tracing::trace!(field = field.wire_name(), "attribute absent, keeping default");
        } else {
            tracing::debug!(
                owner = schema.owner(),
                field = field.wire_name(),
                "non-nullable attribute is absent"
            );
            return Err(MappingError::nullable_violation(field.name()));
        }
    }

    Ok(record)
}

pub(crate) fn write_item<T>(schema: &Schema<T>, record: &T) -> Result<Item, MappingError> {
    let mut item = Item::with_capacity(schema.fields().len());

    for field in schema.fields() {
        match field.encode(record) {
            Ok(Some(value)) => {
                tracing::trace!(field = field.wire_name(), tag = %field.tag(), "encoded field");
                item.insert(field.wire_name().to_owned(), value);
            }
            Ok(None) if field.is_nullable() => {
                tracing::trace!(field = field.wire_name(), "field absent, omitting attribute");
            }
            Ok(None) => {
                tracing::debug!(
                    owner = schema.owner(),
                    field = field.wire_name(),
                    "non-nullable field is absent"
                );
                return Err(MappingError::nullable_violation(field.name()));
            }
            Err(cause) => {
                tracing::debug!(
                    owner = schema.owner(),
                    field = field.wire_name(),
                    tag = %field.tag(),
                    error = %cause,
                    "field value does not match its type tag"
                );
                return Err(MappingError::type_mismatch(field.name(), cause));
            }
        }
    }

    Ok(item)
}
