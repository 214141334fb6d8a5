/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Field descriptors and per-type schemas.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use crate::attribute::{AttributeValue, Item, TypeTag};
use crate::codec::{FieldType, TypeCodec};
use crate::config::VariantPolicy;
use crate::error::{BoxError, MappingError, SchemaError};
use crate::mapper;

type Reader<T> = Box<dyn Fn(&T) -> Result<Option<AttributeValue>, BoxError> + Send + Sync>;
type Writer<T> = Box<dyn Fn(&mut T, AttributeValue) -> bool + Send + Sync>;
type Constructor<T> = Box<dyn Fn() -> Result<T, BoxError> + Send + Sync>;

/// Static metadata binding one field of `T` to a wire name, a type tag and a nullability rule.
///
/// The accessor is typed: a descriptor can only be created for a field whose Rust type
/// implements [`FieldType`] for the declared codec.
pub struct FieldDescriptor<T> {
    wire_name: Cow<'static, str>,
    tag: TypeTag,
    nullable: bool,
    read: Reader<T>,
    write: Writer<T>,
}

impl<T: 'static> FieldDescriptor<T> {
    /// Creates a descriptor for the field reached through `get` and `get_mut`.
    pub fn new<C, V, G, M>(
        wire_name: impl Into<Cow<'static, str>>,
        _codec: C,
        nullable: bool,
        get: G,
        get_mut: M,
    ) -> Self
    where
        C: TypeCodec,
        V: FieldType<C> + 'static,
        G: Fn(&T) -> &V + Send + Sync + 'static,
        M: Fn(&mut T) -> &mut V + Send + Sync + 'static,
    {
        Self {
            wire_name: wire_name.into(),
            tag: C::TAG,
            nullable,
            read: Box::new(move |record: &T| {
                <V as FieldType<C>>::to_codec_value(get(record)).map(|value| value.map(C::encode))
            }),
            write: Box::new(move |record: &mut T, value: AttributeValue| match C::decode(value) {
                Some(value) => {
                    *get_mut(record) = <V as FieldType<C>>::from_codec_value(value);
                    true
                }
                None => false,
            }),
        }
    }
}

impl<T> FieldDescriptor<T> {
    /// The attribute name used in the item.
    pub fn wire_name(&self) -> &str {
        &self.wire_name
    }

    /// The tag selecting the field's codec.
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Whether the field may be absent.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub(crate) fn name(&self) -> Cow<'static, str> {
        self.wire_name.clone()
    }

    /// Reads and encodes the field. `Ok(None)` means the field is absent.
    pub fn encode(&self, record: &T) -> Result<Option<AttributeValue>, BoxError> {
        (self.read)(record)
    }

    /// Decodes `value` into the field. Returns `false`, leaving the field untouched, when the
    /// value holds a variant other than the field's tag.
    pub fn decode_into(&self, record: &mut T, value: AttributeValue) -> bool {
        (self.write)(record, value)
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("wire_name", &self.wire_name)
            .field("tag", &self.tag)
            .field("nullable", &self.nullable)
            .finish()
    }
}

/// The ordered field descriptors of a record type, plus the way to construct it.
///
/// A schema is immutable once built. Obtain a cached one through
/// [`Mapper::schema`](crate::Mapper::schema) or [`schema`](crate::schema).
pub struct Schema<T> {
    owner: &'static str,
    fields: Vec<FieldDescriptor<T>>,
    construct: Constructor<T>,
}

impl<T> Schema<T> {
    /// The name of the record type this schema maps.
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    /// The field descriptors, in registration order.
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    /// Looks up a descriptor by wire name.
    pub fn field(&self, wire_name: &str) -> Option<&FieldDescriptor<T>> {
        self.fields.iter().find(|field| field.wire_name() == wire_name)
    }

    /// Constructs a record holding its own defaults.
    pub fn instantiate(&self) -> Result<T, MappingError> {
        (self.construct)().map_err(MappingError::construction)
    }

    /// Maps an item to a record, treating wrong-variant attributes as absent.
    pub fn from_item(&self, item: Item) -> Result<T, MappingError> {
        mapper::read_item(self, item, VariantPolicy::Lenient)
    }

    /// Maps a record to an item.
    pub fn to_item(&self, record: &T) -> Result<Item, MappingError> {
        mapper::write_item(self, record)
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("owner", &self.owner)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Registers the mapped fields of `T`.
///
/// ```
/// use dynamo_mapper_core::codec::{Bool, S};
/// use dynamo_mapper_core::SchemaBuilder;
///
/// #[derive(Default)]
/// struct User {
///     id: Option<String>,
///     active: bool,
/// }
///
/// let schema = SchemaBuilder::<User>::with_default()
///     .required("ID", S, |user| &user.id, |user| &mut user.id)
///     .nullable("IS_ACTIVE", Bool, |user| &user.active, |user| &mut user.active)
///     .build()
///     .unwrap();
/// assert_eq!(2, schema.fields().len());
/// ```
pub struct SchemaBuilder<T> {
    construct: Constructor<T>,
    fields: Vec<FieldDescriptor<T>>,
}

impl<T: Default + 'static> SchemaBuilder<T> {
    /// Creates a builder whose records start from `T::default()`.
    pub fn with_default() -> Self {
        Self::with_constructor(|| Ok(T::default()))
    }
}

impl<T: 'static> SchemaBuilder<T> {
    /// Creates a builder whose records start from `construct`.
    ///
    /// A failing constructor makes every item-to-record mapping fail with
    /// [`MappingErrorKind::Construction`](crate::MappingErrorKind::Construction).
    pub fn with_constructor<F>(construct: F) -> Self
    where
        F: Fn() -> Result<T, BoxError> + Send + Sync + 'static,
    {
        Self {
            construct: Box::new(construct),
            fields: Vec::new(),
        }
    }

    /// Registers a field.
    pub fn field<C, V, G, M>(
        mut self,
        wire_name: impl Into<Cow<'static, str>>,
        codec: C,
        nullable: bool,
        get: G,
        get_mut: M,
    ) -> Self
    where
        C: TypeCodec,
        V: FieldType<C> + 'static,
        G: Fn(&T) -> &V + Send + Sync + 'static,
        M: Fn(&mut T) -> &mut V + Send + Sync + 'static,
    {
        self.fields.push(FieldDescriptor::new(
            wire_name, codec, nullable, get, get_mut,
        ));
        self
    }

    /// Registers a field that must be present in both directions.
    pub fn required<C, V, G, M>(
        self,
        wire_name: impl Into<Cow<'static, str>>,
        codec: C,
        get: G,
        get_mut: M,
    ) -> Self
    where
        C: TypeCodec,
        V: FieldType<C> + 'static,
        G: Fn(&T) -> &V + Send + Sync + 'static,
        M: Fn(&mut T) -> &mut V + Send + Sync + 'static,
    {
        self.field(wire_name, codec, false, get, get_mut)
    }

    /// Registers a field that may be absent. An absent attribute leaves the record's default in
    /// place; an absent field value omits the attribute.
    pub fn nullable<C, V, G, M>(
        self,
        wire_name: impl Into<Cow<'static, str>>,
        codec: C,
        get: G,
        get_mut: M,
    ) -> Self
    where
        C: TypeCodec,
        V: FieldType<C> + 'static,
        G: Fn(&T) -> &V + Send + Sync + 'static,
        M: Fn(&mut T) -> &mut V + Send + Sync + 'static,
    {
        self.field(wire_name, codec, true, get, get_mut)
    }

    /// Registers a prebuilt descriptor.
    pub fn push_field(&mut self, field: FieldDescriptor<T>) -> &mut Self {
        self.fields.push(field);
        self
    }

    /// Builds the schema, checking that every wire name is used once.
    pub fn build(self) -> Result<Schema<T>, SchemaError> {
        let owner = std::any::type_name::<T>();
        {
            let mut seen = HashSet::with_capacity(self.fields.len());
            for field in &self.fields {
                if !seen.insert(field.wire_name()) {
                    return Err(SchemaError::DuplicateWireName {
                        owner,
                        wire_name: field.name(),
                    });
                }
            }
        }
        tracing::debug!(owner, fields = self.fields.len(), "built item schema");
        Ok(Schema {
            owner,
            fields: self.fields,
            construct: self.construct,
        })
    }
}

impl<T> fmt::Debug for SchemaBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaBuilder")
            .field("fields", &self.fields)
            .finish()
    }
}
