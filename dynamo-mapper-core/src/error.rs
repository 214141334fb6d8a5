/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Error types for schema construction and item mapping.

use crate::attribute::TypeTag;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// A boxed [std::error::Error] trait object that's [Send] and [Sync]
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// The kind of mapping error that occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MappingErrorKind {
    /// A non-nullable field was absent: a missing key, a value of the wrong variant, or an
    /// absent field value on encode.
    NullableViolation,
    /// A field value could not be represented under its declared type tag.
    TypeMismatch,
    /// The target record could not be constructed.
    Construction,
    /// An attribute was present with a variant other than the field's tag. Only reported
    /// under [`VariantPolicy::Strict`](crate::VariantPolicy::Strict).
    UnexpectedVariant {
        /// The tag declared by the field.
        expected: TypeTag,
        /// The tag of the attribute found in the item.
        actual: TypeTag,
    },
    /// The schema for the record type could not be built.
    InvalidSchema,
}

/// Error returned when a record cannot be mapped to or from an [`Item`](crate::Item).
///
/// Mapping is fail-fast: the error describes the first field that failed and no partial
/// result is produced.
#[derive(Debug)]
pub struct MappingError {
    kind: MappingErrorKind,
    field: Option<Cow<'static, str>>,
    source: Option<BoxError>,
}

impl MappingError {
    fn new(kind: MappingErrorKind, field: Option<Cow<'static, str>>) -> Self {
        Self {
            kind,
            field,
            source: None,
        }
    }

    /// Creates an error for a non-nullable field that was absent.
    pub fn nullable_violation(field: impl Into<Cow<'static, str>>) -> Self {
        Self::new(MappingErrorKind::NullableViolation, Some(field.into()))
    }

    /// Creates an error for a field value that can't be represented under its tag.
    pub fn type_mismatch(field: impl Into<Cow<'static, str>>, source: impl Into<BoxError>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::new(MappingErrorKind::TypeMismatch, Some(field.into()))
        }
    }

    /// Creates an error for a record that could not be constructed.
    pub fn construction(source: impl Into<BoxError>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::new(MappingErrorKind::Construction, None)
        }
    }

    /// Creates an error for an attribute present under the wrong variant.
    pub fn unexpected_variant(
        field: impl Into<Cow<'static, str>>,
        expected: TypeTag,
        actual: TypeTag,
    ) -> Self {
        Self::new(
            MappingErrorKind::UnexpectedVariant { expected, actual },
            Some(field.into()),
        )
    }

    /// Creates an error for a schema that failed to build.
    pub fn invalid_schema(source: SchemaError) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::new(MappingErrorKind::InvalidSchema, None)
        }
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> &MappingErrorKind {
        &self.kind
    }

    /// Returns the wire name of the offending field, if the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field.as_deref().unwrap_or("<unknown>");
        match &self.kind {
            MappingErrorKind::NullableViolation => {
                write!(f, "Non-nullable value is null: {field}")
            }
            MappingErrorKind::TypeMismatch => {
                write!(f, "value of '{field}' does not match its declared type")
            }
            MappingErrorKind::Construction => write!(f, "failed to construct record"),
            MappingErrorKind::UnexpectedVariant { expected, actual } => write!(
                f,
                "invalid type for '{field}': expected {expected}, got {actual}"
            ),
            MappingErrorKind::InvalidSchema => write!(f, "invalid schema"),
        }
    }
}

impl StdError for MappingError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|err| err.as_ref() as _)
    }
}

/// Error returned when a [`Schema`](crate::Schema) can't be built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    /// Two fields were registered under the same wire name.
    DuplicateWireName {
        /// The record type that declared the fields.
        owner: &'static str,
        /// The repeated wire name.
        wire_name: Cow<'static, str>,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::DuplicateWireName { owner, wire_name } => {
                write!(f, "wire name '{wire_name}' is mapped more than once in {owner}")
            }
        }
    }
}

impl StdError for SchemaError {}

/// A runtime value could not be cast to the representation its type tag requires.
///
/// This is the underlying cause of [`MappingErrorKind::TypeMismatch`] for the built-in
/// field types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastError {
    expected: TypeTag,
    found: &'static str,
}

impl CastError {
    /// Creates a new cast error.
    pub fn new(expected: TypeTag, found: &'static str) -> Self {
        Self { expected, found }
    }

    /// The tag the value was declared under.
    pub fn expected(&self) -> TypeTag {
        self.expected
    }

    /// A short description of the runtime value that was found.
    pub fn found(&self) -> &'static str {
        self.found
    }
}

impl fmt::Display for CastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot cast {} to {}", self.found, self.expected)
    }
}

impl StdError for CastError {}
