/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! FieldType implementations for standard Rust types.

use std::collections::{BTreeSet, HashSet};

use crate::attribute::TypeTag;
use crate::codec::{Bool, FieldType, Ss, TypeCodec, S};
use crate::document::Document;
use crate::error::{BoxError, CastError};

// ============================================================================
// Concrete types
// ============================================================================

impl FieldType<S> for String {
    fn to_codec_value(&self) -> Result<Option<String>, BoxError> {
        Ok(Some(self.clone()))
    }

    fn from_codec_value(value: String) -> Self {
        value
    }
}

impl FieldType<Ss> for Vec<String> {
    fn to_codec_value(&self) -> Result<Option<Vec<String>>, BoxError> {
        Ok(Some(self.clone()))
    }

    fn from_codec_value(value: Vec<String>) -> Self {
        value
    }
}

impl FieldType<Ss> for BTreeSet<String> {
    fn to_codec_value(&self) -> Result<Option<Vec<String>>, BoxError> {
        Ok(Some(self.iter().cloned().collect()))
    }

    fn from_codec_value(value: Vec<String>) -> Self {
        value.into_iter().collect()
    }
}

impl FieldType<Ss> for HashSet<String> {
    fn to_codec_value(&self) -> Result<Option<Vec<String>>, BoxError> {
        Ok(Some(self.iter().cloned().collect()))
    }

    fn from_codec_value(value: Vec<String>) -> Self {
        value.into_iter().collect()
    }
}

impl FieldType<Bool> for bool {
    fn to_codec_value(&self) -> Result<Option<bool>, BoxError> {
        Ok(Some(*self))
    }

    fn from_codec_value(value: bool) -> Self {
        value
    }
}

// ============================================================================
// Nullable wrapper
// ============================================================================

impl<C, V> FieldType<C> for Option<V>
where
    C: TypeCodec,
    V: FieldType<C>,
{
    fn to_codec_value(&self) -> Result<Option<C::Value>, BoxError> {
        match self {
            Some(value) => value.to_codec_value(),
            None => Ok(None),
        }
    }

    fn from_codec_value(value: C::Value) -> Self {
        Some(V::from_codec_value(value))
    }
}

// ============================================================================
// Heterogeneous values
// ============================================================================

impl FieldType<S> for Document {
    fn to_codec_value(&self) -> Result<Option<String>, BoxError> {
        match self {
            Document::Null => Ok(None),
            Document::String(s) => Ok(Some(s.clone())),
            other => Err(CastError::new(TypeTag::S, other.type_name()).into()),
        }
    }

    fn from_codec_value(value: String) -> Self {
        Document::String(value)
    }
}

impl FieldType<Ss> for Document {
    fn to_codec_value(&self) -> Result<Option<Vec<String>>, BoxError> {
        match self {
            Document::Null => Ok(None),
            Document::Array(items) => items
                .iter()
                .map(|item| match item {
                    Document::String(s) => Ok(s.clone()),
                    other => Err(BoxError::from(CastError::new(
                        TypeTag::Ss,
                        other.type_name(),
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            other => Err(CastError::new(TypeTag::Ss, other.type_name()).into()),
        }
    }

    fn from_codec_value(value: Vec<String>) -> Self {
        Document::Array(value.into_iter().map(Document::String).collect())
    }
}

impl FieldType<Bool> for Document {
    fn to_codec_value(&self) -> Result<Option<bool>, BoxError> {
        match self {
            Document::Null => Ok(None),
            Document::Bool(b) => Ok(Some(*b)),
            other => Err(CastError::new(TypeTag::Bool, other.type_name()).into()),
        }
    }

    fn from_codec_value(value: bool) -> Self {
        Document::Bool(value)
    }
}
