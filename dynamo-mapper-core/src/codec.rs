/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Per-tag codecs and the field types they accept.
//!
//! Each [`TypeTag`] has one [`TypeCodec`]: a pair of pure functions translating between the
//! tag's domain representation and an [`AttributeValue`]. Domain field types plug into a codec
//! through [`FieldType`], which is where nullability and the fallible cast for heterogeneous
//! values live. Supporting a new tag means adding a variant, a codec and its field types; the
//! mapper itself doesn't change.

use crate::attribute::{AttributeValue, TypeTag};
use crate::error::BoxError;

/// Encode/decode pair for one [`TypeTag`].
pub trait TypeCodec: Send + Sync + 'static {
    /// The tag this codec handles.
    const TAG: TypeTag;

    /// The domain representation of the tag.
    type Value;

    /// Wraps a domain value in the tag's variant.
    fn encode(value: Self::Value) -> AttributeValue;

    /// Unwraps the tag's variant. Returns `None` when `value` holds a different variant, which
    /// callers treat exactly like a missing attribute.
    fn decode(value: AttributeValue) -> Option<Self::Value>;
}

/// Codec for `S` attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct S;

/// Codec for `SS` attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ss;

/// Codec for `BOOL` attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bool;

impl TypeCodec for S {
    const TAG: TypeTag = TypeTag::S;
    type Value = String;

    fn encode(value: String) -> AttributeValue {
        AttributeValue::S(value)
    }

    fn decode(value: AttributeValue) -> Option<String> {
        match value {
            AttributeValue::S(s) => Some(s),
            _ => None,
        }
    }
}

impl TypeCodec for Ss {
    const TAG: TypeTag = TypeTag::Ss;
    type Value = Vec<String>;

    fn encode(value: Vec<String>) -> AttributeValue {
        AttributeValue::Ss(value)
    }

    fn decode(value: AttributeValue) -> Option<Vec<String>> {
        match value {
            AttributeValue::Ss(ss) => Some(ss),
            _ => None,
        }
    }
}

impl TypeCodec for Bool {
    const TAG: TypeTag = TypeTag::Bool;
    type Value = bool;

    fn encode(value: bool) -> AttributeValue {
        AttributeValue::Bool(value)
    }

    fn decode(value: AttributeValue) -> Option<bool> {
        match value {
            AttributeValue::Bool(b) => Some(b),
            _ => None,
        }
    }
}

/// A domain field type that can be stored through codec `C`.
///
/// Registering a field whose type doesn't implement `FieldType` for the declared codec is a
/// compile error, so most tag/type mismatches never reach runtime.
pub trait FieldType<C: TypeCodec>: Sized {
    /// Reads the codec value out of the field.
    ///
    /// `Ok(None)` means the field is absent (e.g. `None`). An error means the runtime value
    /// can't be represented under `C`'s tag; it becomes the cause of a type mismatch.
    fn to_codec_value(&self) -> Result<Option<C::Value>, BoxError>;

    /// Builds the field from a decoded codec value.
    fn from_codec_value(value: C::Value) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rejects_other_variants() {
        assert_eq!(None, S::decode(AttributeValue::Ss(vec!["654321".into()])));
        assert_eq!(None, Ss::decode(AttributeValue::Bool(true)));
        assert_eq!(None, Bool::decode(AttributeValue::S("true".into())));
    }

    #[test]
    fn codec_tags_line_up_with_their_variant() {
        assert!(S::TAG.matches(&S::encode("a".into())));
        assert!(Ss::TAG.matches(&Ss::encode(vec![])));
        assert!(Bool::TAG.matches(&Bool::encode(false)));
    }
}
