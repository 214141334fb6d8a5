/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Wire-level attribute values and items.

use std::collections::HashMap;
use std::fmt;

/// A wire item: attribute name to attribute value.
///
/// Absence of a field is represented by a missing key. There is no null variant.
pub type Item = HashMap<String, AttributeValue>;

/// A single wire-level value.
///
/// This is the full set of shapes accepted and produced by the mapper. When the `serde`
/// feature is enabled, values serialize in the DynamoDB JSON form (`{"S": "..."}`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeValue {
    /// String
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    S(String),
    /// String set. Order and duplicates are whatever the domain field provides.
    #[cfg_attr(feature = "serde", serde(rename = "SS"))]
    Ss(Vec<String>),
    /// Boolean
    #[cfg_attr(feature = "serde", serde(rename = "BOOL"))]
    Bool(bool),
}

impl AttributeValue {
    /// Returns the tag of the active variant.
    pub fn tag(&self) -> TypeTag {
        match self {
            AttributeValue::S(_) => TypeTag::S,
            AttributeValue::Ss(_) => TypeTag::Ss,
            AttributeValue::Bool(_) => TypeTag::Bool,
        }
    }

    /// Returns the wire name of the active variant, e.g. `"SS"`.
    pub fn type_name(&self) -> &'static str {
        self.tag().as_str()
    }

    /// Returns the string if this is an `S` value.
    pub fn as_s(&self) -> Option<&str> {
        match self {
            AttributeValue::S(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the strings if this is an `SS` value.
    pub fn as_ss(&self) -> Option<&[String]> {
        match self {
            AttributeValue::Ss(ss) => Some(ss),
            _ => None,
        }
    }

    /// Returns the flag if this is a `BOOL` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::S(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::S(value.to_owned())
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(values: Vec<String>) -> Self {
        AttributeValue::Ss(values)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

/// Identifies which [`AttributeValue`] variant, and therefore which codec, applies to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TypeTag {
    /// `S`: text
    S,
    /// `SS`: sequence of text
    Ss,
    /// `BOOL`: flag
    Bool,
}

impl TypeTag {
    /// Returns the wire name of this tag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TypeTag::S => "S",
            TypeTag::Ss => "SS",
            TypeTag::Bool => "BOOL",
        }
    }

    /// Returns true if `value`'s active variant is the one this tag describes.
    pub fn matches(&self, value: &AttributeValue) -> bool {
        value.tag() == *self
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
