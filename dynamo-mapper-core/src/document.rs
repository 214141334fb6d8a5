/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Open content for heterogeneous fields.
///
/// A `Document` field can be registered under any tag. Whether its runtime value fits that tag
/// is only known at mapping time: a mismatch is reported as a
/// [`TypeMismatch`](crate::MappingErrorKind::TypeMismatch) whose cause is a
/// [`CastError`](crate::CastError). [`Document::Null`] reads as an absent field.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Document {
    /// No value
    #[default]
    Null,
    /// Boolean
    Bool(bool),
    /// Number
    Number(f64),
    /// String
    String(String),
    /// Array
    Array(Vec<Document>),
}

impl Document {
    /// Returns a short, lowercase name for the active variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Document::Null => "null",
            Document::Bool(_) => "bool",
            Document::Number(_) => "number",
            Document::String(_) => "string",
            Document::Array(_) => "array",
        }
    }

    /// Returns true for [`Document::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Document::Null)
    }
}

impl From<bool> for Document {
    fn from(value: bool) -> Self {
        Document::Bool(value)
    }
}

impl From<f64> for Document {
    fn from(value: f64) -> Self {
        Document::Number(value)
    }
}

impl From<i32> for Document {
    fn from(value: i32) -> Self {
        Document::Number(value.into())
    }
}

impl From<String> for Document {
    fn from(value: String) -> Self {
        Document::String(value)
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Document::String(value.to_owned())
    }
}

impl From<Vec<Document>> for Document {
    fn from(values: Vec<Document>) -> Self {
        Document::Array(values)
    }
}
