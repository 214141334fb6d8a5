/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Conversions with the AWS SDK for DynamoDB.

use aws_sdk_dynamodb::types::AttributeValue as SdkAttributeValue;
use std::collections::HashMap;
use std::fmt;

use crate::attribute::{AttributeValue, Item};

/// An SDK attribute value has a type outside of `S`, `SS` and `BOOL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedAttributeError {
    type_name: &'static str,
}

impl UnsupportedAttributeError {
    fn new(value: &SdkAttributeValue) -> Self {
        let type_name = match value {
            SdkAttributeValue::N(_) => "N",
            SdkAttributeValue::Ns(_) => "NS",
            SdkAttributeValue::B(_) => "B",
            SdkAttributeValue::Bs(_) => "BS",
            SdkAttributeValue::L(_) => "L",
            SdkAttributeValue::M(_) => "M",
            SdkAttributeValue::Null(_) => "NULL",
            // S, SS and BOOL convert; variants added to the SDK later land here.
            _ => "UNKNOWN",
        };
        Self { type_name }
    }

    /// The DynamoDB type of the rejected value, e.g. `"N"`.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Display for UnsupportedAttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported attribute type: {}", self.type_name)
    }
}

impl std::error::Error for UnsupportedAttributeError {}

impl TryFrom<SdkAttributeValue> for AttributeValue {
    type Error = UnsupportedAttributeError;

    fn try_from(value: SdkAttributeValue) -> Result<Self, Self::Error> {
        match value {
            SdkAttributeValue::S(s) => Ok(AttributeValue::S(s)),
            SdkAttributeValue::Ss(ss) => Ok(AttributeValue::Ss(ss)),
            SdkAttributeValue::Bool(b) => Ok(AttributeValue::Bool(b)),
            other => Err(UnsupportedAttributeError::new(&other)),
        }
    }
}

impl From<AttributeValue> for SdkAttributeValue {
    fn from(value: AttributeValue) -> Self {
        match value {
            AttributeValue::S(s) => SdkAttributeValue::S(s),
            AttributeValue::Ss(ss) => SdkAttributeValue::Ss(ss),
            AttributeValue::Bool(b) => SdkAttributeValue::Bool(b),
        }
    }
}

/// Converts an item returned by the SDK.
///
/// Attributes of unsupported types are dropped, so they read as absent when the item is mapped.
pub fn from_sdk_item(item: HashMap<String, SdkAttributeValue>) -> Item {
    item.into_iter()
        .filter_map(|(name, value)| match AttributeValue::try_from(value) {
            Ok(value) => Some((name, value)),
            Err(err) => {
                tracing::debug!(attribute = %name, error = %err, "dropping attribute");
                None
            }
        })
        .collect()
}

/// Converts an item for use with the SDK.
pub fn into_sdk_item(item: Item) -> HashMap<String, SdkAttributeValue> {
    item.into_iter()
        .map(|(name, value)| (name, value.into()))
        .collect()
}
