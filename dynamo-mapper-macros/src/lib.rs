/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Derive macro for the DynamoDB item mapper.
//!
//! This crate provides the `DynamoItem` derive, which generates a `MappedItem`
//! implementation from `#[dynamo(...)]` field attributes. Use it through the
//! `dynamo-mapper` crate.

#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;
use syn::DeriveInput;

use crate::derive_impl::dynamo_item_impl;

mod derive_impl;

/// Derives `MappedItem` for a struct with named fields.
///
/// Each field carrying `#[dynamo(...)]` is mapped; other fields are left alone. The struct must
/// implement `Default`, which supplies the value of every attribute missing from an item.
///
/// - `tag = "S" | "SS" | "BOOL"` - The declared attribute type (required)
/// - `name = "WIRE_NAME"` - The attribute name in the item (defaults to the field name)
/// - `not_null` - The attribute must be present in both directions
///
/// ```ignore
/// #[derive(Default, DynamoItem)]
/// struct User {
///     #[dynamo(name = "ID", tag = "S", not_null)]
///     id: Option<String>,
///     #[dynamo(name = "TAGS", tag = "SS")]
///     tags: Vec<String>,
/// }
/// ```
#[proc_macro_derive(DynamoItem, attributes(dynamo))]
pub fn derive_dynamo_item(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    dynamo_item_impl(input).into()
}
