/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Attribute, DeriveInput, Ident, LitStr};

/// A field marked with `#[dynamo(...)]`.
struct MappedField {
    ident: Ident,
    wire_name: LitStr,
    codec: TokenStream2,
    nullable: bool,
}

/// Implementation of the `DynamoItem` derive.
///
/// Emits a `MappedItem` impl whose `schema_builder` registers every mapped field in
/// declaration order. Errors are returned as `compile_error!` tokens.
pub(crate) fn dynamo_item_impl(input: DeriveInput) -> TokenStream2 {
    let syn::Data::Struct(data) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "DynamoItem can only be derived for structs")
            .to_compile_error();
    };
    let syn::Fields::Named(fields) = &data.fields else {
        return syn::Error::new_spanned(&input.ident, "only named fields are supported")
            .to_compile_error();
    };

    let mut mapped = Vec::new();
    for field in &fields.named {
        match parse_field(field) {
            Ok(Some(field)) => mapped.push(field),
            Ok(None) => {}
            Err(e) => return e.to_compile_error(),
        }
    }

    let registrations = mapped.iter().map(|field| {
        let MappedField {
            ident,
            wire_name,
            codec,
            nullable,
        } = field;
        quote! {
            .field(
                #wire_name,
                #codec,
                #nullable,
                |item| &item.#ident,
                |item| &mut item.#ident,
            )
        }
    });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    quote! {
        impl #impl_generics ::dynamo_mapper::MappedItem for #name #ty_generics #where_clause {
            fn schema_builder() -> ::dynamo_mapper::SchemaBuilder<Self> {
                ::dynamo_mapper::SchemaBuilder::<Self>::with_default()
                    #(#registrations)*
            }
        }
    }
}

fn parse_field(field: &syn::Field) -> syn::Result<Option<MappedField>> {
    let Some(attr) = find_dynamo_attr(&field.attrs) else {
        return Ok(None);
    };
    let Some(ident) = field.ident.clone() else {
        return Err(syn::Error::new_spanned(field, "mapped field must have a name"));
    };

    let mut wire_name = None;
    let mut tag: Option<LitStr> = None;
    let mut not_null = false;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("name") {
            wire_name = Some(meta.value()?.parse::<LitStr>()?);
        } else if meta.path.is_ident("tag") {
            tag = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("not_null") {
            not_null = true;
        } else {
            return Err(meta.error("unsupported dynamo attribute, expected `name`, `tag` or `not_null`"));
        }
        Ok(())
    })?;

    let tag = tag.ok_or_else(|| {
        syn::Error::new_spanned(&ident, "missing #[dynamo(tag = \"...\")]")
    })?;
    let codec = match tag.value().as_str() {
        "S" => quote! { ::dynamo_mapper::codec::S },
        "SS" => quote! { ::dynamo_mapper::codec::Ss },
        "BOOL" => quote! { ::dynamo_mapper::codec::Bool },
        _ => {
            return Err(syn::Error::new_spanned(
                &tag,
                "unknown attribute type, expected \"S\", \"SS\" or \"BOOL\"",
            ))
        }
    };
    let wire_name =
        wire_name.unwrap_or_else(|| LitStr::new(&ident.unraw().to_string(), ident.span()));

    Ok(Some(MappedField {
        ident,
        wire_name,
        codec,
        nullable: !not_null,
    }))
}

fn find_dynamo_attr(attrs: &[Attribute]) -> Option<&Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident("dynamo"))
}
