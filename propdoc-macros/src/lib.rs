//! Procedural macros for the propdoc project.
//!
//! This crate provides `#[derive(Document)]`, which turns a struct holding a single
//! `Properties` field into a record kind: it implements `Document`, `From<Properties>`
//! and a `Display` that renders every stored entry.
//!
//! ```ignore
//! use propdoc::prelude::*;
//!
//! #[derive(Debug, Clone, Document)]
//! #[document(name = "Engine")]
//! pub struct EngineRecord {
//!     properties: Properties,
//! }
//!
//! impl HasModel for EngineRecord {}
//! ```
//!
//! Supported container attributes:
//!
//! - `#[document(name = "...")]` - the kind name used when rendering (defaults to the type name)
//! - `#[document(crate = "...")]` - path to the core crate (defaults to the core re-exported by `propdoc`)

#[allow(unused_extern_crates)]
extern crate self as propdoc_macros;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Index, LitStr, Member, Path, parse_macro_input};

#[proc_macro_derive(Document, attributes(document))]
pub fn derive_document(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand_document(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct ContainerAttrs {
    name: String,
    krate: Path,
}

fn expand_document(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let ContainerAttrs { name, krate } = container_attrs(input)?;
    let member = storage_member(input)?;

    Ok(quote! {
        impl #impl_generics #krate::document::Document for #ident #ty_generics #where_clause {
            fn from_properties(properties: #krate::properties::Properties) -> Self {
                Self { #member: properties }
            }

            fn properties(&self) -> &#krate::properties::Properties {
                &self.#member
            }

            fn properties_mut(&mut self) -> &mut #krate::properties::Properties {
                &mut self.#member
            }

            fn kind_name() -> &'static str {
                #name
            }
        }

        impl #impl_generics ::core::convert::From<#krate::properties::Properties> for #ident #ty_generics #where_clause {
            fn from(properties: #krate::properties::Properties) -> Self {
                <Self as #krate::document::Document>::from_properties(properties)
            }
        }

        impl #impl_generics ::core::fmt::Display for #ident #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #krate::document::render(self, f)
            }
        }
    })
}

fn container_attrs(input: &DeriveInput) -> syn::Result<ContainerAttrs> {
    let mut name = None;
    let mut krate = None;

    for attr in &input.attrs {
        if !attr.path().is_ident("document") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                name = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("crate") {
                let value: LitStr = meta.value()?.parse()?;
                krate = Some(value.parse::<Path>()?);
                Ok(())
            } else {
                Err(meta.error("unsupported document attribute, expected `name` or `crate`"))
            }
        })?;
    }

    Ok(ContainerAttrs {
        name: name.unwrap_or_else(|| input.ident.to_string()),
        krate: match krate {
            Some(path) => path,
            None => syn::parse_quote!(::propdoc::__core),
        },
    })
}

/// Finds the single field that stores the document's properties.
fn storage_member(input: &DeriveInput) -> syn::Result<Member> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Document can only be derived for structs",
        ));
    };

    match &data.fields {
        Fields::Named(fields) if fields.named.len() == 1 => fields.named[0]
            .ident
            .clone()
            .map(Member::Named)
            .ok_or_else(|| syn::Error::new_spanned(&fields.named[0], "expected a named field")),
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Ok(Member::Unnamed(Index::from(0))),
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "Document requires a struct with exactly one field holding its Properties",
        )),
    }
}
