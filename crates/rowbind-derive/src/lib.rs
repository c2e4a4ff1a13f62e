//! `#[derive(Record)]` for rowbind record types.
//!
//! Each named field may carry `#[csv_column_name = "column"]`. The derive
//! emits a `rowbind_core::Record` impl whose schema lists the fields in
//! declaration order with a typed setter per field; the schema is built on
//! first use and cached. Fields without the attribute are kept in the
//! schema as untagged so validation can report them.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Expr, ExprLit, Fields, Lit, parse_macro_input};

const TAG_KEY: &str = "csv_column_name";

#[proc_macro_derive(Record, attributes(csv_column_name))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Record cannot be derived for generic types",
        ));
    }

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            ident,
            "Record can only be derived for structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &data.fields,
            "Record requires a struct with named fields",
        ));
    };

    let mut entries = Vec::with_capacity(fields.named.len());
    for field in &fields.named {
        let Some(field_ident) = &field.ident else {
            continue;
        };
        let name = field_ident.unraw().to_string();
        let entry = match column_tag(field)? {
            Some(tag) => quote! {
                .column(#name, #tag, |record: &mut #ident, value: ::std::string::String| {
                    record.#field_ident = value;
                })
            },
            None => quote! {
                .untagged(#name, |record: &mut #ident, value: ::std::string::String| {
                    record.#field_ident = value;
                })
            },
        };
        entries.push(entry);
    }

    Ok(quote! {
        impl ::rowbind_core::Record for #ident {
            fn schema() -> &'static ::rowbind_core::Schema<Self> {
                static SCHEMA: ::std::sync::OnceLock<::rowbind_core::Schema<#ident>> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    ::rowbind_core::Schema::<#ident>::builder()
                        #(#entries)*
                        .build()
                })
            }
        }
    })
}

/// Reads `#[csv_column_name = "..."]`. At most one per field.
fn column_tag(field: &syn::Field) -> syn::Result<Option<String>> {
    let mut tag = None;
    for attr in &field.attrs {
        if !attr.path().is_ident(TAG_KEY) {
            continue;
        }
        if tag.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "duplicate csv_column_name attribute",
            ));
        }
        let name_value = attr.meta.require_name_value()?;
        match &name_value.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(value),
                ..
            }) => tag = Some(value.value()),
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "expected a string literal, e.g. #[csv_column_name = \"name\"]",
                ));
            }
        }
    }
    Ok(tag)
}
