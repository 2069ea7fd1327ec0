//! Record derive macro implementation
//!
//! ## Module Structure
//!
//! - `attrs`: struct-level and field-level `#[record(...)]` attribute parsing

mod attrs;

use attrs::{FieldAttr, RenameRule};

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Result};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let rename = RenameRule::from_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Record can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Record can only be derived for structs",
            ));
        }
    };

    let mut descriptors = Vec::with_capacity(fields.len());
    for field in fields {
        let attr = FieldAttr::from_field(field)?;
        if attr.skip {
            continue;
        }

        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let declared = match rename {
            Some(rule) => rule.apply(&ident.unraw().to_string()),
            None => ident.unraw().to_string(),
        };
        let tags = attr.tags.iter().map(|(key, value)| quote! { (#key, #value) });

        descriptors.push(quote! {
            fieldsel::RecordField::new(#declared, &[#(#tags),*], &self.#ident)
        });
    }

    Ok(quote! {
        impl #impl_generics fieldsel::Record for #name #ty_generics #where_clause {
            fn fields(&self) -> ::core::option::Option<::std::vec::Vec<fieldsel::RecordField<'_>>> {
                ::core::option::Option::Some(::std::vec![#(#descriptors),*])
            }
        }
    })
}
