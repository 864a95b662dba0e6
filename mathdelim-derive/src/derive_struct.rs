//! Struct-specific `RewritableContainer` derivation.

use quote::{format_ident, quote};
use syn::{DataStruct, Fields, Result, spanned::Spanned};

use crate::{
    DeriveOutput,
    strategy::parse_field_strategy,
    transform::{DeriveContext, FieldKey, generate_field_transform},
};

pub(crate) fn derive_struct(data: DataStruct, generics: &syn::Generics) -> Result<DeriveOutput> {
    let mut used_generics = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        used_generics: &mut used_generics,
    };
    let mut bindings = Vec::new();
    let mut transforms = Vec::new();

    let rewrite_body = match data.fields {
        Fields::Named(fields) => {
            for field in fields.named {
                let span = field.span();
                let strategy = parse_field_strategy(&field.attrs)?;
                let Some(ident) = field.ident else {
                    return Err(syn::Error::new(span, "named field without an identifier"));
                };
                transforms.push(generate_field_transform(
                    &mut ctx,
                    &field.ty,
                    &ident,
                    FieldKey::Named(&ident),
                    span,
                    &strategy,
                ));
                bindings.push(ident);
            }
            quote! {
                let Self { #(#bindings),* } = self;
                #(#transforms)*
                Self { #(#bindings),* }
            }
        }
        Fields::Unnamed(fields) => {
            for (index, field) in fields.unnamed.into_iter().enumerate() {
                let span = field.span();
                let strategy = parse_field_strategy(&field.attrs)?;
                let binding = format_ident!("field_{index}");
                transforms.push(generate_field_transform(
                    &mut ctx,
                    &field.ty,
                    &binding,
                    FieldKey::Positional,
                    span,
                    &strategy,
                ));
                bindings.push(binding);
            }
            quote! {
                let Self ( #(#bindings),* ) = self;
                #(#transforms)*
                Self ( #(#bindings),* )
            }
        }
        Fields::Unit => quote! { self },
    };

    Ok(DeriveOutput {
        rewrite_body,
        used_generics,
    })
}
