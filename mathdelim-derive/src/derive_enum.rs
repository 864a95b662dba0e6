//! Enum-specific `RewritableContainer` derivation.
//!
//! Each variant is matched, its fields are walked the same way struct fields
//! are, and the variant is rebuilt.

use quote::{format_ident, quote};
use syn::{DataEnum, Fields, Result, spanned::Spanned};

use crate::{
    DeriveOutput,
    strategy::parse_field_strategy,
    transform::{DeriveContext, FieldKey, generate_field_transform},
};

pub(crate) fn derive_enum(data: DataEnum, generics: &syn::Generics) -> Result<DeriveOutput> {
    let mut used_generics = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        used_generics: &mut used_generics,
    };
    let mut arms = Vec::new();

    for variant in data.variants {
        let variant_ident = variant.ident;
        let mut bindings = Vec::new();
        let mut transforms = Vec::new();
        match variant.fields {
            Fields::Unit => {
                arms.push(quote! {
                    Self::#variant_ident => Self::#variant_ident
                });
            }
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
                arms.push(quote! {
                    Self::#variant_ident { #(#bindings),* } => {
                        #(#transforms)*
                        Self::#variant_ident { #(#bindings),* }
                    }
                });
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
                arms.push(quote! {
                    Self::#variant_ident ( #(#bindings),* ) => {
                        #(#transforms)*
                        Self::#variant_ident ( #(#bindings),* )
                    }
                });
            }
        }
    }

    Ok(DeriveOutput {
        rewrite_body: quote! {
            match self {
                #(#arms),*
            }
        },
        used_generics,
    })
}
