//! Field transformation shared by struct and enum derivation.

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote_spanned;
use syn::{LitStr, ext::IdentExt};

use crate::{
    generics::collect_generics_from_type,
    strategy::Strategy,
    types::{is_phantom_data, is_scalar_type},
    walker_ident,
};

/// Generics collected while processing the fields of one type.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) used_generics: &'a mut Vec<Ident>,
}

/// How a field is addressed during traversal.
pub(crate) enum FieldKey<'a> {
    /// A named field, visited as the value under its name.
    Named(&'a Ident),
    /// A tuple field, visited positionally.
    Positional,
}

/// Generates the transform statement for a single field.
///
/// | Field                           | Generated                                  |
/// |---------------------------------|--------------------------------------------|
/// | scalar or `PhantomData`         | nothing                                    |
/// | `#[rewrite(skip)]`              | nothing                                    |
/// | named                           | `let f = walker.entry("f", f);`            |
/// | named, `rename = "k"`           | `let f = walker.entry("k", f);`            |
/// | tuple                           | `let field_0 = walker.descend(field_0);`   |
pub(crate) fn generate_field_transform(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    binding: &Ident,
    key: FieldKey<'_>,
    span: Span,
    strategy: &Strategy,
) -> TokenStream {
    let Strategy::Walk { key: renamed } = strategy else {
        return TokenStream::new();
    };
    if is_scalar_type(ty) || is_phantom_data(ty) {
        return TokenStream::new();
    }

    collect_generics_from_type(ty, ctx.generics, ctx.used_generics);
    let walker = walker_ident();
    match key {
        FieldKey::Named(ident) => {
            let key = renamed
                .clone()
                .unwrap_or_else(|| LitStr::new(&ident.unraw().to_string(), ident.span()));
            quote_spanned! { span =>
                let #binding = #walker.entry(#key, #binding);
            }
        }
        FieldKey::Positional => quote_spanned! { span =>
            let #binding = #walker.descend(#binding);
        },
    }
}
