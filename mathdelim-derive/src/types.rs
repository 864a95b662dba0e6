//! Type utilities for the derive macro.

/// Checks if a type is `PhantomData<...>`, bare or path-qualified.
///
/// Such fields never carry text, so they pass through without requiring
/// `T: RewritableContainer`.
pub(crate) fn is_phantom_data(ty: &syn::Type) -> bool {
    if let syn::Type::Path(path) = ty
        && let Some(last_segment) = path.path.segments.last()
    {
        return last_segment.ident == "PhantomData"
            && matches!(
                last_segment.arguments,
                syn::PathArguments::AngleBracketed(_)
            );
    }
    false
}

/// Checks if a type is a bare primitive name like `i32`, `bool` or `f64`.
///
/// Qualified paths, generic types and aliases return `false`; they are walked
/// through their own `RewritableContainer` impl instead.
pub(crate) fn is_scalar_type(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };
    if path.qself.is_some() || path.path.leading_colon.is_some() || path.path.segments.len() != 1
    {
        return false;
    }
    let Some(segment) = path.path.segments.last() else {
        return false;
    };
    if !segment.arguments.is_empty() {
        return false;
    }
    matches!(
        segment.ident.to_string().as_str(),
        "i8" | "i16"
            | "i32"
            | "i64"
            | "i128"
            | "isize"
            | "u8"
            | "u16"
            | "u32"
            | "u64"
            | "u128"
            | "usize"
            | "f32"
            | "f64"
            | "bool"
            | "char"
    )
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn parse_type(tokens: proc_macro2::TokenStream) -> syn::Type {
        syn::parse2(tokens).expect("should parse as Type")
    }

    #[test]
    fn phantom_data_detected_bare_and_qualified() {
        assert!(is_phantom_data(&parse_type(quote! { PhantomData<T> })));
        assert!(is_phantom_data(&parse_type(
            quote! { ::std::marker::PhantomData<T> }
        )));
    }

    #[test]
    fn phantom_data_without_generics_is_not_detected() {
        assert!(!is_phantom_data(&parse_type(quote! { PhantomData })));
        assert!(!is_phantom_data(&parse_type(quote! { String })));
    }

    #[test]
    fn primitives_are_scalars() {
        for ty in [quote! { u64 }, quote! { bool }, quote! { char }, quote! { f32 }] {
            assert!(is_scalar_type(&parse_type(ty)));
        }
    }

    #[test]
    fn strings_and_generics_are_not_scalars() {
        assert!(!is_scalar_type(&parse_type(quote! { String })));
        assert!(!is_scalar_type(&parse_type(quote! { Option<i32> })));
    }

    #[test]
    fn qualified_primitives_are_not_scalars() {
        assert!(!is_scalar_type(&parse_type(quote! { std::primitive::i32 })));
        assert!(!is_scalar_type(&parse_type(quote! { ::core::primitive::u8 })));
    }
}
