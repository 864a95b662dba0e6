//! Generic type parameter handling and trait bound management.
//!
//! Bounds are added only for generics that appear in walked fields.
//! `PhantomData<T>` is skipped, so a marker parameter never needs
//! `T: RewritableContainer`.

use syn::{Ident, parse_quote};

use crate::crate_path;

fn push_if_generic(ident: &Ident, generics: &syn::Generics, result: &mut Vec<Ident>) {
    if generics.type_params().any(|param| param.ident == *ident)
        && !result.iter().any(|g| g == ident)
    {
        result.push(ident.clone());
    }
}

fn visit_path_arguments(
    args: &syn::PathArguments,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match args {
        syn::PathArguments::AngleBracketed(args) => {
            for arg in &args.args {
                match arg {
                    syn::GenericArgument::Type(inner) => visit_type(inner, generics, result),
                    syn::GenericArgument::AssocType(assoc) => {
                        visit_type(&assoc.ty, generics, result);
                    }
                    _ => {}
                }
            }
        }
        syn::PathArguments::Parenthesized(args) => {
            for input in &args.inputs {
                visit_type(input, generics, result);
            }
            if let syn::ReturnType::Type(_, output) = &args.output {
                visit_type(output, generics, result);
            }
        }
        syn::PathArguments::None => {}
    }
}

fn visit_path(path: &syn::Path, generics: &syn::Generics, result: &mut Vec<Ident>) {
    if path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "PhantomData")
    {
        return;
    }
    for segment in &path.segments {
        push_if_generic(&segment.ident, generics, result);
        visit_path_arguments(&segment.arguments, generics, result);
    }
}

fn visit_type(ty: &syn::Type, generics: &syn::Generics, result: &mut Vec<Ident>) {
    match ty {
        syn::Type::Path(type_path) => {
            if let Some(qself) = &type_path.qself {
                visit_type(&qself.ty, generics, result);
            }
            visit_path(&type_path.path, generics, result);
        }
        syn::Type::Reference(reference) => visit_type(&reference.elem, generics, result),
        syn::Type::Slice(slice) => visit_type(&slice.elem, generics, result),
        syn::Type::Array(array) => visit_type(&array.elem, generics, result),
        syn::Type::Tuple(tuple) => {
            for elem in &tuple.elems {
                visit_type(elem, generics, result);
            }
        }
        syn::Type::Paren(paren) => visit_type(&paren.elem, generics, result),
        syn::Type::Group(group) => visit_type(&group.elem, generics, result),
        _ => {}
    }
}

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    visit_type(ty, generics, result);
}

/// Adds `RewritableContainer` bounds to generic parameters used in walked fields.
pub(crate) fn add_container_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
) -> syn::Generics {
    let container_path = crate_path("RewritableContainer");
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            param.bounds.push(parse_quote!(#container_path));
        }
    }
    generics
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(generics: &syn::Generics, ty: &syn::Type) -> Vec<String> {
        let mut result = Vec::new();
        collect_generics_from_type(ty, generics, &mut result);
        result.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn collects_nested_parameters_once() {
        let generics: syn::Generics = parse_quote!(<T, U>);
        let ty: syn::Type = parse_quote!(Vec<(T, Option<T>)>);
        assert_eq!(collect(&generics, &ty), ["T"]);
    }

    #[test]
    fn skips_phantom_data() {
        let generics: syn::Generics = parse_quote!(<T>);
        let ty: syn::Type = parse_quote!(::core::marker::PhantomData<T>);
        assert!(collect(&generics, &ty).is_empty());
    }

    #[test]
    fn ignores_concrete_types() {
        let generics: syn::Generics = parse_quote!(<T>);
        let ty: syn::Type = parse_quote!(BTreeMap<String, Value>);
        assert!(collect(&generics, &ty).is_empty());
    }
}
