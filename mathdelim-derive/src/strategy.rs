//! Parsing of `#[rewrite(...)]` attributes.
//!
//! This module maps attribute syntax to traversal decisions and produces
//! structured errors for invalid forms.

use syn::{Attribute, LitStr, Meta, Result, spanned::Spanned};

/// Field traversal strategy based on `#[rewrite(...)]` attributes.
///
/// | Attribute                   | Strategy             | Behavior                           |
/// |-----------------------------|----------------------|------------------------------------|
/// | None                        | `Walk { key: None }` | Walk under the field name          |
/// | `#[rewrite(rename = "k")]`  | `Walk { key: "k" }`  | Walk under `k`                     |
/// | `#[rewrite(skip)]`          | `Skip`               | Explicit passthrough (no traversal)|
#[derive(Clone, Debug)]
pub(crate) enum Strategy {
    Walk { key: Option<LitStr> },
    Skip,
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut seen = false;
    let mut skip = false;
    let mut key: Option<LitStr> = None;

    for attr in attrs {
        if !attr.path().is_ident("rewrite") {
            continue;
        }
        if seen {
            return Err(syn::Error::new(
                attr.span(),
                "multiple #[rewrite] attributes on the same field",
            ));
        }
        seen = true;

        if !matches!(attr.meta, Meta::List(_)) {
            return Err(syn::Error::new(
                attr.span(),
                "expected #[rewrite(skip)] or #[rewrite(rename = \"key\")]",
            ));
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                if skip {
                    return Err(meta.error("duplicate `skip`"));
                }
                skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                if key.is_some() {
                    return Err(meta.error("duplicate `rename`"));
                }
                key = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unknown rewrite option; expected `skip` or `rename`"))
            }
        })?;

        if skip && key.is_some() {
            return Err(syn::Error::new(
                attr.span(),
                "`skip` and `rename` cannot be combined",
            ));
        }
    }

    if skip {
        Ok(Strategy::Skip)
    } else {
        Ok(Strategy::Walk { key })
    }
}

/// `#[rewrite]` only applies to fields.
pub(crate) fn reject_container_attributes(attrs: &[Attribute]) -> Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident("rewrite")) {
        Some(attr) => Err(syn::Error::new(
            attr.span(),
            "#[rewrite] is a field attribute; it has no meaning on the type itself",
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse_attrs(tokens: proc_macro2::TokenStream) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        input.attrs
    }

    #[test]
    fn no_attribute_walks_under_field_name() {
        let attrs = parse_attrs(quote! {});
        let strategy = parse_field_strategy(&attrs).unwrap();
        assert!(matches!(strategy, Strategy::Walk { key: None }));
    }

    #[test]
    fn skip_returns_skip() {
        let attrs = parse_attrs(quote! { #[rewrite(skip)] });
        let strategy = parse_field_strategy(&attrs).unwrap();
        assert!(matches!(strategy, Strategy::Skip));
    }

    #[test]
    fn rename_sets_key() {
        let attrs = parse_attrs(quote! { #[rewrite(rename = "href")] });
        match parse_field_strategy(&attrs).unwrap() {
            Strategy::Walk { key: Some(key) } => assert_eq!(key.value(), "href"),
            other => panic!("expected renamed walk, got {other:?}"),
        }
    }

    #[test]
    fn bare_rewrite_errors() {
        let attrs = parse_attrs(quote! { #[rewrite] });
        let result = parse_field_strategy(&attrs);
        assert!(result.unwrap_err().to_string().contains("expected #[rewrite(skip)]"));
    }

    #[test]
    fn name_value_syntax_errors() {
        let attrs = parse_attrs(quote! { #[rewrite = "skip"] });
        assert!(parse_field_strategy(&attrs).is_err());
    }

    #[test]
    fn unknown_option_errors() {
        let attrs = parse_attrs(quote! { #[rewrite(always)] });
        let result = parse_field_strategy(&attrs);
        assert!(result.unwrap_err().to_string().contains("unknown rewrite option"));
    }

    #[test]
    fn skip_with_rename_errors() {
        let attrs = parse_attrs(quote! { #[rewrite(skip, rename = "a")] });
        let result = parse_field_strategy(&attrs);
        assert!(result.unwrap_err().to_string().contains("cannot be combined"));
    }

    #[test]
    fn multiple_attributes_error() {
        let attrs = parse_attrs(quote! {
            #[rewrite(skip)]
            #[rewrite(skip)]
        });
        let result = parse_field_strategy(&attrs);
        assert!(result.unwrap_err().to_string().contains("multiple"));
    }

    #[test]
    fn other_attributes_ignored() {
        let attrs = parse_attrs(quote! {
            #[derive(Clone)]
            #[serde(skip)]
        });
        let strategy = parse_field_strategy(&attrs).unwrap();
        assert!(matches!(strategy, Strategy::Walk { key: None }));
    }

    #[test]
    fn container_attribute_rejected() {
        let attrs = parse_attrs(quote! { #[rewrite(skip)] });
        assert!(reject_container_attributes(&attrs).is_err());
        assert!(reject_container_attributes(&parse_attrs(quote! {})).is_ok());
    }
}
