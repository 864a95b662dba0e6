//! Derive macro for `mathdelim`.
//!
//! This crate generates the traversal code behind `#[derive(Rewritable)]`. It:
//! - reads `#[rewrite(...)]` field attributes
//! - emits a `mathdelim::RewritableContainer` implementation that walks every
//!   field through the traversal state, so excluded keys and the depth bound
//!   apply to derived types exactly as they do to maps
//!
//! It does **not** decide what gets rewritten. Thresholds and excluded keys
//! live in the main `mathdelim` crate and are applied at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input, spanned::Spanned};

mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
mod transform;
mod types;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_container_bounds;
use strategy::reject_container_attributes;

/// Derives `mathdelim::RewritableContainer` for structs and enums.
///
/// # Field Attributes
///
/// - **No annotation**: the field is walked. Named fields are visited as the
///   value under a key equal to the field name, so a field called `url` or
///   `token` is left alone whenever that key is excluded. Tuple fields are
///   visited positionally. Scalars and `PhantomData` pass through unchanged.
///
/// - `#[rewrite(skip)]`: explicit passthrough. The field is not walked at all.
///   Use this for foreign types that don't implement `RewritableContainer`.
///   Equivalent to wrapping the field type in `Verbatim<T>`, but without
///   changing the type signature.
///
/// - `#[rewrite(rename = "key")]`: walk the field as the value under `key`
///   rather than the field name. Match this to the serialized name when the
///   type is renamed for the wire.
///
/// Unions are rejected at compile time.
#[proc_macro_derive(Rewritable, attributes(rewrite))]
pub fn derive_rewritable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the mathdelim crate root.
///
/// Handles crate renaming (e.g., `md = { package = "mathdelim", ... }`)
/// and internal usage (when the derive is used inside mathdelim itself).
fn crate_root() -> TokenStream {
    match crate_name("mathdelim") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::mathdelim },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item = format_ident!("{}", item);
    quote! { #root::#item }
}

/// Name of the traversal state parameter in generated code. Prefixed so it
/// cannot be shadowed by a field binding.
fn walker_ident() -> Ident {
    format_ident!("__mathdelim_walker")
}

struct DeriveOutput {
    rewrite_body: TokenStream,
    used_generics: Vec<Ident>,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    reject_container_attributes(&attrs)?;

    let output = match data {
        Data::Struct(data) => derive_struct(data, &generics)?,
        Data::Enum(data) => derive_enum(data, &generics)?,
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Rewritable` cannot be derived for unions",
            ));
        }
    };

    let crate_root = crate_root();
    let walker = walker_ident();
    let bounded = add_container_bounds(generics, &output.used_generics);
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();
    let rewrite_body = output.rewrite_body;

    Ok(quote! {
        impl #impl_generics #crate_root::RewritableContainer for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn rewrite_with(self, #walker: &mut #crate_root::Walker<'_>) -> Self {
                #rewrite_body
            }
        }
    })
}
