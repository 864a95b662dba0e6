//! Rewriting of inline math delimiters in response payloads.
//!
//! This crate converts `$...$` inline math into `\(...\)` so renderers that
//! only recognize the bracket form pick it up, while leaving `$$...$$`
//! display math, prices, links and identifiers alone.
//!
//! It provides three pure operations:
//!
//! - [`rewrite_text`]: the delimiter rewrite on a single string;
//! - [`rewrite_structure`]: the rewrite applied to every eligible string
//!   leaf of a value tree ([`StructuredValue`], `serde_json::Value`, std
//!   containers, or any type deriving [`Rewritable`]), reporting whether
//!   anything changed;
//! - [`rewrite_stream`]: the rewrite applied to a stream of UTF-8 chunks.
//!
//! What it does not do:
//! - parse or validate LaTeX
//! - hook into an HTTP client (see [`intercept`] for the routing helpers)
//!
//! Heuristic thresholds live in [`RewritePolicy`]; diagnostics in [`Stats`].
//!
//! ```rust
//! use mathdelim::rewrite_text;
//!
//! assert_eq!(rewrite_text("area $\\pi r^2$"), r"area \(\pi r^2\)");
//! assert_eq!(rewrite_text("$$E = mc^2$$"), "$$E = mc^2$$");
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
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
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else,
    clippy::return_self_not_must_use
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

use std::{borrow::Cow, sync::OnceLock};

pub use mathdelim_derive::Rewritable;

#[allow(unused_extern_crates)]
extern crate self as mathdelim;

// Module declarations
mod error;
pub mod intercept;
pub mod policy;
mod rewrite;
mod rewriter;
mod stats;
#[cfg(feature = "stream")]
pub mod stream;

pub use error::{StreamError, TraversalError};
pub use intercept::BodyKind;
#[cfg(feature = "json")]
pub use intercept::rewrite_json_body;
pub use policy::{
    DEFAULT_EXCLUDED_KEYS, DEFAULT_MAX_CHARS, DEFAULT_MAX_DEPTH, DEFAULT_MAX_WORDS,
    DEFAULT_STREAM_WINDOW, ExcludedKeys, INLINE_CLOSE, INLINE_OPEN, RewritePolicy,
};
pub use rewrite::{
    Rewritable, RewritableContainer, Rewritten, Scalar, Span, SpanScanner, StructuredValue,
    Verbatim, Walker,
};
pub use rewriter::Rewriter;
pub use stats::{Stats, StatsSnapshot};
#[cfg(feature = "stream")]
pub use stream::RewriteStream;

/// The rewriter behind the free functions: default policy, global stats.
fn shared() -> &'static Rewriter {
    static SHARED: OnceLock<Rewriter> = OnceLock::new();
    SHARED.get_or_init(Rewriter::default)
}

/// Converts eligible `$...$` spans to `\(...\)` with the default policy.
///
/// See [`Rewriter::rewrite_text`].
pub fn rewrite_text(text: &str) -> Cow<'_, str> {
    shared().rewrite_text(text)
}

/// Rewrites every eligible string leaf of `value` with the default policy.
///
/// See [`Rewriter::rewrite_structure`].
pub fn rewrite_structure<T: RewritableContainer>(value: T) -> Rewritten<T> {
    shared().rewrite_structure(value)
}

/// Wraps a chunk source so every chunk is rewritten with the default policy.
///
/// See [`Rewriter::rewrite_stream`].
#[cfg(feature = "stream")]
pub fn rewrite_stream<S, E>(source: S) -> RewriteStream<S>
where
    S: futures_util::stream::Stream<Item = Result<Vec<u8>, E>> + Unpin,
{
    shared().rewrite_stream(source)
}
