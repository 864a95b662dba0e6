//! Delimiter rewriting and structural traversal.
//!
//! This module provides the machinery for rewriting:
//!
//! - **`scanner`**: locating `$...$` spans (`SpanScanner`, `Span`)
//! - **`text`**: the pure span-to-bracket rewrite
//! - **`traits`**: core traits (`RewritableContainer`, `Rewritable`)
//! - **`walker`**: per-traversal state (`Walker`) and results (`Rewritten`)
//! - **`value`**: the closed value tree (`StructuredValue`, `Scalar`)
//! - **`containers`**: `RewritableContainer` implementations for std types
//! - **`json`**: `serde_json::Value` traversal and conversions
//! - **`wrappers`**: the `Verbatim` escape hatch
//!
//! Thresholds live in `crate::policy`.

mod containers;
#[cfg(feature = "json")]
mod json;
mod scanner;
mod text;
mod traits;
mod value;
mod walker;
mod wrappers;

pub use scanner::{Span, SpanScanner};
pub(crate) use text::rewrite_inline;
pub use traits::{Rewritable, RewritableContainer};
pub use value::{Scalar, StructuredValue};
pub use walker::{Rewritten, Walker};
pub use wrappers::Verbatim;
