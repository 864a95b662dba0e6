//! Core traits for structural traversal.
//!
//! - [`RewritableContainer`]: types that participate in traversal
//! - [`Rewritable`]: user-facing `.rewrite()` method

use super::walker::{Rewritten, Walker};

// =============================================================================
// RewritableContainer - Types that can be walked for rewritable text
// =============================================================================

/// A type that participates in structural traversal.
///
/// Implemented for [`crate::StructuredValue`], `serde_json::Value`, strings,
/// scalars (passthrough), std containers, and every type deriving
/// `Rewritable`. String leaves go through [`Walker::rewrite_string`];
/// nested values go through [`Walker::descend`] or [`Walker::entry`] so the
/// depth bound and the excluded keys apply.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `RewritableContainer`",
    label = "this type cannot be walked for inline math",
    note = "use `#[derive(Rewritable)]` on the type definition",
    note = "or mark the field with `#[rewrite(skip)]` / wrap it in `Verbatim<T>`"
)]
pub trait RewritableContainer: Sized {
    /// Rewrites the string leaves of `self` using `walker`.
    #[must_use]
    fn rewrite_with(self, walker: &mut Walker<'_>) -> Self;
}

// =============================================================================
// Rewritable - User-facing .rewrite() method
// =============================================================================

/// Public entrypoint for rewriting traversable types.
///
/// Blanket-implemented for all [`RewritableContainer`] types. Uses the
/// default policy and the process-wide statistics.
pub trait Rewritable: RewritableContainer {
    /// Rewrites the value, reporting whether any string leaf changed.
    #[must_use]
    fn rewrite(self) -> Rewritten<Self> {
        crate::rewrite_structure(self)
    }
}

impl<T> Rewritable for T where T: RewritableContainer {}
