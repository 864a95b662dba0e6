//! Rewrite policy: the thresholds and key sets that steer rewriting.
//!
//! This module provides:
//!
//! - **Rewrite policy** (`rewrite`): [`RewritePolicy`], the configurable limits
//!   used by the delimiter rewriter (word cutoff, length cutoff, URL guard),
//!   the traversal depth bound and the streaming carry window.
//!
//! - **Excluded keys** (`keys`): [`ExcludedKeys`], the mapping keys (and derived
//!   struct field names) whose values are never rewritten.
//!
//! # Example
//!
//! ```rust
//! use mathdelim::{ExcludedKeys, RewritePolicy};
//!
//! let policy = RewritePolicy::default()
//!     .with_max_words(8)
//!     .with_excluded_keys(ExcludedKeys::default().with_key("slug"));
//!
//! assert_eq!(policy.max_words(), 8);
//! assert!(policy.excluded_keys().contains("slug"));
//! assert!(policy.excluded_keys().contains("id"));
//! ```

pub mod keys;
pub mod rewrite;

pub use keys::{DEFAULT_EXCLUDED_KEYS, ExcludedKeys};
pub use rewrite::{
    DEFAULT_MAX_CHARS, DEFAULT_MAX_DEPTH, DEFAULT_MAX_WORDS, DEFAULT_STREAM_WINDOW, INLINE_CLOSE,
    INLINE_OPEN, RewritePolicy,
};
