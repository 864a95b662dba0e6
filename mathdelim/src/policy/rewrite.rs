//! Thresholds for delimiter rewriting and traversal.
//!
//! [`RewritePolicy`] gathers every heuristic the pipeline relies on. The
//! defaults reproduce the behavior downstream renderers expect; each value
//! can be tuned with the `with_*` constructors or loaded from configuration.

use super::keys::ExcludedKeys;

/// Opening sequence written in place of an inline `$`.
pub const INLINE_OPEN: &str = r"\(";

/// Closing sequence written in place of an inline `$`.
pub const INLINE_CLOSE: &str = r"\)";

/// Spans with more whitespace-separated words than this are left alone.
pub const DEFAULT_MAX_WORDS: usize = 15;

/// Strings longer than this many characters are left alone.
pub const DEFAULT_MAX_CHARS: usize = 10_000;

/// Values nested deeper than this are returned unchanged.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Upper bound, in bytes, on text held back between stream chunks.
pub const DEFAULT_STREAM_WINDOW: usize = 512;

const URL_MARKERS: [&str; 2] = ["http://", "https://"];

/// Configuration for the delimiter rewriter, traversal and stream rewriter.
///
/// Use [`RewritePolicy::default`] and the `with_*` constructors to create
/// instances. With the `json` feature the policy can also be deserialized;
/// missing fields take their defaults:
///
/// ```rust
/// # #[cfg(feature = "json")] {
/// use mathdelim::RewritePolicy;
///
/// let policy: RewritePolicy =
///     serde_json::from_str(r#"{ "max-words": 4, "skip-urls": false }"#).unwrap();
/// assert_eq!(policy.max_words(), 4);
/// assert!(!policy.skip_urls());
/// assert_eq!(policy.max_depth(), 10);
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "json", serde(default, rename_all = "kebab-case"))]
pub struct RewritePolicy {
    /// Word cutoff for a single span.
    max_words: usize,
    /// Length cutoff for a whole string, in Unicode scalar values.
    max_chars: usize,
    /// Skip any string that contains `http://` or `https://`.
    skip_urls: bool,
    /// Depth bound for structural traversal.
    max_depth: usize,
    /// Keys whose values are never rewritten.
    excluded_keys: ExcludedKeys,
    /// Carry window for the stream rewriter, in bytes. Zero disables carrying.
    stream_window: usize,
}

impl Default for RewritePolicy {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            max_chars: DEFAULT_MAX_CHARS,
            skip_urls: true,
            max_depth: DEFAULT_MAX_DEPTH,
            excluded_keys: ExcludedKeys::default(),
            stream_window: DEFAULT_STREAM_WINDOW,
        }
    }
}

impl RewritePolicy {
    /// Sets the maximum number of words a span may hold and still convert.
    #[must_use]
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Sets the maximum string length, in characters, that is still scanned.
    #[must_use]
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Enables or disables the URL guard.
    #[must_use]
    pub fn with_skip_urls(mut self, skip_urls: bool) -> Self {
        self.skip_urls = skip_urls;
        self
    }

    /// Sets the traversal depth bound.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Replaces the excluded-key set.
    #[must_use]
    pub fn with_excluded_keys(mut self, excluded_keys: ExcludedKeys) -> Self {
        self.excluded_keys = excluded_keys;
        self
    }

    /// Sets the stream carry window in bytes.
    #[must_use]
    pub fn with_stream_window(mut self, stream_window: usize) -> Self {
        self.stream_window = stream_window;
        self
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn skip_urls(&self) -> bool {
        self.skip_urls
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn excluded_keys(&self) -> &ExcludedKeys {
        &self.excluded_keys
    }

    pub fn stream_window(&self) -> usize {
        self.stream_window
    }

    /// Decides whether `text` is worth scanning at all.
    ///
    /// The checks run cheapest first: no `$`, already converted, URL-bearing,
    /// then the length cutoff. A string holding both a URL and real math is
    /// skipped as a whole.
    pub(crate) fn admits(&self, text: &str) -> bool {
        if !text.contains('$') {
            return false;
        }
        if text.contains(INLINE_OPEN) {
            return false;
        }
        if self.skip_urls && URL_MARKERS.iter().any(|marker| text.contains(marker)) {
            return false;
        }
        // Byte length bounds the character count from above.
        if text.len() > self.max_chars && text.chars().count() > self.max_chars {
            return false;
        }
        true
    }

    /// Decides whether the inner content of a span reads like inline math.
    pub(crate) fn accepts_span(&self, inner: &str) -> bool {
        inner.split_whitespace().count() <= self.max_words
    }
}
