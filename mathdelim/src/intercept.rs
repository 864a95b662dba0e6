//! Helpers for the layer that intercepts network responses.
//!
//! The interception layer owns the response objects. This module only makes
//! the two decisions it needs from the pipeline:
//!
//! - which path a body takes, from its `content-type` ([`BodyKind`]);
//! - for JSON bodies, the rewritten bytes, or `None` when the original body
//!   should be served as is ([`rewrite_json_body`]).
//!
//! Streamed bodies go through [`crate::Rewriter::rewrite_stream`].

/// How a response body should be handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// Parse as JSON and rewrite the value tree.
    Json,
    /// Rewrite chunk by chunk as text.
    Stream,
    /// Leave untouched.
    Passthrough,
}

impl BodyKind {
    /// Routes on a raw `content-type` header value.
    ///
    /// Matching is a case-sensitive substring test; charset and other
    /// parameters are not parsed.
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.contains("application/json") {
            Self::Json
        } else if content_type.contains("text/event-stream") || content_type.contains("text/plain")
        {
            Self::Stream
        } else {
            Self::Passthrough
        }
    }

    pub fn is_rewritable(self) -> bool {
        !matches!(self, Self::Passthrough)
    }
}

/// Rewrites a JSON response body.
///
/// Returns the re-serialized body when at least one string changed, and
/// `None` when the original bytes should be served: nothing changed, the body
/// is not valid JSON, or serialization failed. Failures are counted as errors
/// on the rewriter's statistics.
#[cfg(feature = "json")]
pub fn rewrite_json_body(rewriter: &crate::Rewriter, body: &[u8]) -> Option<Vec<u8>> {
    let value: serde_json::Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(err) => {
            rewriter.stats().record_error();
            tracing::warn!(error = %err, "response body is not valid JSON; serving it unchanged");
            return None;
        }
    };

    let rewritten = rewriter.rewrite_structure(value).into_modified()?;
    match serde_json::to_vec(&rewritten) {
        Ok(bytes) => {
            tracing::debug!(len = bytes.len(), "rewrote JSON response body");
            Some(bytes)
        }
        Err(err) => {
            rewriter.stats().record_error();
            tracing::warn!(error = %err, "failed to serialize rewritten body; serving it unchanged");
            None
        }
    }
}
