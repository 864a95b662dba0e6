//! The entrypoints tying policy, rewriting and statistics together.

use std::{borrow::Cow, sync::Arc};

use crate::{
    policy::RewritePolicy,
    rewrite::{RewritableContainer, Rewritten, Walker, rewrite_inline},
    stats::Stats,
};

/// A configured rewriter.
///
/// Cheap to clone. Every operation is independent: the outcome flag of a
/// structural rewrite belongs to that call alone, and only the [`Stats`]
/// counters are shared between calls.
#[derive(Clone, Debug)]
pub struct Rewriter {
    policy: RewritePolicy,
    stats: Arc<Stats>,
}

impl Default for Rewriter {
    fn default() -> Self {
        Self::new(RewritePolicy::default())
    }
}

impl Rewriter {
    /// Creates a rewriter reporting to the process-wide [`Stats`].
    pub fn new(policy: RewritePolicy) -> Self {
        Self {
            policy,
            stats: Stats::global(),
        }
    }

    /// Reports to `stats` instead of the process-wide counters.
    #[must_use]
    pub fn with_stats(mut self, stats: Arc<Stats>) -> Self {
        self.stats = stats;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: RewritePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &RewritePolicy {
        &self.policy
    }

    pub fn stats(&self) -> &Arc<Stats> {
        &self.stats
    }

    /// Converts eligible `$...$` spans of `text` to `\(...\)`.
    ///
    /// Display math (`$$...$$`), URL-bearing text, already-converted text,
    /// very long text and wordy spans are left as they are. Never fails.
    pub fn rewrite_text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let rewritten = rewrite_inline(&self.policy, text);
        if let Cow::Owned(_) = rewritten {
            self.stats.record_modified();
            tracing::trace!(len = text.len(), "rewrote inline math delimiters");
        }
        rewritten
    }

    /// Rewrites a string leaf met during traversal or streaming.
    pub(crate) fn rewrite_leaf<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.stats.record_processed();
        self.rewrite_text(text)
    }

    /// Rewrites every eligible string leaf of `value`.
    ///
    /// Keys, sequence lengths, ordering and non-string leaves are preserved.
    /// Values under excluded keys and values nested past the depth bound are
    /// returned unchanged.
    pub fn rewrite_structure<T: RewritableContainer>(&self, value: T) -> Rewritten<T> {
        Walker::new(self).run(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StatsSnapshot;

    fn counted() -> (Rewriter, Arc<Stats>) {
        let stats = Arc::new(Stats::new());
        (Rewriter::default().with_stats(Arc::clone(&stats)), stats)
    }

    #[test]
    fn rewrite_text_counts_modified_once_per_string() {
        let (rewriter, stats) = counted();
        assert_eq!(rewriter.rewrite_text("$a$ $b$"), r"\(a\) \(b\)");
        assert_eq!(
            stats.snapshot(),
            StatsSnapshot {
                processed: 0,
                modified: 1,
                errors: 0,
            }
        );
    }

    #[test]
    fn unchanged_text_is_not_counted_as_modified() {
        let (rewriter, stats) = counted();
        assert_eq!(rewriter.rewrite_text("$$x$$"), "$$x$$");
        assert_eq!(stats.snapshot().modified, 0);
    }

    #[test]
    fn traversal_counts_every_string_leaf() {
        let (rewriter, stats) = counted();
        let value = vec!["$a$".to_string(), "b".to_string(), "c".to_string()];
        let result = rewriter.rewrite_structure(value);
        assert!(result.modified);
        assert_eq!(stats.snapshot().processed, 3);
        assert_eq!(stats.snapshot().modified, 1);
    }

    #[test]
    fn outcome_flag_is_per_call() {
        let (rewriter, _) = counted();
        assert!(rewriter.rewrite_structure("$a$".to_string()).modified);
        assert!(!rewriter.rewrite_structure("a".to_string()).modified);
    }
}
