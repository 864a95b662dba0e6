//! Per-invocation traversal state.
//!
//! A [`Walker`] lives for exactly one top-level traversal. It owns the depth
//! counter and the outcome flag, so concurrent traversals never share either.

use std::borrow::Cow;

use super::traits::RewritableContainer;
use crate::rewriter::Rewriter;

/// The result of a traversal: the rewritten value and whether any string
/// leaf differs from the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rewritten<T> {
    pub value: T,
    pub modified: bool,
}

impl<T> Rewritten<T> {
    pub fn into_parts(self) -> (T, bool) {
        (self.value, self.modified)
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// Returns the value only when something was rewritten.
    pub fn into_modified(self) -> Option<T> {
        self.modified.then_some(self.value)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Rewritten<U> {
        Rewritten {
            value: f(self.value),
            modified: self.modified,
        }
    }
}

/// Traversal state handed to [`RewritableContainer::rewrite_with`].
#[derive(Debug)]
pub struct Walker<'r> {
    rewriter: &'r Rewriter,
    depth: usize,
    modified: bool,
}

impl<'r> Walker<'r> {
    pub(crate) fn new(rewriter: &'r Rewriter) -> Self {
        Self {
            rewriter,
            depth: 0,
            modified: false,
        }
    }

    /// Runs a full traversal of `value` from depth zero.
    pub(crate) fn run<T: RewritableContainer>(mut self, value: T) -> Rewritten<T> {
        let value = value.rewrite_with(&mut self);
        Rewritten {
            value,
            modified: self.modified,
        }
    }

    /// Current nesting depth. The top-level value sits at depth zero.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether any string leaf has changed so far.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Rewrites one string leaf.
    pub fn rewrite_string(&mut self, text: String) -> String {
        let rewritten = match self.rewriter.rewrite_leaf(&text) {
            Cow::Borrowed(_) => None,
            Cow::Owned(rewritten) => Some(rewritten),
        };
        match rewritten {
            Some(rewritten) => {
                self.modified = true;
                rewritten
            }
            None => text,
        }
    }

    /// Rewrites one borrowed-or-owned string leaf.
    pub fn rewrite_cow<'a>(&mut self, text: Cow<'a, str>) -> Cow<'a, str> {
        let rewritten = match self.rewriter.rewrite_leaf(&text) {
            Cow::Borrowed(_) => None,
            Cow::Owned(rewritten) => Some(rewritten),
        };
        match rewritten {
            Some(rewritten) => {
                self.modified = true;
                Cow::Owned(rewritten)
            }
            None => text,
        }
    }

    /// Walks a nested value one level deeper.
    ///
    /// Past the policy's depth bound the value is returned untouched.
    pub fn descend<T: RewritableContainer>(&mut self, value: T) -> T {
        if self.depth >= self.rewriter.policy().max_depth() {
            return value;
        }
        self.depth += 1;
        let value = value.rewrite_with(self);
        self.depth -= 1;
        value
    }

    /// Walks the value stored under `key`, one level deeper.
    ///
    /// Values under excluded keys are returned untouched.
    pub fn entry<T: RewritableContainer>(&mut self, key: &str, value: T) -> T {
        if self.rewriter.policy().excluded_keys().contains(key) {
            return value;
        }
        self.descend(value)
    }
}
