//! Wrapper for values that must never be rewritten.

use std::ops::{Deref, DerefMut};

use super::{traits::RewritableContainer, walker::Walker};

/// Passes the wrapped value through traversal untouched.
///
/// Use this for fields whose type does not implement
/// [`RewritableContainer`], or for text that must keep its dollar signs.
/// It is equivalent to `#[rewrite(skip)]` on a derived field, but visible
/// in the type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct Verbatim<T>(pub T);

impl<T> Verbatim<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Verbatim<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Verbatim<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Verbatim<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> RewritableContainer for Verbatim<T> {
    fn rewrite_with(self, _walker: &mut Walker<'_>) -> Self {
        self
    }
}
