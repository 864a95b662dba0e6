//! A closed, JSON-like value tree.
//!
//! [`StructuredValue`] is the host-independent shape of a response payload:
//! strings, ordered sequences, key-ordered mappings, opaque binary data and
//! other scalars. Traversal matches on it exhaustively, so adding a variant
//! forces a decision about how it is walked.

use indexmap::IndexMap;

use super::{traits::RewritableContainer, walker::Walker};

/// A scalar that is never rewritten.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
}

/// A JSON-like value tree.
#[derive(Clone, Debug, PartialEq)]
pub enum StructuredValue {
    /// Text; the only variant that can be rewritten.
    String(String),
    /// An ordered sequence.
    Sequence(Vec<StructuredValue>),
    /// A mapping that preserves key insertion order.
    Mapping(IndexMap<String, StructuredValue>),
    /// Binary data (buffers, blobs, file handles). Never inspected.
    Opaque(Vec<u8>),
    /// Numbers, booleans and null.
    Scalar(Scalar),
}

impl StructuredValue {
    /// Wraps binary data so traversal passes it through untouched.
    pub fn opaque(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Opaque(bytes.into())
    }

    pub fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[StructuredValue]> {
        match self {
            Self::Sequence(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&IndexMap<String, StructuredValue>> {
        match self {
            Self::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up `key` when `self` is a mapping.
    pub fn get(&self, key: &str) -> Option<&StructuredValue> {
        self.as_mapping().and_then(|entries| entries.get(key))
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque(_))
    }
}

impl RewritableContainer for StructuredValue {
    fn rewrite_with(self, walker: &mut Walker<'_>) -> Self {
        match self {
            Self::String(text) => Self::String(walker.rewrite_string(text)),
            Self::Sequence(items) => Self::Sequence(items.rewrite_with(walker)),
            Self::Mapping(entries) => Self::Mapping(entries.rewrite_with(walker)),
            Self::Opaque(_) | Self::Scalar(_) => self,
        }
    }
}

impl From<String> for StructuredValue {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<&str> for StructuredValue {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<bool> for StructuredValue {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for StructuredValue {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Int(value))
    }
}

impl From<u64> for StructuredValue {
    fn from(value: u64) -> Self {
        Self::Scalar(Scalar::UInt(value))
    }
}

impl From<f64> for StructuredValue {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Float(value))
    }
}

impl From<Scalar> for StructuredValue {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<Vec<StructuredValue>> for StructuredValue {
    fn from(items: Vec<StructuredValue>) -> Self {
        Self::Sequence(items)
    }
}

impl From<IndexMap<String, StructuredValue>> for StructuredValue {
    fn from(entries: IndexMap<String, StructuredValue>) -> Self {
        Self::Mapping(entries)
    }
}

impl<K, V> FromIterator<(K, V)> for StructuredValue
where
    K: Into<String>,
    V: Into<StructuredValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Mapping(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
