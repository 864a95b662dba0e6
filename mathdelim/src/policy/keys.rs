//! Mapping keys whose values are copied verbatim during traversal.

/// Keys excluded from rewriting unless a policy says otherwise.
///
/// These fields usually carry links or identifiers where a stray `$` is part
/// of the data, not math.
pub const DEFAULT_EXCLUDED_KEYS: [&str; 5] = ["url", "href", "src", "id", "token"];

/// A set of mapping keys whose values are passed through unmodified.
///
/// Matching is exact and case-sensitive. The set also applies to field names
/// of types deriving `Rewritable`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct ExcludedKeys {
    keys: Vec<String>,
}

impl ExcludedKeys {
    /// Builds a set from arbitrary keys, dropping duplicates.
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        keys.into_iter()
            .fold(Self::empty(), |set, key| set.with_key(key))
    }

    /// An empty set: every key is eligible for rewriting.
    #[must_use]
    pub fn empty() -> Self {
        Self { keys: Vec::new() }
    }

    /// Adds a key to the set.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        if !self.contains(&key) {
            self.keys.push(key);
        }
        self
    }

    /// Returns `true` when values under `key` must not be rewritten.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|excluded| excluded == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for ExcludedKeys {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_KEYS)
    }
}
