//! `RewritableContainer` implementations for standard library types.
//!
//! Sequences (`Vec`, `VecDeque`) walk each element one level deeper. Maps
//! walk each value one level deeper and honour the excluded keys; keys are
//! never rewritten. Transparent wrappers (`Option`, `Box`, `Arc`, `Rc`) do
//! not count as a nesting level.

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap, VecDeque},
    hash::{BuildHasher, Hash},
    marker::PhantomData,
    rc::Rc,
    sync::Arc,
};

use indexmap::IndexMap;

use super::{traits::RewritableContainer, walker::Walker};

// =============================================================================
// Passthrough implementations (scalars and primitives)
// =============================================================================

macro_rules! impl_rewritable_container_passthrough {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RewritableContainer for $ty {
                fn rewrite_with(self, _walker: &mut Walker<'_>) -> Self {
                    self
                }
            }
        )*
    };
}

impl_rewritable_container_passthrough!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, (),
);

impl<T> RewritableContainer for PhantomData<T> {
    fn rewrite_with(self, _walker: &mut Walker<'_>) -> Self {
        self
    }
}

// =============================================================================
// String leaves
// =============================================================================

impl RewritableContainer for String {
    fn rewrite_with(self, walker: &mut Walker<'_>) -> Self {
        walker.rewrite_string(self)
    }
}

impl RewritableContainer for Cow<'_, str> {
    fn rewrite_with(self, walker: &mut Walker<'_>) -> Self {
        walker.rewrite_cow(self)
    }
}

// =============================================================================
// Transparent wrappers
// =============================================================================

impl<T> RewritableContainer for Option<T>
where
    T: RewritableContainer,
{
    fn rewrite_with(self, walker: &mut Walker<'_>) -> Self {
        self.map(|value| value.rewrite_with(walker))
    }
}

impl<T> RewritableContainer for Box<T>
where
    T: RewritableContainer,
{
    fn rewrite_with(self, walker: &mut Walker<'_>) -> Self {
        Box::new((*self).rewrite_with(walker))
    }
}

impl<T> RewritableContainer for Arc<T>
where
    T: RewritableContainer + Clone,
{
    fn rewrite_with(self, walker: &mut Walker<'_>) -> Self {
        Arc::new(Arc::unwrap_or_clone(self).rewrite_with(walker))
    }
}

impl<T> RewritableContainer for Rc<T>
where
    T: RewritableContainer + Clone,
{
    fn rewrite_with(self, walker: &mut Walker<'_>) -> Self {
        Rc::new(Rc::unwrap_or_clone(self).rewrite_with(walker))
    }
}

// =============================================================================
// Sequences
// =============================================================================

impl<T> RewritableContainer for Vec<T>
where
    T: RewritableContainer,
{
    fn rewrite_with(self, walker: &mut Walker<'_>) -> Self {
        self.into_iter()
            .map(|value| walker.descend(value))
            .collect()
    }
}

impl<T> RewritableContainer for VecDeque<T>
where
    T: RewritableContainer,
{
    fn rewrite_with(self, walker: &mut Walker<'_>) -> Self {
        self.into_iter()
            .map(|value| walker.descend(value))
            .collect()
    }
}

// =============================================================================
// Maps (values only, keys unchanged)
// =============================================================================

impl<K, V> RewritableContainer for BTreeMap<K, V>
where
    K: AsRef<str> + Ord,
    V: RewritableContainer,
{
    fn rewrite_with(self, walker: &mut Walker<'_>) -> Self {
        self.into_iter()
            .map(|(key, value)| {
                let value = walker.entry(key.as_ref(), value);
                (key, value)
            })
            .collect()
    }
}

impl<K, V, S> RewritableContainer for HashMap<K, V, S>
where
    K: AsRef<str> + Hash + Eq,
    V: RewritableContainer,
    S: BuildHasher + Clone,
{
    fn rewrite_with(self, walker: &mut Walker<'_>) -> Self {
        let mut result = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        result.extend(self.into_iter().map(|(key, value)| {
            let value = walker.entry(key.as_ref(), value);
            (key, value)
        }));
        result
    }
}

impl<K, V, S> RewritableContainer for IndexMap<K, V, S>
where
    K: AsRef<str> + Hash + Eq,
    V: RewritableContainer,
    S: BuildHasher + Clone,
{
    fn rewrite_with(self, walker: &mut Walker<'_>) -> Self {
        let mut result = IndexMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        result.extend(self.into_iter().map(|(key, value)| {
            let value = walker.entry(key.as_ref(), value);
            (key, value)
        }));
        result
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::{
        collections::{BTreeMap, HashMap, VecDeque},
        rc::Rc,
        sync::Arc,
    };

    use indexmap::IndexMap;

    use crate::{RewritePolicy, Rewriter, Stats};

    fn rewriter() -> Rewriter {
        Rewriter::new(RewritePolicy::default()).with_stats(Arc::new(Stats::new()))
    }

    #[test]
    fn scalars_pass_through() {
        let rewriter = rewriter();
        assert_eq!(rewriter.rewrite_structure(42u64).value, 42);
        assert!(rewriter.rewrite_structure(true).value);
        assert!(!rewriter.rewrite_structure(1.5f64).modified);
    }

    #[test]
    fn string_leaf_is_rewritten() {
        let result = rewriter().rewrite_structure("x is $x$".to_string());
        assert_eq!(result.value, r"x is \(x\)");
        assert!(result.modified);
    }

    #[test]
    fn cow_leaf_stays_borrowed_when_unchanged() {
        let result = rewriter().rewrite_structure(std::borrow::Cow::Borrowed("plain"));
        assert!(matches!(result.value, std::borrow::Cow::Borrowed("plain")));
        assert!(!result.modified);
    }

    #[test]
    fn option_and_box_are_transparent() {
        let rewriter = rewriter().with_policy(RewritePolicy::default().with_max_depth(0));
        let result = rewriter.rewrite_structure(Some(Box::new("$a$".to_string())));
        assert_eq!(result.value.as_deref().map(String::as_str), Some(r"\(a\)"));
    }

    #[test]
    fn shared_pointers_are_rewritten() {
        let rewriter = rewriter();
        let arc = rewriter.rewrite_structure(Arc::new("$a$".to_string())).value;
        assert_eq!(arc.as_str(), r"\(a\)");
        let rc = rewriter.rewrite_structure(Rc::new("$b$".to_string())).value;
        assert_eq!(rc.as_str(), r"\(b\)");
    }

    #[test]
    fn sequences_keep_length_and_order() {
        let rewriter = rewriter();
        let values = vec!["$a$".to_string(), "b".to_string(), "$c$".to_string()];
        let result = rewriter.rewrite_structure(values).value;
        assert_eq!(result, vec![r"\(a\)", "b", r"\(c\)"]);

        let deque: VecDeque<String> = VecDeque::from(vec!["$d$".to_string()]);
        assert_eq!(rewriter.rewrite_structure(deque).value[0], r"\(d\)");
    }

    #[test]
    fn maps_skip_excluded_keys() {
        let rewriter = rewriter();

        let mut btree = BTreeMap::new();
        btree.insert("id".to_string(), "$x$".to_string());
        btree.insert("text".to_string(), "$x$".to_string());
        let btree = rewriter.rewrite_structure(btree).value;
        assert_eq!(btree["id"], "$x$");
        assert_eq!(btree["text"], r"\(x\)");

        let mut hash: HashMap<&str, String> = HashMap::new();
        hash.insert("href", "$x$".to_string());
        hash.insert("body", "$x$".to_string());
        let hash = rewriter.rewrite_structure(hash).value;
        assert_eq!(hash["href"], "$x$");
        assert_eq!(hash["body"], r"\(x\)");
    }

    #[test]
    fn index_map_keeps_key_order() {
        let mut map = IndexMap::new();
        map.insert("z".to_string(), "$1$".to_string());
        map.insert("a".to_string(), "$2$".to_string());
        map.insert("m".to_string(), "3".to_string());
        let result = rewriter().rewrite_structure(map).value;
        let keys: Vec<_> = result.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
        assert_eq!(result["a"], r"\(2\)");
    }
}
