use crate::normalize::KeyNormalizing;

use std::collections::BTreeMap;
use std::hash::{BuildHasher, Hash};

/// An associative container with unique keys and a stable iteration order.
pub trait KeyedContainer {
    type Key: Eq + Hash + Clone;
    type Value;

    /// The container's key normalization hook, if it has one.
    /// Containers that store keys as given keep the default of `None`.
    fn key_normalizer(&self) -> Option<&dyn KeyNormalizing<Self::Key>> {
        None
    }

    /// All keys in iteration order.
    fn own_keys(&self) -> Vec<Self::Key>;

    /// New container with the entries whose key passes `keep`, in the same
    /// relative order.
    fn filtered<F>(&self, keep: F) -> Self
    where
        Self: Sized,
        Self::Value: Clone,
        F: FnMut(&Self::Key) -> bool;

    /// Drops every entry whose key does not pass `keep`, in place.
    fn retain_keys<F>(&mut self, keep: F)
    where
        F: FnMut(&Self::Key) -> bool;
}

impl<K, V, S> KeyedContainer for indexmap::IndexMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Key = K;
    type Value = V;

    fn own_keys(&self) -> Vec<K> {
        self.keys().cloned().collect()
    }

    fn filtered<F>(&self, mut keep: F) -> Self
    where
        V: Clone,
        F: FnMut(&K) -> bool,
    {
        let mut result = indexmap::IndexMap::with_hasher(self.hasher().clone());
        for (k, v) in self.iter().filter(|(k, _)| keep(k)) {
            result.insert(k.clone(), v.clone());
        }
        result
    }

    fn retain_keys<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K) -> bool,
    {
        // retain keeps the order of the surviving entries, unlike swap_remove
        self.retain(|k, _| keep(k));
    }
}

impl<K, V> KeyedContainer for BTreeMap<K, V>
where
    K: Ord + Eq + Hash + Clone,
{
    type Key = K;
    type Value = V;

    fn own_keys(&self) -> Vec<K> {
        self.keys().cloned().collect()
    }

    fn filtered<F>(&self, mut keep: F) -> Self
    where
        V: Clone,
        F: FnMut(&K) -> bool,
    {
        self.iter()
            .filter(|(k, _)| keep(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn retain_keys<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K) -> bool,
    {
        self.retain(|k, _| keep(k));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::alias::Map;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filtered_keeps_order() {
        let map: Map<&str, i32> = [("c", 3), ("a", 1), ("b", 2)].into_iter().collect();
        let result = map.filtered(|k| *k != "a");
        assert_eq!(result.own_keys(), vec!["c", "b"]);
        // source untouched
        assert_eq!(map.own_keys(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_retain_keys_keeps_order() {
        let mut map: Map<&str, i32> =
            [("d", 4), ("c", 3), ("a", 1), ("b", 2)].into_iter().collect();
        map.retain_keys(|k| *k == "d" || *k == "b");
        assert_eq!(map.own_keys(), vec!["d", "b"]);
        assert_eq!(map["b"], 2);
    }

    #[test]
    fn test_btree_map() {
        let mut map: BTreeMap<u32, &str> = [(3, "c"), (1, "a"), (2, "b")].into_iter().collect();
        assert_eq!(map.own_keys(), vec![1, 2, 3]);
        assert_eq!(map.filtered(|k| k % 2 == 1).own_keys(), vec![1, 3]);

        map.retain_keys(|k| *k == 2);
        assert_eq!(map.into_iter().collect::<Vec<_>>(), vec![(2, "b")]);
    }

    #[test]
    fn test_no_normalizer_by_default() {
        let map: Map<String, ()> = Map::new();
        assert!(map.key_normalizer().is_none());
        let btree: BTreeMap<String, ()> = BTreeMap::new();
        assert!(btree.key_normalizer().is_none());
    }
}
