use crate::alias::Map;

/// `{a: 1, b: 2, c: 3}`
pub fn abc() -> Map<&'static str, i32> {
    [("a", 1), ("b", 2), ("c", 3)].into_iter().collect()
}

/// `{a: 1, ..., f: 6}` inserted out of alphabetical order
pub fn alphabet() -> Map<&'static str, i32> {
    [("d", 4), ("a", 1), ("f", 6), ("b", 2), ("e", 5), ("c", 3)]
        .into_iter()
        .collect()
}

// IndexMap equality ignores order, compare entry lists instead
pub fn entries<K: Clone, V: Clone>(map: &Map<K, V>) -> Vec<(K, V)> {
    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}
