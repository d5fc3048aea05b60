// insertion ordered, so filtered copies come out in the order entries were added
pub type Map<K, V> = indexmap::IndexMap<K, V>;

pub type MapIter<'a, K, V> = indexmap::map::Iter<'a, K, V>;
