/// Canonicalizes a key before it is compared against a container's own keys.
///
/// Containers that coerce their keys on insertion (e.g. treating a symbol and
/// a string with the same name as one key) implement this, so that keys
/// requested from [`Slice`](crate::Slice) are coerced the same way.
pub trait KeyNormalizing<K> {
    fn normalize_key(&self, key: K) -> K;
}
