use crate::alias::{Map, MapIter};
use crate::container::KeyedContainer;
use crate::normalize::KeyNormalizing;

use std::error::Error;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

type Result<T> = std::result::Result<T, KeyParseError>;

/// A named key that is either a symbol (`:name`) or a plain string (`name`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Symbol(String),
    Str(String),
}

impl Key {
    pub fn sym(name: impl Into<String>) -> Key {
        Key::Symbol(name.into())
    }

    pub fn str(name: impl Into<String>) -> Key {
        Key::Str(name.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Key::Symbol(s) | Key::Str(s) => s,
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Key::Symbol(_))
    }

    /// The string spelling of this key, `:name` becomes `name`.
    pub fn into_string_key(self) -> Key {
        match self {
            Key::Symbol(s) => Key::Str(s),
            k => k,
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Str(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Str(value)
    }
}

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(KeyParseError::Empty);
        }

        match s.strip_prefix(':') {
            Some("") => Err(KeyParseError::EmptySymbol),
            Some(name) => Ok(Key::sym(name)),
            None => Ok(Key::str(s)),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Key::Symbol(s) => write!(f, ":{}", s),
            Key::Str(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
pub enum KeyParseError {
    Empty,
    EmptySymbol,
}

impl fmt::Display for KeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KeyParseError::Empty => write!(f, "empty key"),
            KeyParseError::EmptySymbol => write!(f, "symbol key without a name: ':'"),
        }
    }
}

impl Error for KeyParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

/// Ordered map where `:name` and `"name"` are the same key.
///
/// Keys are always stored in their string spelling. Every method taking a key
/// converts it first, and [`Slice`](crate::Slice) does the same for requested
/// keys through the [`KeyNormalizing`] impl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndifferentMap<V> {
    map: Map<Key, V>,
}

impl<V> IndifferentMap<V> {
    pub fn new() -> Self {
        IndifferentMap { map: Map::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        IndifferentMap {
            map: Map::with_capacity(capacity),
        }
    }

    /// Returns the previous value if the key was already present, keeping
    /// that entry's position.
    pub fn insert(&mut self, key: impl Into<Key>, value: V) -> Option<V> {
        let key = self.normalize_key(key.into());
        self.map.insert(key, value)
    }

    pub fn get(&self, key: impl Into<Key>) -> Option<&V> {
        self.map.get(&self.normalize_key(key.into()))
    }

    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut V> {
        let key = self.normalize_key(key.into());
        self.map.get_mut(&key)
    }

    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.map.contains_key(&self.normalize_key(key.into()))
    }

    /// Removes the entry, shifting later entries down to keep their order.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<V> {
        let key = self.normalize_key(key.into());
        self.map.shift_remove(&key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.map.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.map.values()
    }

    pub fn iter(&self) -> MapIter<'_, Key, V> {
        self.map.iter()
    }
}

impl<V> KeyNormalizing<Key> for IndifferentMap<V> {
    fn normalize_key(&self, key: Key) -> Key {
        key.into_string_key()
    }
}

impl<V> KeyedContainer for IndifferentMap<V> {
    type Key = Key;
    type Value = V;

    fn key_normalizer(&self) -> Option<&dyn KeyNormalizing<Key>> {
        Some(self)
    }

    fn own_keys(&self) -> Vec<Key> {
        self.map.own_keys()
    }

    fn filtered<F>(&self, keep: F) -> Self
    where
        V: Clone,
        F: FnMut(&Key) -> bool,
    {
        IndifferentMap {
            map: self.map.filtered(keep),
        }
    }

    fn retain_keys<F>(&mut self, keep: F)
    where
        F: FnMut(&Key) -> bool,
    {
        self.map.retain_keys(keep);
    }
}

impl<V> Default for IndifferentMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<Key>, V> FromIterator<(K, V)> for IndifferentMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut result = IndifferentMap::new();
        result.extend(iter);
        result
    }
}

impl<K: Into<Key>, V> Extend<(K, V)> for IndifferentMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<V> IntoIterator for IndifferentMap<V> {
    type Item = (Key, V);
    type IntoIter = indexmap::map::IntoIter<Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a IndifferentMap<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = MapIter<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl<K: Into<Key>, V> Index<K> for IndifferentMap<V> {
    type Output = V;

    fn index(&self, key: K) -> &V {
        let key = key.into();
        match self.get(key.clone()) {
            Some(v) => v,
            None => panic!("IndifferentMap: key {} not found", key),
        }
    }
}
