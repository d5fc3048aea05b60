//! Restricting a container to, or excluding, a set of keys.
//!
//! Useful for limiting an options map to the keys a function understands
//! before passing it on:
//!
//! ```
//! use key_filter::{Map, Slice};
//!
//! let options: Map<&str, u32> = [("mass", 3), ("velocity", 9), ("colour", 1)]
//!     .into_iter()
//!     .collect();
//! let known = options.pick(["mass", "velocity", "time"]);
//! assert_eq!(known.keys().copied().collect::<Vec<_>>(), ["mass", "velocity"]);
//! ```
//!
//! or for copying a record's attributes without some of its fields:
//!
//! ```
//! use key_filter::{Map, Slice};
//!
//! let attributes: Map<&str, u32> = [("id", 7), ("user_id", 2), ("score", 40)]
//!     .into_iter()
//!     .collect();
//! let copy = attributes.omit(["id", "user_id"]);
//! assert_eq!(copy.len(), 1);
//! assert_eq!(copy["score"], 40);
//! ```
use crate::container::KeyedContainer;

use log::{debug, trace};

use std::collections::HashSet;

/// The four key filters, available on every [`KeyedContainer`].
///
/// Requested keys that are not present in the container are ignored. If the
/// container has a [`KeyNormalizing`](crate::KeyNormalizing) hook every
/// requested key is passed through it once before comparison.
pub trait Slice: KeyedContainer + Sized {
    /// Returns a new container with only the given keys.
    fn pick<I>(&self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self::Key>,
        Self::Value: Clone,
    {
        let allowed = normalized_key_set(self, keys);
        let result = self.filtered(|k| allowed.contains(k));
        trace!("pick: filtering by {} requested keys", allowed.len());
        result
    }

    /// Replaces the contents with only the given keys.
    fn pick_in_place<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Self::Key>,
    {
        let allowed = normalized_key_set(self, keys);
        self.retain_keys(|k| allowed.contains(k));
        trace!("pick_in_place: filtering by {} requested keys", allowed.len());
        self
    }

    /// Returns a new container without the given keys.
    fn omit<I>(&self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self::Key>,
        Self::Value: Clone,
    {
        let allowed = remaining_key_set(self, keys);
        self.filtered(|k| allowed.contains(k))
    }

    /// Replaces the contents without the given keys.
    fn omit_in_place<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Self::Key>,
    {
        let allowed = remaining_key_set(self, keys);
        self.retain_keys(|k| allowed.contains(k));
        self
    }
}

impl<C: KeyedContainer> Slice for C {}

fn normalized_key_set<C, I>(container: &C, keys: I) -> HashSet<C::Key>
where
    C: KeyedContainer + ?Sized,
    I: IntoIterator,
    I::Item: Into<C::Key>,
{
    let keys = keys.into_iter().map(Into::<C::Key>::into);
    let allowed: HashSet<C::Key> = match container.key_normalizer() {
        Some(normalizer) => keys.map(|k| normalizer.normalize_key(k)).collect(),
        None => keys.collect(),
    };

    if log::log_enabled!(log::Level::Debug) {
        let own_keys: HashSet<C::Key> = container.own_keys().into_iter().collect();
        let missing = allowed.iter().filter(|k| !own_keys.contains(*k)).count();
        if missing > 0 {
            debug!("{} of {} requested keys are not in the container", missing, allowed.len());
        }
    }

    allowed
}

/// Own keys minus the (normalized) requested keys.
fn remaining_key_set<C, I>(container: &C, keys: I) -> HashSet<C::Key>
where
    C: KeyedContainer + ?Sized,
    I: IntoIterator,
    I::Item: Into<C::Key>,
{
    let excluded = normalized_key_set(container, keys);
    let remaining: HashSet<C::Key> = container
        .own_keys()
        .into_iter()
        .filter(|k| !excluded.contains(k))
        .collect();
    trace!("omit: {} keys excluded, {} remaining", excluded.len(), remaining.len());

    remaining
}
