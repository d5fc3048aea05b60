//! Pick or omit keys of ordered maps.
//!
//! The [`Slice`] trait adds `pick`, `pick_in_place`, `omit` and `omit_in_place`
//! to every [`KeyedContainer`]. Containers that canonicalize their keys, like
//! [`IndifferentMap`], expose a [`KeyNormalizing`] hook which is applied to the
//! requested keys before filtering.
mod alias;
pub mod container;
pub mod indifferent;
mod normalize;
pub mod slice;

#[cfg(test)]
mod test_utils;

pub use alias::{Map, MapIter};
pub use container::KeyedContainer;
pub use indifferent::{IndifferentMap, Key, KeyParseError};
pub use normalize::KeyNormalizing;
pub use slice::Slice;
