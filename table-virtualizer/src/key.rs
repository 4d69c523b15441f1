#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

#[cfg(feature = "std")]
pub(crate) type KeySet<K> = HashSet<K>;
#[cfg(not(feature = "std"))]
pub(crate) type KeySet<K> = BTreeSet<K>;

/// Bound for row identities.
///
/// With `std` this is `Hash + Eq` (selection is backed by a `HashSet`); without it, `Ord`
/// (backed by a `BTreeSet`). Both `u64` and `String` satisfy either flavour.
#[cfg(feature = "std")]
pub trait RowKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> RowKey for K {}

#[cfg(not(feature = "std"))]
pub trait RowKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> RowKey for K {}
