use alloc::vec::Vec;

use crate::SortState;

/// A lightweight, serializable snapshot of the scroll geometry.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: u64,
    pub viewport_height: u32,
}

/// Everything a table instance owns besides its options: scroll, sort and selection.
///
/// Useful for restoring a table across navigations or sessions without coupling the engine to
/// any storage layer. Selection order is unspecified.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSnapshot<K> {
    pub scroll: ScrollState,
    pub sort: SortState,
    pub selection: Vec<K>,
}
