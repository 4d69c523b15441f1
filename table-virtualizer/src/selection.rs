use alloc::vec::Vec;

use crate::key::{KeySet, RowKey};

/// Header checkbox state derived from a selection and the currently supplied ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectAllState {
    None,
    Some,
    All,
}

/// A set of selected row identities.
///
/// Selection is keyed by identity, never by position, so it survives window shifts, reordering,
/// filtering and partial reloads. Ids that no longer appear in the dataset are kept; clearing
/// them is the caller's decision.
#[derive(Clone, Debug)]
pub struct SelectionLedger<K> {
    selected: KeySet<K>,
}

impl<K: RowKey> Default for SelectionLedger<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RowKey> SelectionLedger<K> {
    pub fn new() -> Self {
        Self {
            selected: KeySet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        self.selected.iter()
    }

    pub fn is_selected(&self, id: &K) -> bool {
        self.selected.contains(id)
    }

    /// Flips membership of `id`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: K) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Returns `true` if `id` was newly selected.
    pub fn select(&mut self, id: K) -> bool {
        self.selected.insert(id)
    }

    /// Returns `true` if `id` was selected before.
    pub fn deselect(&mut self, id: &K) -> bool {
        self.selected.remove(id)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Toggles "select all" over `all_ids`.
    ///
    /// If every id in `all_ids` is already selected, the selection becomes empty. Otherwise
    /// `all_ids` is merged into the selection, keeping ids outside `all_ids` (rows on other
    /// pages or filtered out of view). An empty `all_ids` leaves the selection untouched.
    pub fn select_all(&mut self, all_ids: impl IntoIterator<Item = K>) {
        let ids: Vec<K> = all_ids.into_iter().collect();
        if ids.is_empty() {
            return;
        }
        if ids.iter().all(|id| self.selected.contains(id)) {
            self.selected.clear();
        } else {
            self.selected.extend(ids);
        }
    }

    /// Counts how many of `all_ids` are selected.
    pub fn selected_count<'a>(&self, all_ids: impl IntoIterator<Item = &'a K>) -> usize
    where
        K: 'a,
    {
        all_ids
            .into_iter()
            .filter(|id| self.selected.contains(*id))
            .count()
    }

    pub fn select_all_state<'a>(&self, all_ids: impl IntoIterator<Item = &'a K>) -> SelectAllState
    where
        K: 'a,
    {
        let mut total = 0usize;
        let mut hits = 0usize;
        for id in all_ids {
            total += 1;
            if self.selected.contains(id) {
                hits += 1;
            }
        }
        if hits == 0 {
            SelectAllState::None
        } else if hits == total {
            SelectAllState::All
        } else {
            SelectAllState::Some
        }
    }

    /// `true` iff `all_ids` is non-empty and every id is selected.
    pub fn is_all_selected<'a>(&self, all_ids: impl IntoIterator<Item = &'a K>) -> bool
    where
        K: 'a,
    {
        self.select_all_state(all_ids) == SelectAllState::All
    }

    /// `true` iff at least one, but not all, of `all_ids` is selected.
    pub fn is_indeterminate<'a>(&self, all_ids: impl IntoIterator<Item = &'a K>) -> bool
    where
        K: 'a,
    {
        self.select_all_state(all_ids) == SelectAllState::Some
    }
}

impl<K: RowKey> FromIterator<K> for SelectionLedger<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}
