use alloc::vec::Vec;

use crate::key::RowKey;
use crate::materialize::{Materialized, materialize};
use crate::{
    Align, Column, ConfigError, LoadMoreLatch, RowId, ScrollState, SelectAllState, SelectionLedger,
    SortState, TableOptions, TableSnapshot, VisibleRange, WindowState,
};

/// A headless virtual table.
///
/// The table never owns or mutates the dataset: every query takes the caller's rows (or their
/// count) so the visible range is always recomputed against the current length. All state that
/// a rendered table carries (scroll geometry, selection, sort, the load-more latch) lives in the
/// instance, so any number of tables can coexist.
///
/// Scroll events are handled synchronously by [`VirtualTable::on_scroll`]; there are no timers.
#[derive(Clone, Debug)]
pub struct VirtualTable<T, K = RowId> {
    options: TableOptions<T, K>,
    window: WindowState,
    selection: SelectionLedger<K>,
    sort: SortState,
    latch: LoadMoreLatch,
    // Dataset length observed when the current load was triggered.
    len_at_trigger: Option<usize>,
}

impl<T, K: RowKey> VirtualTable<T, K> {
    /// Creates a table from options, rejecting invalid geometry.
    pub fn new(options: TableOptions<T, K>) -> Result<Self, ConfigError> {
        options.validate()?;
        let window = WindowState::new(
            options.initial_scroll_offset,
            options.initial_viewport_height,
            options.row_height,
            options.overscan,
        )?;
        vdebug!(
            row_height = options.row_height,
            overscan = options.overscan,
            selectable = options.selectable,
            sortable = options.sortable,
            "VirtualTable::new"
        );
        let latch = LoadMoreLatch::new(options.load_more_threshold);
        Ok(Self {
            window,
            selection: SelectionLedger::new(),
            sort: SortState::unsorted(),
            latch,
            len_at_trigger: None,
            options,
        })
    }

    pub fn options(&self) -> &TableOptions<T, K> {
        &self.options
    }

    /// Replaces the options. Scroll position, selection and sort are kept.
    ///
    /// On error the previous options stay in effect.
    pub fn set_options(&mut self, options: TableOptions<T, K>) -> Result<(), ConfigError> {
        options.validate()?;
        self.window.set_row_height(options.row_height)?;
        self.window.set_overscan(options.overscan);
        self.latch.set_threshold(options.load_more_threshold);

        let release = releases_latch(self.options.loading_more, options.loading_more);
        self.options = options;
        if release {
            self.release_latch();
        }
        vtrace!(
            row_height = self.options.row_height,
            overscan = self.options.overscan,
            "VirtualTable::set_options"
        );
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut TableOptions<T, K>),
    ) -> Result<(), ConfigError> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    pub fn window_state(&self) -> &WindowState {
        &self.window
    }

    pub fn selection(&self) -> &SelectionLedger<K> {
        &self.selection
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn row_id(&self, row: &T, index: usize) -> K {
        (self.options.get_row_id)(row, index)
    }

    /// Identities of every row in `dataset`, in dataset order.
    pub fn row_ids<'a>(&'a self, dataset: &'a [T]) -> impl Iterator<Item = K> + 'a {
        dataset
            .iter()
            .enumerate()
            .map(|(i, row)| self.row_id(row, i))
    }

    pub fn scroll_offset(&self) -> u64 {
        self.window.scroll_offset()
    }

    pub fn viewport_height(&self) -> u32 {
        self.window.viewport_height()
    }

    pub fn set_viewport_height(&mut self, height: u32) {
        self.window.set_viewport_height(height);
    }

    pub fn total_height(&self, len: usize) -> u64 {
        self.window.total_height(len)
    }

    /// Handles one scroll notification from the host.
    ///
    /// Updates the scroll geometry, evaluates the load-more trigger, and returns the range to
    /// materialize for a dataset of `len` rows. Events must be delivered in order; each call
    /// supersedes the range of the previous one.
    pub fn on_scroll(
        &mut self,
        scroll_offset: u64,
        viewport_height: u32,
        len: usize,
    ) -> VisibleRange {
        vtrace!(scroll_offset, viewport_height, len, "on_scroll");
        self.window.set_scroll_offset(scroll_offset);
        self.window.set_viewport_height(viewport_height);

        if let Some(prev_len) = self.len_at_trigger {
            if len > prev_len {
                vdebug!(prev_len, len, "load-more latch released by appended rows");
                self.release_latch();
            }
        }
        self.check_load_more(len);

        self.window.visible_range(len)
    }

    /// The overscanned range for a dataset of `len` rows at the current scroll position.
    pub fn visible_range(&self, len: usize) -> VisibleRange {
        self.window.visible_range(len)
    }

    /// Materializes the current window over `dataset`.
    pub fn window<'a>(&self, dataset: &'a [T]) -> Materialized<'a, T> {
        let range = self.window.visible_range(dataset.len());
        materialize(dataset, range, self.window.row_height())
    }

    /// Moves the scroll position without treating it as a user scroll (no load-more check).
    ///
    /// Returns the applied offset, clamped to the content of `len` rows.
    pub fn set_scroll_offset_clamped(&mut self, offset: u64, len: usize) -> u64 {
        let offset = self.window.clamp_scroll_offset(offset, len);
        self.window.set_scroll_offset(offset);
        offset
    }

    /// Programmatically scrolls so row `index` is revealed (no load-more check, no animation).
    ///
    /// Returns the applied offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align, len: usize) -> u64 {
        let offset = self.window.scroll_to_index_offset(index, align, len);
        self.window.set_scroll_offset(offset);
        offset
    }

    fn notify_selection(&self) {
        if let Some(cb) = &self.options.on_selection_change {
            cb(&self.selection);
        }
    }

    /// Toggles the row at `index`. Returns the new membership, or `None` when selection is
    /// disabled or `index` is out of bounds.
    pub fn toggle_row(&mut self, dataset: &[T], index: usize) -> Option<bool> {
        let row = dataset.get(index)?;
        let id = self.row_id(row, index);
        self.toggle_id(id)
    }

    /// Toggles a row by identity. Returns the new membership, or `None` when selection is
    /// disabled.
    pub fn toggle_id(&mut self, id: K) -> Option<bool> {
        if !self.options.selectable {
            vtrace!("toggle ignored: table is not selectable");
            return None;
        }
        let selected = self.selection.toggle(id);
        self.notify_selection();
        Some(selected)
    }

    /// Header "select all" over every row of `dataset` (the rows currently supplied, e.g. the
    /// filtered view). Returns `false` when selection is disabled.
    pub fn toggle_select_all(&mut self, dataset: &[T]) -> bool {
        if !self.options.selectable {
            vtrace!("select all ignored: table is not selectable");
            return false;
        }
        let ids: Vec<K> = self.row_ids(dataset).collect();
        self.selection.select_all(ids);
        self.notify_selection();
        true
    }

    /// Same as [`Self::toggle_select_all`] for an explicit id list.
    pub fn select_all_ids(&mut self, ids: impl IntoIterator<Item = K>) -> bool {
        if !self.options.selectable {
            return false;
        }
        self.selection.select_all(ids);
        self.notify_selection();
        true
    }

    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.selection.clear();
        self.notify_selection();
    }

    pub fn is_row_selected(&self, row: &T, index: usize) -> bool {
        self.selection.is_selected(&self.row_id(row, index))
    }

    /// Header checkbox state over every row of `dataset`.
    pub fn select_all_state(&self, dataset: &[T]) -> SelectAllState {
        let ids: Vec<K> = self.row_ids(dataset).collect();
        self.selection.select_all_state(ids.iter())
    }

    /// Applies a header click on `column`. Returns the new state, or `None` when sorting is
    /// disabled.
    ///
    /// Sorting the rows is up to the caller; `on_sort` reports the state to sort by.
    pub fn click_sort(&mut self, column: &str) -> Option<&SortState> {
        if !self.options.sortable {
            vtrace!(column, "sort ignored: table is not sortable");
            return None;
        }
        self.sort.toggle(column);
        vdebug!(
            column = self.sort.column(),
            direction = ?self.sort.direction(),
            "sort state changed"
        );
        if let Some(cb) = &self.options.on_sort {
            cb(&self.sort);
        }
        Some(&self.sort)
    }

    /// Like [`Self::click_sort`], also honouring the column's own `sortable` flag.
    pub fn click_column<O>(&mut self, column: &Column<T, O>) -> Option<&SortState> {
        if !column.sortable {
            return None;
        }
        self.click_sort(&column.key)
    }

    /// Sets the sort state without firing `on_sort`, e.g. when restoring from a URL.
    pub fn set_sort_state(&mut self, sort: SortState) {
        self.sort = sort;
    }

    /// Effective latch state, including the caller's override.
    pub fn is_loading_more(&self) -> bool {
        self.options.loading_more == Some(true) || self.latch.is_loading()
    }

    /// Signals that the outstanding load finished (successfully or not).
    ///
    /// Call [`Self::on_scroll`] (or [`Self::recheck_load_more`]) afterwards if the viewport may
    /// still be close to the end.
    pub fn finish_load_more(&mut self) {
        self.release_latch();
    }

    /// Updates the caller-controlled latch override.
    pub fn set_loading_more(&mut self, loading_more: Option<bool>) {
        let release = releases_latch(self.options.loading_more, loading_more);
        self.options.loading_more = loading_more;
        if release {
            self.release_latch();
        }
    }

    /// Re-evaluates the load-more trigger at the current scroll position.
    pub fn recheck_load_more(&mut self, len: usize) -> bool {
        self.check_load_more(len)
    }

    fn release_latch(&mut self) {
        self.latch.complete();
        self.len_at_trigger = None;
    }

    fn check_load_more(&mut self, len: usize) -> bool {
        let Some(cb) = self.options.on_load_more.clone() else {
            return false;
        };
        if self.options.loading_more == Some(true) {
            return false;
        }
        let total = self.window.total_height(len);
        if !self.latch.check(
            total,
            self.window.scroll_offset(),
            self.window.viewport_height(),
        ) {
            return false;
        }
        self.len_at_trigger = Some(len);
        vdebug!(
            total,
            scroll_offset = self.window.scroll_offset(),
            viewport_height = self.window.viewport_height(),
            threshold = self.latch.threshold(),
            "on_load_more"
        );
        cb();
        true
    }

    /// Captures scroll, sort and selection.
    pub fn snapshot(&self) -> TableSnapshot<K> {
        TableSnapshot {
            scroll: ScrollState {
                offset: self.window.scroll_offset(),
                viewport_height: self.window.viewport_height(),
            },
            sort: self.sort.clone(),
            selection: self.selection.iter().cloned().collect(),
        }
    }

    /// Restores a snapshot. No callbacks fire; the load-more latch is left as is.
    pub fn restore(&mut self, snapshot: TableSnapshot<K>) {
        vdebug!(
            offset = snapshot.scroll.offset,
            selected = snapshot.selection.len(),
            "VirtualTable::restore"
        );
        self.window.set_scroll_offset(snapshot.scroll.offset);
        self.window
            .set_viewport_height(snapshot.scroll.viewport_height);
        self.sort = snapshot.sort;
        self.selection = snapshot.selection.into_iter().collect();
    }
}

// Only the caller's own `Some(true)` -> `Some(false)` transition counts as a completion signal.
fn releases_latch(old: Option<bool>, new: Option<bool>) -> bool {
    old == Some(true) && new == Some(false)
}
