use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use table_virtualizer::{
    ConfigError, Materialized, RowId, RowKey, SelectAllState, SortState, TableOptions,
    VirtualTable, VisibleRange,
};

use crate::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};

/// Compares two rows in ascending order for one column.
pub type RowComparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// A framework-neutral controller that owns the rows of one table and drives a
/// [`VirtualTable`] over them.
///
/// It takes on the jobs the engine leaves to its caller:
/// - keeping the rows (in load order and in display order)
/// - sorting them when a header is clicked, or restoring load order when the sort clears
/// - ending the outstanding load when a page arrives
/// - keeping the viewport on the same row when rows are inserted above it
///
/// Adapters drive it by calling `on_viewport` / `on_scroll` when UI events occur and
/// `window()` when painting.
pub struct TableController<T, K = RowId> {
    table: VirtualTable<T, K>,
    rows: Vec<T>,
    // Load position of each entry in `rows`; prepended rows get negative values.
    seq: Vec<i64>,
    next_back: i64,
    next_front: i64,
    comparators: Vec<(String, RowComparator<T>)>,
}

impl<T, K: RowKey> TableController<T, K> {
    pub fn new(options: TableOptions<T, K>) -> Result<Self, ConfigError> {
        Ok(Self::from_table(VirtualTable::new(options)?))
    }

    pub fn from_table(table: VirtualTable<T, K>) -> Self {
        Self {
            table,
            rows: Vec::new(),
            seq: Vec::new(),
            next_back: 0,
            next_front: 0,
            comparators: Vec::new(),
        }
    }

    /// Registers the ascending comparator used when `column` is sorted.
    ///
    /// A sorted column without a comparator displays rows in load order (e.g. when the server
    /// sorts and the host replaces the rows itself).
    pub fn with_comparator(
        mut self,
        column: impl Into<String>,
        cmp: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.set_comparator(column, cmp);
        self
    }

    pub fn set_comparator(
        &mut self,
        column: impl Into<String>,
        cmp: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    ) {
        let column = column.into();
        let cmp: RowComparator<T> = Arc::new(cmp);
        match self.comparators.iter_mut().find(|(k, _)| *k == column) {
            Some(entry) => entry.1 = cmp,
            None => self.comparators.push((column, cmp)),
        }
        self.resort();
    }

    pub fn table(&self) -> &VirtualTable<T, K> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut VirtualTable<T, K> {
        &mut self.table
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_parts(self) -> (VirtualTable<T, K>, Vec<T>) {
        (self.table, self.rows)
    }

    pub fn on_viewport(&mut self, viewport_height: u32) {
        self.table.set_viewport_height(viewport_height);
    }

    /// Call this when the UI reports a scroll offset change. May fire `on_load_more`.
    pub fn on_scroll(&mut self, scroll_offset: u64) -> VisibleRange {
        let viewport = self.table.viewport_height();
        self.table
            .on_scroll(scroll_offset, viewport, self.rows.len())
    }

    /// The rows to paint plus their spacers.
    pub fn window(&self) -> Materialized<'_, T> {
        self.table.window(&self.rows)
    }

    /// Appends a loaded page and releases the load-more latch.
    pub fn append_rows(&mut self, rows: impl IntoIterator<Item = T>) {
        for row in rows {
            self.rows.push(row);
            self.seq.push(self.next_back);
            self.next_back += 1;
        }
        vdebug!(total = self.rows.len(), "append_rows");
        self.resort();
        self.table.finish_load_more();
    }

    /// Releases the load-more latch after a failed load so the next scroll can retry.
    pub fn fail_load_more(&mut self) {
        self.table.finish_load_more();
    }

    /// Inserts rows before all loaded rows, keeping the viewport on the row it showed.
    pub fn prepend_rows(&mut self, rows: impl IntoIterator<Item = T>) {
        let anchor = self.capture_anchor();
        let incoming: Vec<T> = rows.into_iter().collect();
        let n = incoming.len() as i64;
        vdebug!(added = n, "prepend_rows");

        let first = self.next_front - n;
        self.next_front = first;
        let mut rows = Vec::with_capacity(incoming.len() + self.rows.len());
        let mut seq = Vec::with_capacity(rows.capacity());
        for (i, row) in incoming.into_iter().enumerate() {
            rows.push(row);
            seq.push(first + i as i64);
        }
        rows.append(&mut self.rows);
        seq.append(&mut self.seq);
        self.rows = rows;
        self.seq = seq;

        self.resort();
        self.reanchor(anchor);
    }

    /// Replaces every row (e.g. after a refresh), keeping the viewport on the same row when
    /// it is still present. Selection is left untouched.
    pub fn replace_rows(&mut self, rows: Vec<T>) {
        let anchor = self.capture_anchor();
        vdebug!(total = rows.len(), "replace_rows");
        self.seq = (0..rows.len() as i64).collect();
        self.next_back = rows.len() as i64;
        self.next_front = 0;
        self.rows = rows;
        self.resort();
        self.reanchor(anchor);
        self.table.finish_load_more();
    }

    /// Applies a header click and re-sorts the rows. Returns the new sort state, or `None`
    /// when the table is not sortable.
    pub fn click_sort(&mut self, column: &str) -> Option<SortState> {
        let state = self.table.click_sort(column)?.clone();
        self.resort();
        let offset = self.table.scroll_offset();
        self.table
            .set_scroll_offset_clamped(offset, self.rows.len());
        Some(state)
    }

    pub fn toggle_row(&mut self, index: usize) -> Option<bool> {
        self.table.toggle_row(&self.rows, index)
    }

    pub fn toggle_select_all(&mut self) -> bool {
        self.table.toggle_select_all(&self.rows)
    }

    pub fn select_all_state(&self) -> SelectAllState {
        self.table.select_all_state(&self.rows)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.rows
            .get(index)
            .is_some_and(|row| self.table.is_row_selected(row, index))
    }

    /// Display index of the row with identity `key`.
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.rows
            .iter()
            .enumerate()
            .position(|(i, row)| self.table.row_id(row, i) == *key)
    }

    pub fn capture_anchor(&self) -> Option<ScrollAnchor<K>> {
        capture_first_visible_anchor(&self.table, &self.rows)
    }

    /// Applies a previously captured anchor. Returns `false` if its row is gone.
    pub fn apply_anchor(&mut self, anchor: &ScrollAnchor<K>) -> bool {
        let index = self.index_of(&anchor.key);
        apply_anchor(&mut self.table, self.rows.len(), anchor, |_| index)
    }

    fn reanchor(&mut self, anchor: Option<ScrollAnchor<K>>) {
        let applied = anchor.is_some_and(|a| self.apply_anchor(&a));
        if !applied {
            let offset = self.table.scroll_offset();
            self.table
                .set_scroll_offset_clamped(offset, self.rows.len());
        }
    }

    fn resort(&mut self) {
        let sort = self.table.sort_state();
        let cmp = match (sort.column(), sort.direction()) {
            (Some(column), Some(direction)) => self
                .comparators
                .iter()
                .find(|(k, _)| k.as_str() == column)
                .map(|(_, c)| (Arc::clone(c), direction)),
            _ => None,
        };

        let rows = &self.rows;
        let seq = &self.seq;
        let mut order: Vec<usize> = (0..rows.len()).collect();
        match &cmp {
            Some((c, direction)) => order.sort_by(|&a, &b| {
                direction
                    .apply(c(&rows[a], &rows[b]))
                    .then(seq[a].cmp(&seq[b]))
            }),
            None => order.sort_by_key(|&i| seq[i]),
        }

        if order.iter().enumerate().all(|(pos, &i)| pos == i) {
            return;
        }
        permute(&mut self.rows, &order);
        permute(&mut self.seq, &order);
    }
}

fn permute<V>(v: &mut Vec<V>, order: &[usize]) {
    let mut slots: Vec<Option<V>> = core::mem::take(v).into_iter().map(Some).collect();
    v.extend(order.iter().filter_map(|&i| slots[i].take()));
}

impl<T, K: RowKey> fmt::Debug for TableController<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableController")
            .field("rows", &self.rows.len())
            .field("sort", self.table.sort_state())
            .field("comparators", &self.comparators.len())
            .finish_non_exhaustive()
    }
}
