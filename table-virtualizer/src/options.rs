use alloc::sync::Arc;

use crate::load_more::DEFAULT_LOAD_MORE_THRESHOLD;
use crate::{ConfigError, RowId, SelectionLedger, SortState};

/// Derives a stable identity for a row (receives the row and its current index).
pub type GetRowId<T, K> = Arc<dyn Fn(&T, usize) -> K + Send + Sync>;

/// Fired after every selection mutation with the full selection.
pub type OnSelectionChange<K> = Arc<dyn Fn(&SelectionLedger<K>) + Send + Sync>;

/// Fired after every header click that changes the sort state.
pub type OnSort = Arc<dyn Fn(&SortState) + Send + Sync>;

/// Fired when the viewport approaches the end of the content and no load is outstanding.
pub type OnLoadMore = Arc<dyn Fn() + Send + Sync>;

pub const DEFAULT_OVERSCAN: usize = 3;

/// Configuration for [`crate::VirtualTable`].
///
/// Callbacks are stored in `Arc`s so options are cheap to clone; adapters can tweak a field and
/// hand the result back through `VirtualTable::set_options`.
pub struct TableOptions<T, K = RowId> {
    /// Fixed height of every row in the scroll axis. Must be non-zero.
    pub row_height: u32,
    /// Extra rows materialized above and below the viewport.
    pub overscan: usize,
    pub get_row_id: GetRowId<T, K>,

    pub selectable: bool,
    pub on_selection_change: Option<OnSelectionChange<K>>,

    pub sortable: bool,
    pub on_sort: Option<OnSort>,

    pub on_load_more: Option<OnLoadMore>,
    /// Remaining scroll distance below which `on_load_more` fires.
    pub load_more_threshold: u64,
    /// Caller-controlled override of the load-more latch.
    ///
    /// `Some(true)` suppresses triggers. Switching from a loading state to `Some(false)` releases
    /// the latch, the same as `VirtualTable::finish_load_more`. `None` leaves the latch to the
    /// table alone.
    pub loading_more: Option<bool>,

    pub initial_scroll_offset: u64,
    pub initial_viewport_height: u32,
}

impl<T, K> Clone for TableOptions<T, K> {
    fn clone(&self) -> Self {
        Self {
            row_height: self.row_height,
            overscan: self.overscan,
            get_row_id: Arc::clone(&self.get_row_id),
            selectable: self.selectable,
            on_selection_change: self.on_selection_change.clone(),
            sortable: self.sortable,
            on_sort: self.on_sort.clone(),
            on_load_more: self.on_load_more.clone(),
            load_more_threshold: self.load_more_threshold,
            loading_more: self.loading_more,
            initial_scroll_offset: self.initial_scroll_offset,
            initial_viewport_height: self.initial_viewport_height,
        }
    }
}

impl<T, K> TableOptions<T, K> {
    /// Creates options for rows of `row_height`, identified by `get_row_id`.
    ///
    /// `get_row_id` must return the same key for the same logical row across reorders and
    /// reloads; selection follows this key, not the row's position.
    pub fn new(
        row_height: u32,
        get_row_id: impl Fn(&T, usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            row_height,
            overscan: DEFAULT_OVERSCAN,
            get_row_id: Arc::new(get_row_id),
            selectable: false,
            on_selection_change: None,
            sortable: false,
            on_sort: None,
            on_load_more: None,
            load_more_threshold: DEFAULT_LOAD_MORE_THRESHOLD,
            loading_more: None,
            initial_scroll_offset: 0,
            initial_viewport_height: 0,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.row_height == 0 {
            return Err(ConfigError::ZeroRowHeight);
        }
        Ok(())
    }

    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_get_row_id(
        mut self,
        get_row_id: impl Fn(&T, usize) -> K + Send + Sync + 'static,
    ) -> Self {
        self.get_row_id = Arc::new(get_row_id);
        self
    }

    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn with_on_selection_change(
        mut self,
        f: Option<impl Fn(&SelectionLedger<K>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_selection_change = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn with_on_sort(mut self, f: Option<impl Fn(&SortState) + Send + Sync + 'static>) -> Self {
        self.on_sort = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_load_more(mut self, f: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_load_more = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_load_more_threshold(mut self, threshold: u64) -> Self {
        self.load_more_threshold = threshold;
        self
    }

    pub fn with_loading_more(mut self, loading_more: Option<bool>) -> Self {
        self.loading_more = loading_more;
        self
    }

    pub fn with_initial_scroll_offset(mut self, offset: u64) -> Self {
        self.initial_scroll_offset = offset;
        self
    }

    pub fn with_initial_viewport_height(mut self, height: u32) -> Self {
        self.initial_viewport_height = height;
        self
    }
}

impl<T, K> core::fmt::Debug for TableOptions<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TableOptions")
            .field("row_height", &self.row_height)
            .field("overscan", &self.overscan)
            .field("selectable", &self.selectable)
            .field("sortable", &self.sortable)
            .field("load_more_threshold", &self.load_more_threshold)
            .field("loading_more", &self.loading_more)
            .field("initial_scroll_offset", &self.initial_scroll_offset)
            .field("initial_viewport_height", &self.initial_viewport_height)
            .finish_non_exhaustive()
    }
}
