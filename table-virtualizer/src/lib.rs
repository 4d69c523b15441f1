//! A headless row-windowing engine for large tables.
//!
//! For caller-side utilities (owning rows, sorting them, anchoring across prepends), see the
//! `table-virtualizer-adapter` crate.
//!
//! The engine renders a bounded amount of work per scroll event regardless of dataset size:
//! - a window calculator turns scroll offset + viewport height into an overscanned row range
//! - a materializer maps that range onto the dataset and sizes the spacers above/below it, so
//!   the scrollbar geometry matches a fully rendered table
//! - a selection ledger keyed by row identity, independent of the window
//! - a single-column sort toggle and a deduplicated load-more trigger
//!
//! It is UI-agnostic and performs no I/O. Rows have one fixed height. A TUI/GUI layer is
//! expected to provide the viewport height, scroll offsets, and the already-fetched rows.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod column;
mod error;
mod key;
mod load_more;
mod materialize;
mod options;
mod selection;
mod sort;
mod state;
mod table;
mod types;
mod window;


pub use column::{CellRenderer, Column};
pub use error::ConfigError;
pub use key::RowKey;
pub use load_more::{DEFAULT_LOAD_MORE_THRESHOLD, LoadMoreLatch};
pub use materialize::{
    Materialized, MaterializedRow, for_each_row, materialize, materialize_with, spacers,
};
pub use options::{
    DEFAULT_OVERSCAN, GetRowId, OnLoadMore, OnSelectionChange, OnSort, TableOptions,
};
pub use selection::{SelectAllState, SelectionLedger};
pub use sort::{SortDirection, SortState};
pub use state::{ScrollState, TableSnapshot};
pub use table::VirtualTable;
pub use types::{Align, RowId, VisibleRange};
pub use window::{WindowState, compute_visible_range};
