use core::fmt;

use table_virtualizer::{RowKey, VirtualTable};

/// A scroll anchor that preserves the visual position of a row across data changes.
///
/// Typical use cases:
/// - loading older rows above the viewport without the content jumping
/// - replacing the dataset after a refresh while the user keeps looking at the same row
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor<K> {
    pub key: K,
    /// The distance from the anchor row's top to the viewport's scroll offset.
    pub offset_in_row: u64,
}

impl<K: fmt::Debug> fmt::Debug for ScrollAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollAnchor")
            .field("key", &self.key)
            .field("offset_in_row", &self.offset_in_row)
            .finish()
    }
}

/// Captures an anchor for the first row intersecting the viewport (by identity).
///
/// Returns `None` if no row is in view.
pub fn capture_first_visible_anchor<T, K: RowKey>(
    table: &VirtualTable<T, K>,
    dataset: &[T],
) -> Option<ScrollAnchor<K>> {
    let window = table.window_state();
    let in_view = window.rows_in_view(dataset.len());
    if in_view.is_empty() {
        return None;
    }
    let index = in_view.start;
    let row = dataset.get(index)?;
    let offset_in_row = window
        .scroll_offset()
        .saturating_sub(window.row_start(index));
    Some(ScrollAnchor {
        key: table.row_id(row, index),
        offset_in_row,
    })
}

/// Applies a previously captured anchor by adjusting the scroll offset.
///
/// The caller provides a `key_to_index` mapping for the *current* dataset of `len` rows.
///
/// Returns `true` when the anchor was found and applied.
pub fn apply_anchor<T, K: RowKey>(
    table: &mut VirtualTable<T, K>,
    len: usize,
    anchor: &ScrollAnchor<K>,
    mut key_to_index: impl FnMut(&K) -> Option<usize>,
) -> bool {
    let Some(index) = key_to_index(&anchor.key).filter(|&i| i < len) else {
        return false;
    };
    let target = table
        .window_state()
        .row_start(index)
        .saturating_add(anchor.offset_in_row);
    table.set_scroll_offset_clamped(target, len);
    true
}
