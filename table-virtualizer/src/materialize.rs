use alloc::vec::Vec;

use crate::{Column, VisibleRange};

/// A row selected for rendering, with its absolute position in the dataset.
#[derive(Debug)]
pub struct MaterializedRow<'a, T> {
    pub row: &'a T,
    /// Absolute index in the dataset (not relative to the window).
    pub index: usize,
    /// Start offset in the scroll axis.
    pub top: u64,
}

impl<T> Clone for MaterializedRow<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MaterializedRow<'_, T> {}

impl<'a, T> MaterializedRow<'a, T> {
    /// Runs every column's render callback against this row.
    pub fn cells<O>(&self, columns: &[Column<T, O>]) -> Vec<O> {
        columns
            .iter()
            .map(|c| c.render(self.row, self.index))
            .collect()
    }
}

/// The renderable slice of a dataset plus the spacers that keep scrollbar geometry intact.
///
/// `top_spacer + rows.len() * row_height + bottom_spacer == len * row_height` always holds.
#[derive(Debug)]
pub struct Materialized<'a, T> {
    pub rows: Vec<MaterializedRow<'a, T>>,
    pub top_spacer: u64,
    pub bottom_spacer: u64,
    pub row_height: u32,
    pub range: VisibleRange,
}

impl<T> Materialized<'_, T> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Height of the materialized rows alone.
    pub fn rows_height(&self) -> u64 {
        (self.rows.len() as u64).saturating_mul(self.row_height as u64)
    }

    /// Full scrollable height: both spacers plus the materialized rows.
    pub fn total_height(&self) -> u64 {
        self.top_spacer
            .saturating_add(self.rows_height())
            .saturating_add(self.bottom_spacer)
    }
}

/// Returns `(top_spacer, bottom_spacer)` for `range` over `len` rows.
pub fn spacers(len: usize, range: VisibleRange, row_height: u32) -> (u64, u64) {
    let range = range.clamp_to(len);
    let rh = row_height as u64;
    let top = (range.start as u64).saturating_mul(rh);
    let bottom = ((len - range.end) as u64).saturating_mul(rh);
    (top, bottom)
}

/// Maps `range` onto `dataset`.
pub fn materialize<T>(dataset: &[T], range: VisibleRange, row_height: u32) -> Materialized<'_, T> {
    materialize_with(dataset.len(), range, row_height, |i| &dataset[i])
}

/// Same as [`materialize`], for datasets that are only reachable by index (for example a sorted
/// view over a buffer kept in load order).
///
/// `row_at` is only called for indexes inside the (clamped) range.
pub fn materialize_with<'a, T: 'a>(
    len: usize,
    range: VisibleRange,
    row_height: u32,
    row_at: impl Fn(usize) -> &'a T,
) -> Materialized<'a, T> {
    let mut rows = Vec::with_capacity(range.clamp_to(len).len());
    let range = for_each_row_with(len, range, row_height, row_at, |r| rows.push(r));
    let (top_spacer, bottom_spacer) = spacers(len, range, row_height);
    Materialized {
        rows,
        top_spacer,
        bottom_spacer,
        row_height,
        range,
    }
}

/// Allocation-free variant of [`materialize`]: calls `f` for each row in the range.
pub fn for_each_row<'a, T>(
    dataset: &'a [T],
    range: VisibleRange,
    row_height: u32,
    f: impl FnMut(MaterializedRow<'a, T>),
) {
    for_each_row_with(dataset.len(), range, row_height, |i| &dataset[i], f);
}

fn for_each_row_with<'a, T: 'a>(
    len: usize,
    range: VisibleRange,
    row_height: u32,
    row_at: impl Fn(usize) -> &'a T,
    mut f: impl FnMut(MaterializedRow<'a, T>),
) -> VisibleRange {
    let clamped = range.clamp_to(len);
    if clamped != range {
        vwarn!(
            start = range.start,
            end = range.end,
            len,
            "materialize: range exceeds dataset, clamping"
        );
    }

    let rh = row_height as u64;
    let mut top = (clamped.start as u64).saturating_mul(rh);
    for index in clamped.start..clamped.end {
        f(MaterializedRow {
            row: row_at(index),
            index,
            top,
        });
        top = top.saturating_add(rh);
    }
    clamped
}
