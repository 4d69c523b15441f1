use crate::{Align, ConfigError, VisibleRange};

/// Computes the overscanned range of rows intersecting a viewport.
///
/// With fixed row heights the visible window is a pair of divisions:
/// - `start = floor(scroll_offset / row_height) - overscan`, saturating at 0
/// - `end = ceil((scroll_offset + viewport_height) / row_height) + overscan`, capped at `len`
///
/// The result never exceeds `ceil(viewport_height / row_height) + 2 * overscan + 1` rows, no
/// matter how large `len` is. A scroll offset past the end of the content yields an empty range
/// at `len`. A zero `row_height` yields the empty range; use [`WindowState::new`] to reject it.
pub fn compute_visible_range(
    scroll_offset: u64,
    viewport_height: u32,
    row_height: u32,
    overscan: usize,
    len: usize,
) -> VisibleRange {
    if len == 0 || row_height == 0 {
        return VisibleRange::EMPTY;
    }

    let rh = row_height as u64;
    let first = scroll_offset / rh;
    let last = scroll_offset
        .saturating_add(viewport_height as u64)
        .div_ceil(rh);

    let start = to_index(first).saturating_sub(overscan);
    let end = to_index(last).saturating_add(overscan).min(len);
    VisibleRange {
        start: start.min(end),
        end,
    }
}

fn to_index(v: u64) -> usize {
    usize::try_from(v).unwrap_or(usize::MAX)
}

/// Scroll geometry of one table instance.
///
/// `row_height > 0` is enforced at construction; every setter that could break it returns a
/// [`ConfigError`] instead of clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowState {
    scroll_offset: u64,
    viewport_height: u32,
    row_height: u32,
    overscan: usize,
}

impl WindowState {
    pub fn new(
        scroll_offset: u64,
        viewport_height: u32,
        row_height: u32,
        overscan: usize,
    ) -> Result<Self, ConfigError> {
        if row_height == 0 {
            return Err(ConfigError::ZeroRowHeight);
        }
        Ok(Self {
            scroll_offset,
            viewport_height,
            row_height,
            overscan,
        })
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn row_height(&self) -> u32 {
        self.row_height
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        self.scroll_offset = offset;
    }

    pub fn set_viewport_height(&mut self, height: u32) {
        self.viewport_height = height;
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.overscan = overscan;
    }

    pub fn set_row_height(&mut self, row_height: u32) -> Result<(), ConfigError> {
        if row_height == 0 {
            return Err(ConfigError::ZeroRowHeight);
        }
        self.row_height = row_height;
        Ok(())
    }

    /// Recomputes the range for a dataset of `len` rows from the current state.
    pub fn visible_range(&self, len: usize) -> VisibleRange {
        compute_visible_range(
            self.scroll_offset,
            self.viewport_height,
            self.row_height,
            self.overscan,
            len,
        )
    }

    /// Rows strictly intersecting the viewport (no overscan).
    pub fn rows_in_view(&self, len: usize) -> VisibleRange {
        compute_visible_range(
            self.scroll_offset,
            self.viewport_height,
            self.row_height,
            0,
            len,
        )
    }

    pub fn total_height(&self, len: usize) -> u64 {
        (len as u64).saturating_mul(self.row_height as u64)
    }

    pub fn row_start(&self, index: usize) -> u64 {
        (index as u64).saturating_mul(self.row_height as u64)
    }

    pub fn max_scroll_offset(&self, len: usize) -> u64 {
        self.total_height(len)
            .saturating_sub(self.viewport_height as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64, len: usize) -> u64 {
        offset.min(self.max_scroll_offset(len))
    }

    /// Distance left to scroll before the viewport reaches the end of the content.
    pub fn remaining(&self, len: usize) -> u64 {
        self.total_height(len).saturating_sub(
            self.scroll_offset
                .saturating_add(self.viewport_height as u64),
        )
    }

    pub fn index_at_offset(&self, offset: u64, len: usize) -> Option<usize> {
        let index = to_index(offset / self.row_height as u64);
        (index < len).then_some(index)
    }

    /// Computes the (clamped) scroll offset that reveals row `index`.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align, len: usize) -> u64 {
        if len == 0 {
            return 0;
        }
        let index = index.min(len - 1);
        let start = self.row_start(index);
        let end = start.saturating_add(self.row_height as u64);
        let view = self.viewport_height as u64;

        let target = match align {
            Align::Start => start,
            Align::End => end.saturating_sub(view),
            Align::Center => {
                let center = start.saturating_add(self.row_height as u64 / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.scroll_offset;
                let cur_end = cur.saturating_add(view);
                if start >= cur && end <= cur_end {
                    cur
                } else if start < cur {
                    start
                } else {
                    end.saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target, len)
    }
}
