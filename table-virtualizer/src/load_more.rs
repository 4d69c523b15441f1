/// Default distance (in scroll units) from the end of the content at which more rows are
/// requested.
pub const DEFAULT_LOAD_MORE_THRESHOLD: u64 = 200;

/// A latch that turns "close to the end" scroll events into at most one outstanding
/// load-more request.
///
/// Once tripped it stays closed until [`LoadMoreLatch::complete`] is called. There is no
/// timeout: a caller that never completes the load never receives another trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadMoreLatch {
    threshold: u64,
    loading: bool,
}

impl Default for LoadMoreLatch {
    fn default() -> Self {
        Self::new(DEFAULT_LOAD_MORE_THRESHOLD)
    }
}

impl LoadMoreLatch {
    pub fn new(threshold: u64) -> Self {
        Self {
            threshold,
            loading: false,
        }
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: u64) {
        self.threshold = threshold;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns `true` when the remaining scroll distance is below the threshold.
    ///
    /// `remaining = total_height - scroll_offset - viewport_height`, which may be negative when
    /// the viewport overhangs the content; that always counts as "below".
    pub fn is_near_end(&self, total_height: u64, scroll_offset: u64, viewport_height: u32) -> bool {
        scroll_offset
            .saturating_add(viewport_height as u64)
            .saturating_add(self.threshold)
            > total_height
    }

    /// Evaluates a scroll event. Returns `true` exactly when a load should be started, and
    /// latches until [`Self::complete`].
    pub fn check(&mut self, total_height: u64, scroll_offset: u64, viewport_height: u32) -> bool {
        if self.loading || !self.is_near_end(total_height, scroll_offset, viewport_height) {
            return false;
        }
        self.loading = true;
        true
    }

    /// Forces the latch closed, e.g. when the caller started a load on its own.
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Releases the latch after the outstanding load finished (or failed).
    pub fn complete(&mut self) {
        self.loading = false;
    }
}
