// Chunk: docs/chunks/list_viewport - Scroll arithmetic for the result list
//!
//! Scroll state for a list of uniform-height result rows.
//!
//! `ListViewport` is what a rendering layer would keep next to the engine: a
//! scroll offset in pixels, the height of one row, and an optional cap on how
//! many rows are visible at once (`maxHeightUnits`). It applies the engine's
//! [`ScrollSignal`]s and clamps the offset so the list never scrolls past its
//! content. It has no platform dependencies and is fully testable.
//!
//! # Example
//!
//! ```
//! use lite_complete::{ListViewport, ScrollSignal};
//!
//! let mut viewport = ListViewport::new(55.0, Some(2)); // two rows tall
//! viewport.apply(ScrollSignal::ScrollBy(55.0), 5);
//! assert_eq!(viewport.first_visible_row(), 1);
//! viewport.apply(ScrollSignal::ScrollToBottom, 5);
//! assert_eq!(viewport.visible_range(5), 3..5);
//! ```

use std::ops::Range;

use crate::scroll_sync::ScrollSignal;

/// Scroll state and arithmetic for the result list.
#[derive(Debug, Clone)]
pub struct ListViewport {
    /// Scroll position in pixels (distance from top of content to top of viewport)
    scroll_offset_px: f32,
    /// Height of each row in pixels
    row_height: f32,
    /// Maximum number of rows shown at once; `None` grows with the content
    max_rows: Option<usize>,
}

impl ListViewport {
    /// Creates a viewport at offset 0.
    pub fn new(row_height: f32, max_rows: Option<usize>) -> Self {
        Self {
            scroll_offset_px: 0.0,
            row_height,
            max_rows,
        }
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn max_rows(&self) -> Option<usize> {
        self.max_rows
    }

    /// Changes the row cap and re-clamps the scroll offset.
    pub fn set_max_rows(&mut self, max_rows: Option<usize>, row_count: usize) {
        self.max_rows = max_rows;
        self.set_scroll_offset_px(self.scroll_offset_px, row_count);
    }

    /// Returns the number of rows that fit in the viewport for `row_count` rows.
    pub fn visible_rows(&self, row_count: usize) -> usize {
        match self.max_rows {
            Some(max) => max.min(row_count),
            None => row_count,
        }
    }

    /// Returns the viewport height in pixels for `row_count` rows.
    pub fn height_px(&self, row_count: usize) -> f32 {
        self.visible_rows(row_count) as f32 * self.row_height
    }

    pub fn scroll_offset_px(&self) -> f32 {
        self.scroll_offset_px
    }

    /// Sets the scroll offset in pixels, with clamping to valid bounds.
    ///
    /// The offset is clamped to `[0.0, (row_count - visible_rows) * row_height]`.
    pub fn set_scroll_offset_px(&mut self, px: f32, row_count: usize) {
        let max_offset_px = self.max_offset_px(row_count);
        self.scroll_offset_px = px.clamp(0.0, max_offset_px);
    }

    fn max_offset_px(&self, row_count: usize) -> f32 {
        let hidden_rows = row_count.saturating_sub(self.visible_rows(row_count));
        hidden_rows as f32 * self.row_height
    }

    /// Returns the first (possibly partially) visible row.
    pub fn first_visible_row(&self) -> usize {
        if self.row_height <= 0.0 {
            return 0;
        }
        (self.scroll_offset_px / self.row_height).floor() as usize
    }

    /// Returns the range of rows visible in the viewport.
    pub fn visible_range(&self, row_count: usize) -> Range<usize> {
        let first_row = self.first_visible_row().min(row_count);
        let mut end = first_row + self.visible_rows(row_count);
        if self.row_height > 0.0 && self.scroll_offset_px % self.row_height > 0.0 {
            // A fractional offset exposes part of one more row at the bottom
            end += 1;
        }
        first_row..end.min(row_count)
    }

    /// Applies a scroll signal from the engine.
    ///
    /// Returns true if the scroll offset changed.
    pub fn apply(&mut self, signal: ScrollSignal, row_count: usize) -> bool {
        let old_offset_px = self.scroll_offset_px;
        match signal {
            ScrollSignal::None => {}
            ScrollSignal::ScrollBy(delta) => {
                self.set_scroll_offset_px(self.scroll_offset_px + delta, row_count)
            }
            ScrollSignal::ScrollToTop => self.scroll_offset_px = 0.0,
            ScrollSignal::ScrollToBottom => self.scroll_offset_px = self.max_offset_px(row_count),
        }
        self.scroll_offset_px != old_offset_px
    }

    /// Re-clamps after the row count changed (e.g. a new filtered list).
    pub fn update_row_count(&mut self, row_count: usize) {
        self.set_scroll_offset_px(self.scroll_offset_px, row_count);
    }

    /// Returns true if `row` is fully inside the viewport.
    pub fn is_row_visible(&self, row: usize, row_count: usize) -> bool {
        if row >= row_count {
            return false;
        }
        let top = row as f32 * self.row_height;
        let bottom = top + self.row_height;
        top >= self.scroll_offset_px && bottom <= self.scroll_offset_px + self.height_px(row_count)
    }
}
