// Chunk: docs/chunks/scroll_sync - Keep the active row in view
//!
//! Scroll adjustment derived from navigation transitions.
//!
//! The engine does not own a scroll container. After each directional step it
//! publishes a [`ScrollSignal`] describing how the rendering layer should move
//! its list so the active row stays visible. Rows are assumed to be exactly
//! `row_height` units tall; if the renderer draws rows at another size the
//! viewport drifts.

use crate::navigation::{Direction, NavTransition};

/// Default height of one result row, in rendering units.
pub const DEFAULT_ROW_HEIGHT: f32 = 55.0;

/// Advisory scroll adjustment for the result list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScrollSignal {
    /// Leave the scroll position alone.
    #[default]
    None,
    /// Scroll by a relative offset (positive = down).
    ScrollBy(f32),
    /// Scroll to the top of the list.
    ScrollToTop,
    /// Scroll to the bottom of the list.
    ScrollToBottom,
}

impl ScrollSignal {
    /// Derives the signal for a directional step.
    ///
    /// - Down without wrapping: `ScrollBy(+row_height)`
    /// - Up without wrapping: `ScrollBy(-row_height)`
    /// - Down wrapping to the first row: `ScrollToTop`
    /// - Up wrapping to the last row: `ScrollToBottom`
    /// - Entering the list or a no-op step: `None`
    pub fn for_step(direction: Direction, transition: NavTransition, row_height: f32) -> Self {
        match (transition, direction) {
            (NavTransition::Moved { .. }, Direction::Down) => ScrollSignal::ScrollBy(row_height),
            (NavTransition::Moved { .. }, Direction::Up) => ScrollSignal::ScrollBy(-row_height),
            (NavTransition::Wrapped { .. }, Direction::Down) => ScrollSignal::ScrollToTop,
            (NavTransition::Wrapped { .. }, Direction::Up) => ScrollSignal::ScrollToBottom,
            (NavTransition::Entered { .. }, _) | (NavTransition::Unchanged, _) => ScrollSignal::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ScrollSignal::None)
    }
}
