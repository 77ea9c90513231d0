// Chunk: docs/chunks/selector_widget - Reusable selector interaction model
// Chunk: docs/chunks/wraparound_navigation - Circular arrow-key traversal
//!
//! Active-item state machine.
//!
//! [`NavigationState`] tracks which entry of the filtered list is highlighted.
//! It is either `NoActive` (`active() == None`) or `ActiveAt(item)`. The state
//! holds an [`ItemId`], never an index, so the highlight follows the item when
//! the list is re-filtered and is dropped as soon as the item disappears.
//!
//! The state knows nothing about names, payloads, or rendering. Every
//! transition takes the current filtered list as a slice of ids.
//!
//! # Transitions
//!
//! | Event | From | To |
//! |-------|------|----|
//! | list changed | `ActiveAt(x)`, x not in list | `NoActive` |
//! | Up / Down | `NoActive`, list non-empty | `ActiveAt(list[0])` |
//! | Down | `ActiveAt(list[i])` | `list[i + 1]`, or `list[0]` at the end |
//! | Up | `ActiveAt(list[i])` | `list[i - 1]`, or the last item at the start |
//! | hover x | any | `ActiveAt(x)` |
//! | confirm | `ActiveAt(x)` | `NoActive` (x is handed to the caller) |

use crate::item::ItemId;

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// What a directional step did to the active item.
///
/// Indices are positions in the filtered list the step was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTransition {
    /// Nothing changed (the list was empty).
    Unchanged,
    /// Moved from `NoActive` onto the first item.
    Entered { to: usize },
    /// Moved one row without wrapping.
    Moved { from: usize, to: usize },
    /// Moved past an end of the list and wrapped to the other end.
    Wrapped { from: usize, to: usize },
}

impl NavTransition {
    /// Returns the index of the newly active item, if the step landed on one.
    pub fn target(&self) -> Option<usize> {
        match *self {
            NavTransition::Unchanged => None,
            NavTransition::Entered { to }
            | NavTransition::Moved { to, .. }
            | NavTransition::Wrapped { to, .. } => Some(to),
        }
    }
}

/// The active-item state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    active: Option<ItemId>,
}

impl NavigationState {
    /// Creates a state with no active item.
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Returns the active item, if any.
    pub fn active(&self) -> Option<ItemId> {
        self.active
    }

    pub fn is_active(&self, id: ItemId) -> bool {
        self.active == Some(id)
    }

    /// Returns the position of the active item within `list`.
    pub fn active_index(&self, list: &[ItemId]) -> Option<usize> {
        let active = self.active?;
        list.iter().position(|id| *id == active)
    }

    /// Applies a list change.
    ///
    /// If the active item is not in `list`, the state drops to `NoActive` and
    /// this returns true. Otherwise the active item is kept as is.
    pub fn sync_with(&mut self, list: &[ItemId]) -> bool {
        match self.active {
            Some(active) if !list.contains(&active) => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// Moves the active item one row in `direction`, wrapping at the ends.
    ///
    /// # Behavior
    ///
    /// - **Empty list**: no-op, returns `Unchanged`.
    /// - **No active item**: activates `list[0]` for either direction.
    /// - **Down at the last row**: wraps to `list[0]`.
    /// - **Up at the first row**: wraps to the last row.
    pub fn step(&mut self, direction: Direction, list: &[ItemId]) -> NavTransition {
        if list.is_empty() {
            return NavTransition::Unchanged;
        }

        let Some(from) = self.active_index(list) else {
            self.active = Some(list[0]);
            return NavTransition::Entered { to: 0 };
        };

        let last = list.len() - 1;
        let transition = match direction {
            Direction::Down if from < last => NavTransition::Moved { from, to: from + 1 },
            Direction::Down => NavTransition::Wrapped { from, to: 0 },
            Direction::Up if from > 0 => NavTransition::Moved { from, to: from - 1 },
            Direction::Up => NavTransition::Wrapped { from, to: last },
        };

        if let Some(to) = transition.target() {
            self.active = Some(list[to]);
        }
        transition
    }

    /// Activates `id` directly (pointer hover).
    ///
    /// Ids that are not in `list` are ignored so the active item is always a
    /// member of the filtered list. Returns true if the state changed.
    pub fn hover(&mut self, id: ItemId, list: &[ItemId]) -> bool {
        if !list.contains(&id) || self.active == Some(id) {
            return false;
        }
        self.active = Some(id);
        true
    }

    /// Confirms the active item, returning it and resetting to `NoActive`.
    ///
    /// Returns `None` (and does nothing) when no item is active.
    pub fn take_active(&mut self) -> Option<ItemId> {
        self.active.take()
    }

    /// Resets to `NoActive`.
    pub fn clear(&mut self) {
        self.active = None;
    }
}
