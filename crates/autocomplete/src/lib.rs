// Chunk: docs/chunks/selector_widget - Reusable selector interaction model
//!
//! lite-complete: a filter-as-you-type selector engine.
//!
//! The engine takes raw text input, commits it as a query once typing pauses,
//! filters a catalog of named items by case-insensitive prefix, and tracks a
//! single active item that the user moves with the arrow keys (wrapping at
//! both ends), the pointer, or confirms with Enter. Selections and erasures
//! are reported to the host over an event channel.
//!
//! Rendering is the host's business. The engine only publishes the state a
//! renderer needs ([`AutocompleteEngine::view`]) plus a [`ScrollSignal`] that
//! keeps the active row in view; [`ListViewport`] applies those signals for
//! hosts that want ready-made scroll arithmetic.
//!
//! Key and pointer types live in the `lite-complete-input` crate and are
//! re-exported here.

pub mod config;
pub mod debouncer;
pub mod engine;
pub mod event_channel;
pub mod filter;
pub mod item;
// Chunk: docs/chunks/list_viewport - Max-height scroll model for the result list
pub mod list_viewport;
pub mod navigation;
pub mod scroll_sync;

pub use config::{AutocompleteConfig, ConfigError, EngineOptions};
pub use debouncer::{InputDebouncer, DEFAULT_DEBOUNCE_MS};
pub use engine::{AutocompleteEngine, AutocompleteView, Handled};
pub use event_channel::{create_event_channel, AutocompleteEvent, EventReceiver, EventSender};
pub use filter::{filter_items, filter_positions, is_query_too_short, query_length};
pub use item::{Item, ItemCatalog, ItemId};
pub use list_viewport::ListViewport;
pub use navigation::{Direction, NavTransition, NavigationState};
pub use scroll_sync::{ScrollSignal, DEFAULT_ROW_HEIGHT};

pub use lite_complete_input::{Key, KeyEvent, Modifiers, PointerEventKind};
