// Chunk: docs/chunks/selector_widget - Reusable selector interaction model
// Chunk: docs/chunks/query_debounce - Debounced query commits
//!
//! The autocomplete engine façade.
//!
//! [`AutocompleteEngine`] composes the debouncer, the prefix filter, the
//! navigation state machine and the scroll signal into the contract a host
//! talks to:
//!
//! ```text
//! raw text ──→ InputDebouncer ──→ committed query ──→ filter ──→ filtered
//!                                                                   │
//! key / pointer events ──→ NavigationState ←── list changed ────────┘
//!                               │
//!                               ├──→ ScrollSignal
//!                               └──→ EventSender (itemSelected / inputErased)
//! ```
//!
//! Following the humble-view approach, the engine is pure interaction state.
//! It never touches a clock, a timer, or a widget toolkit: time is passed in
//! as `now`, the host wakes up at [`AutocompleteEngine::next_deadline`] and
//! calls [`AutocompleteEngine::poll`], and renders from
//! [`AutocompleteEngine::view`] after every processed event.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use lite_complete::{AutocompleteConfig, AutocompleteEngine, AutocompleteEvent, Item};
//! use lite_complete_input::{Key, KeyEvent};
//!
//! let config = AutocompleteConfig::with_items(vec![Item::new("Pizza", 1), Item::new("Pie", 2)]);
//! let (mut engine, events) = AutocompleteEngine::new(config);
//!
//! let start = Instant::now();
//! engine.on_raw_input("piz", start);
//! engine.poll(start + Duration::from_millis(250));
//! assert_eq!(engine.filtered().len(), 1);
//!
//! engine.on_key(&KeyEvent::plain(Key::Down));
//! engine.on_key(&KeyEvent::plain(Key::Return));
//! assert_eq!(events.try_recv(), Some(AutocompleteEvent::ItemSelected(1)));
//! assert_eq!(engine.input_text(), "Pizza");
//! ```

use std::time::Instant;

use lite_complete_input::{Key, KeyEvent, PointerEventKind};
use tracing::{debug, trace};

use crate::config::{AutocompleteConfig, EngineOptions};
use crate::debouncer::InputDebouncer;
use crate::event_channel::{create_event_channel, EventReceiver, EventSender};
use crate::filter::{filter_positions, is_query_too_short};
use crate::item::{Item, ItemId};
use crate::navigation::{Direction, NavigationState};
use crate::scroll_sync::ScrollSignal;

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The event was handled by the engine
    Yes,
    /// The event was not handled (should propagate or be ignored)
    No,
}

/// Read-only snapshot of everything a renderer needs.
#[derive(Debug)]
pub struct AutocompleteView<'a, P> {
    pub placeholder: &'a str,
    /// The text currently shown in the input (may be ahead of the query)
    pub input_text: &'a str,
    pub filtered: Vec<&'a Item<P>>,
    pub active: Option<&'a Item<P>>,
    pub active_index: Option<usize>,
    pub scroll_signal: ScrollSignal,
    pub border_active: bool,
    /// True when the committed query is shorter than `minCharacters`
    pub query_too_short: bool,
}

/// Filter-as-you-type selector engine.
///
/// Owned exclusively by its host; every method takes `&mut self`, so events
/// are serialized by construction. Dropping the engine cancels the pending
/// debounce deadline and discards events nobody drained.
#[derive(Debug)]
pub struct AutocompleteEngine<P = serde_json::Value> {
    config: AutocompleteConfig<P>,
    options: EngineOptions,
    /// Text shown in the input, updated on every raw change
    input_text: String,
    /// Last committed query; `filtered` is always derived from it
    query: String,
    debouncer: InputDebouncer,
    /// Catalog positions of the visible results
    filtered: Vec<usize>,
    navigation: NavigationState,
    /// Scroll adjustment produced by the last processed event
    scroll_signal: ScrollSignal,
    border_active: bool,
    events: EventSender<P>,
}

impl<P: Clone> AutocompleteEngine<P> {
    /// Creates an engine for its first configuration, with default options.
    ///
    /// Returns the engine and the receiver the host drains for
    /// [`AutocompleteEvent`](crate::AutocompleteEvent)s.
    pub fn new(config: AutocompleteConfig<P>) -> (Self, EventReceiver<P>) {
        Self::with_options(config, EngineOptions::default())
    }

    /// Creates an engine with explicit debounce window and row height.
    ///
    /// The configuration's initial value (or the empty string) is committed
    /// immediately, without waiting for the debounce window.
    pub fn with_options(
        config: AutocompleteConfig<P>,
        options: EngineOptions,
    ) -> (Self, EventReceiver<P>) {
        let (events, receiver) = create_event_channel();
        let mut debouncer = InputDebouncer::with_duration(options.debounce);
        let initial = debouncer.activate(config.initial_value.as_deref());

        let mut engine = Self {
            config,
            options,
            input_text: initial.clone(),
            query: initial,
            debouncer,
            filtered: Vec::new(),
            navigation: NavigationState::new(),
            scroll_signal: ScrollSignal::None,
            border_active: false,
            events,
        };
        engine.refilter();
        debug!(
            query = %engine.query,
            items = engine.config.items.len(),
            results = engine.filtered.len(),
            "autocomplete engine activated"
        );
        (engine, receiver)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replaces the configuration wholesale.
    ///
    /// The committed query is re-applied to the new catalog and the active
    /// item is dropped if it is no longer among the results. The pending
    /// debounce deadline is cancelled; text the user typed but that was not
    /// committed yet is kept and gets a fresh debounce window starting at `now`.
    pub fn set_configuration(&mut self, config: AutocompleteConfig<P>, now: Instant) {
        let carried = self.debouncer.cancel();
        self.config = config;
        self.scroll_signal = ScrollSignal::None;
        self.refilter();

        if let Some(text) = &carried {
            self.debouncer.schedule(text, now);
        }
        debug!(
            items = self.config.items.len(),
            min_characters = self.config.min_characters,
            max_results = self.config.max_results,
            results = self.filtered.len(),
            carried_input = carried.is_some(),
            "configuration replaced"
        );
    }

    pub fn config(&self) -> &AutocompleteConfig<P> {
        &self.config
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    // =========================================================================
    // Text input and the debounce timer
    // =========================================================================

    /// Feeds a raw text change (the full input text after the change).
    ///
    /// The text is shown immediately but only committed as the query once the
    /// debounce window passes without another change.
    pub fn on_raw_input(&mut self, text: &str, now: Instant) {
        self.scroll_signal = ScrollSignal::None;
        self.input_text = text.to_string();
        if self.debouncer.register(text, now) {
            trace!(text, "raw input registered");
        } else {
            trace!(text, "duplicate raw input dropped");
        }
    }

    /// Returns when the host should call [`poll`](Self::poll) next.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.next_deadline()
    }

    /// Fires the debounce timer if it is due.
    ///
    /// Returns true if a new query was committed (and `filtered` recomputed).
    /// A timer tick is never directional, so the scroll signal is cleared
    /// whether or not anything fires.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.scroll_signal = ScrollSignal::None;
        match self.debouncer.flush_ready(now) {
            Some(text) => self.commit(text),
            None => false,
        }
    }

    // =========================================================================
    // Keyboard and pointer
    // =========================================================================

    /// Handles a key press.
    ///
    /// # Behavior
    ///
    /// - **Up / Down**: moves the active item with wraparound.
    /// - **Enter**: selects the active item (no-op when nothing is active).
    /// - **Escape**: erases the input.
    /// - **All other keys**: ignored, returns `Handled::No`.
    ///
    /// Modifiers are not considered.
    pub fn on_key(&mut self, event: &KeyEvent) -> Handled {
        self.scroll_signal = ScrollSignal::None;
        match event.key {
            Key::Up => self.navigate(Direction::Up),
            Key::Down => self.navigate(Direction::Down),
            Key::Return => {
                if let Some(id) = self.navigation.active() {
                    self.select(id);
                }
            }
            Key::Escape => self.erase(),
            _ => {
                trace!(key = ?event.key, "key ignored");
                return Handled::No;
            }
        }
        Handled::Yes
    }

    /// Makes the hovered item active.
    ///
    /// Items that are not among the current results are ignored. Returns true
    /// if the active item changed.
    pub fn on_hover(&mut self, id: ItemId) -> bool {
        self.scroll_signal = ScrollSignal::None;
        let ids = self.filtered_ids();
        self.navigation.hover(id, &ids)
    }

    /// Selects the clicked item.
    ///
    /// Returns false (and emits nothing) if the item is not among the
    /// current results.
    pub fn on_click(&mut self, id: ItemId) -> bool {
        self.scroll_signal = ScrollSignal::None;
        self.select(id)
    }

    /// Routes a pointer event to [`on_hover`](Self::on_hover) or
    /// [`on_click`](Self::on_click).
    pub fn on_pointer(&mut self, kind: PointerEventKind, id: ItemId) -> bool {
        match kind {
            PointerEventKind::Hover => self.on_hover(id),
            PointerEventKind::Click => self.on_click(id),
        }
    }

    /// The input gained focus.
    pub fn on_focus(&mut self) {
        self.scroll_signal = ScrollSignal::None;
        self.border_active = true;
    }

    /// The input lost focus.
    pub fn on_blur(&mut self) {
        self.scroll_signal = ScrollSignal::None;
        self.border_active = false;
    }

    /// Clears the input (Escape or the erase button).
    ///
    /// Emits `InputErased`, drops the active item and commits the empty query
    /// immediately.
    pub fn erase(&mut self) {
        self.scroll_signal = ScrollSignal::None;
        self.events.send_input_erased();
        debug!("input erased");
        self.navigation.clear();
        self.border_active = false;
        self.force_input(String::new());
    }

    /// Tears the engine down.
    ///
    /// Equivalent to dropping it: the pending debounce deadline is cancelled
    /// and events the host has not drained yet are discarded.
    pub fn teardown(self) {}

    // =========================================================================
    // State
    // =========================================================================

    /// The last committed query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The text currently shown in the input.
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    /// The current results, in catalog order.
    pub fn filtered(&self) -> Vec<&Item<P>> {
        let items = self.config.items.items();
        self.filtered.iter().map(|&position| &items[position]).collect()
    }

    /// Identities of the current results, in order.
    pub fn filtered_ids(&self) -> Vec<ItemId> {
        let items = self.config.items.items();
        self.filtered.iter().map(|&position| items[position].id()).collect()
    }

    /// The active item, if any. Always one of [`filtered`](Self::filtered).
    pub fn active(&self) -> Option<&Item<P>> {
        let id = self.navigation.active()?;
        self.config.items.get(id)
    }

    /// Position of the active item within the current results.
    pub fn active_index(&self) -> Option<usize> {
        self.navigation.active_index(&self.filtered_ids())
    }

    /// Scroll adjustment produced by the last processed event.
    pub fn scroll_signal(&self) -> ScrollSignal {
        self.scroll_signal
    }

    pub fn border_active(&self) -> bool {
        self.border_active
    }

    /// True when no result is shown because the query is too short.
    pub fn is_query_too_short(&self) -> bool {
        is_query_too_short(&self.query, self.config.min_characters)
    }

    /// Snapshot of the state a renderer needs.
    pub fn view(&self) -> AutocompleteView<'_, P> {
        AutocompleteView {
            placeholder: &self.config.placeholder,
            input_text: &self.input_text,
            filtered: self.filtered(),
            active: self.active(),
            active_index: self.active_index(),
            scroll_signal: self.scroll_signal,
            border_active: self.border_active,
            query_too_short: self.is_query_too_short(),
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn navigate(&mut self, direction: Direction) {
        let ids = self.filtered_ids();
        let transition = self.navigation.step(direction, &ids);
        self.scroll_signal = ScrollSignal::for_step(direction, transition, self.options.row_height);
        trace!(?direction, ?transition, signal = ?self.scroll_signal, "navigated");
    }

    /// Confirms `id`: emits its payload and resets the input.
    fn select(&mut self, id: ItemId) -> bool {
        let Some(item) = self.filtered_item(id) else {
            return false;
        };
        let payload = item.payload().clone();
        let text = if self.config.clear_on_select {
            String::new()
        } else {
            item.name().to_string()
        };

        debug!(item = %id, "item selected");
        self.events.send_item_selected(payload);
        self.navigation.clear();
        self.border_active = false;
        self.force_input(text);
        true
    }

    fn filtered_item(&self, id: ItemId) -> Option<&Item<P>> {
        let items = self.config.items.items();
        self.filtered
            .iter()
            .map(|&position| &items[position])
            .find(|item| item.id() == id)
    }

    /// Sets the input text and commits it without waiting for the window.
    fn force_input(&mut self, text: String) {
        if self.debouncer.reset(&text) {
            debug!("pending query cancelled");
        }
        self.input_text = text.clone();
        self.commit(text);
    }

    /// Commits `text` as the query. Returns false if it is unchanged.
    fn commit(&mut self, text: String) -> bool {
        if text == self.query {
            return false;
        }
        self.query = text;
        self.refilter();
        debug!(query = %self.query, results = self.filtered.len(), "query committed");
        true
    }

    /// Recomputes `filtered` from the committed query and re-validates the
    /// active item against it.
    fn refilter(&mut self) {
        self.filtered = filter_positions(
            &self.config.items,
            &self.query,
            self.config.min_characters,
            self.config.max_results,
        );
        let ids = self.filtered_ids();
        if self.navigation.sync_with(&ids) {
            trace!("active item left the results");
        }
    }
}

impl<P> Drop for AutocompleteEngine<P> {
    fn drop(&mut self) {
        if self.debouncer.cancel().is_some() {
            debug!("pending query cancelled on teardown");
        }
        let dropped = self.events.discard_pending();
        if dropped > 0 {
            debug!(dropped, "undelivered events discarded on teardown");
        }
    }
}
