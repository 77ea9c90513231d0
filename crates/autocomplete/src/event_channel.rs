// Chunk: docs/chunks/outbound_events - itemSelected / inputErased notifications
//!
//! Outbound event channel.
//!
//! The engine reports selections and erasures by sending
//! [`AutocompleteEvent`]s on a channel that the host drains after each
//! processed input. Sending never blocks and never waits for acknowledgement.
//!
//! # Design
//!
//! We use an unbounded `crossbeam_channel` because:
//! - The engine must never block on a slow host
//! - The sender can keep a receiving handle of its own, so undelivered
//!   events are discarded when the engine is torn down
//!
//! That sender-side handle keeps the channel connected, so disconnection
//! cannot tell the sender that the host went away. Host receivers instead
//! share a liveness token; once every [`EventReceiver`] is dropped the
//! sender stops queueing and logs each dropped event.

use std::sync::{Arc, Weak};

use crossbeam_channel::{Receiver, Sender, TryIter};

/// Events emitted by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum AutocompleteEvent<P> {
    /// The user confirmed an item; carries the item's payload verbatim
    ItemSelected(P),
    /// The user cleared the input (Escape or the erase button)
    InputErased,
}

/// Sender half of the event channel, owned by the engine.
#[derive(Debug)]
pub struct EventSender<P> {
    sender: Sender<AutocompleteEvent<P>>,
    /// Sender-side view of the queue, for discarding the backlog
    backlog: Receiver<AutocompleteEvent<P>>,
    /// Upgrades while at least one host receiver is alive
    host: Weak<()>,
}

/// Receiver half of the event channel, held by the host.
///
/// Cloning a receiver does not duplicate events: each event is delivered to
/// exactly one receiver. The channel counts as open while any clone is alive.
#[derive(Debug)]
pub struct EventReceiver<P> {
    receiver: Receiver<AutocompleteEvent<P>>,
    _alive: Arc<()>,
}

/// Creates a new event channel pair.
pub fn create_event_channel<P>() -> (EventSender<P>, EventReceiver<P>) {
    let (sender, receiver) = crossbeam_channel::unbounded();
    let alive = Arc::new(());
    let events = EventSender {
        sender,
        backlog: receiver.clone(),
        host: Arc::downgrade(&alive),
    };
    (
        events,
        EventReceiver {
            receiver,
            _alive: alive,
        },
    )
}

impl<P> EventSender<P> {
    /// Sends an item-selected event.
    pub fn send_item_selected(&self, payload: P) {
        self.send(AutocompleteEvent::ItemSelected(payload));
    }

    /// Sends an input-erased event.
    pub fn send_input_erased(&self) {
        self.send(AutocompleteEvent::InputErased);
    }

    /// Returns true while the host holds at least one receiver.
    pub fn has_receiver(&self) -> bool {
        self.host.strong_count() > 0
    }

    /// Returns the number of events queued and not yet drained.
    pub fn len(&self) -> usize {
        self.backlog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backlog.is_empty()
    }

    /// Discards all queued events, returning how many were dropped.
    pub fn discard_pending(&self) -> usize {
        self.backlog.try_iter().count()
    }

    fn send(&self, event: AutocompleteEvent<P>) {
        // Fire-and-forget: a host that dropped every receiver just misses events
        if !self.has_receiver() {
            let stale = self.discard_pending();
            tracing::warn!(stale, "autocomplete event dropped: no receiver");
            return;
        }
        if self.sender.send(event).is_err() {
            tracing::warn!("autocomplete event dropped: channel closed");
        }
    }
}

impl<P> Clone for EventReceiver<P> {
    fn clone(&self) -> Self {
        Self {
            receiver: self.receiver.clone(),
            _alive: Arc::clone(&self._alive),
        }
    }
}

impl<P> EventReceiver<P> {
    /// Attempts to receive an event without blocking.
    pub fn try_recv(&self) -> Option<AutocompleteEvent<P>> {
        self.receiver.try_recv().ok()
    }

    /// Drains all pending events without blocking.
    pub fn drain(&self) -> TryIter<'_, AutocompleteEvent<P>> {
        self.receiver.try_iter()
    }

    /// Discards all pending events, returning how many were dropped.
    pub fn discard_pending(&self) -> usize {
        self.receiver.try_iter().count()
    }

    /// Returns the number of events waiting to be drained.
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}
