//! The `NotificationBus` and its subscription handles.

use std::collections::HashMap;
use std::fmt;

use dash_core::Snapshot;

use crate::{BusError, BusResult, EventKind, Listener};

/// Handle identifying one subscription, unique for the lifetime of the bus.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SubscriberId(pub u32);

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriberId({})", self.0)
    }
}

struct Subscriber {
    id:       SubscriberId,
    listener: Box<dyn Listener>,
}

/// Synchronous publish/subscribe channel.
///
/// Listeners for an event kind are invoked in registration order, each call
/// running to completion before the next.  Publishing a kind with no
/// subscribers is a no-op, not an error.
#[derive(Default)]
pub struct NotificationBus {
    subscribers: HashMap<EventKind, Vec<Subscriber>>,
    next_id:     u32,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `kind`, behind all earlier registrations for
    /// that kind.
    pub fn subscribe(&mut self, kind: EventKind, listener: Box<dyn Listener>) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers
            .entry(kind)
            .or_default()
            .push(Subscriber { id, listener });
        id
    }

    /// Remove the subscription `id`, returning whether anything was removed.
    ///
    /// The relative order of the remaining listeners is unchanged.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        for subs in self.subscribers.values_mut() {
            if let Some(pos) = subs.iter().position(|s| s.id == id) {
                subs.remove(pos);
                return true;
            }
        }
        false
    }

    /// Number of live subscriptions for `kind`.
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers.get(&kind).map_or(0, Vec::len)
    }

    /// Invoke every listener registered for `kind`, in registration order,
    /// passing `snapshot` unchanged.
    ///
    /// The first listener error aborts the remaining notifications for this
    /// call and is returned to the publisher; the failing listener stays
    /// subscribed.
    pub fn publish(&mut self, kind: EventKind, snapshot: &Snapshot) -> BusResult<()> {
        let Some(subs) = self.subscribers.get_mut(&kind) else {
            return Ok(());
        };
        for sub in subs.iter_mut() {
            sub.listener
                .on_event(kind, snapshot)
                .map_err(|source| BusError::Listener { id: sub.id, source })?;
        }
        Ok(())
    }
}
