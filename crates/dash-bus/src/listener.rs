//! The `Listener` capability consumed by the bus.

use std::cell::RefCell;
use std::rc::Rc;

use dash_core::Snapshot;

use crate::EventKind;

/// Boxed error type returned by listeners.
///
/// Listeners are foreign code (panels, recorders); the bus does not impose
/// a shared error enum on them.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Shorthand result type for listener callbacks.
pub type ListenerResult = Result<(), ListenerError>;

/// A subscriber callback invoked synchronously on every publish.
///
/// The bus, the simulation state, and the controller all execute on one
/// logical thread with run-to-completion semantics, so implementations
/// carry no `Send`/`Sync` bounds and may freely hold mutable state.
///
/// Returning an error aborts the remaining notifications for that publish
/// call and surfaces at the publisher — see
/// [`NotificationBus::publish`][crate::NotificationBus::publish].
pub trait Listener {
    /// Called once per publish with the payload passed unchanged.
    fn on_event(&mut self, kind: EventKind, snapshot: &Snapshot) -> ListenerResult;
}

/// A [`Listener`] that does nothing.  Use when a subscription slot must be
/// filled but no output is wanted.
pub struct NoopListener;

impl Listener for NoopListener {
    fn on_event(&mut self, _kind: EventKind, _snapshot: &Snapshot) -> ListenerResult {
        Ok(())
    }
}

/// Shared handles forward to the inner listener.
///
/// Lets a driver subscribe a listener and keep a handle to it — e.g. to
/// collect a recorder's buffered error after the drive.  Sound because
/// publish runs to completion on the one logical thread: the `RefCell` is
/// never borrowed re-entrantly unless a listener itself publishes.
impl<L: Listener> Listener for Rc<RefCell<L>> {
    fn on_event(&mut self, kind: EventKind, snapshot: &Snapshot) -> ListenerResult {
        self.borrow_mut().on_event(kind, snapshot)
    }
}
