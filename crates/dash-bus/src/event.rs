//! Event kinds carried by the bus.

use std::fmt;

/// The kinds of event a listener can subscribe to.
///
/// The dashboard protocol has a single kind: every mutation of the vehicle
/// state publishes one `Update` carrying the post-mutation snapshot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EventKind {
    /// The vehicle state changed, through a user action or a tick.
    Update,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Update => write!(f, "update"),
        }
    }
}
