//! Error types for dash-bus.

use thiserror::Error;

use crate::bus::SubscriberId;
use crate::listener::ListenerError;

/// Errors surfaced by the notification bus.
#[derive(Debug, Error)]
pub enum BusError {
    /// A listener failed during publish.  Listeners registered after `id`
    /// were not notified for that publish call; `id` stays subscribed.
    #[error("listener {id} failed during publish: {source}")]
    Listener {
        id:     SubscriberId,
        source: ListenerError,
    },
}

/// Alias for `Result<T, BusError>`.
pub type BusResult<T> = Result<T, BusError>;
