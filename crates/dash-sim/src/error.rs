//! Error types for dash-sim.

use dash_bus::BusError;
use thiserror::Error;

/// Errors surfaced by [`VehicleController`][crate::VehicleController]
/// operations.
#[derive(Debug, Error)]
pub enum ControlError {
    /// `accelerate` was called with an empty tank.  Nothing was mutated and
    /// nothing was published; the caller decides whether to refuel.
    #[error("cannot accelerate: fuel is empty")]
    FuelEmpty,

    /// A listener failed while the update was being published.  The state
    /// mutation had already committed and is not rolled back.
    #[error("update notification failed: {0}")]
    Notify(#[from] BusError),
}

/// Alias for `Result<T, ControlError>`.
pub type ControlResult<T> = Result<T, ControlError>;
