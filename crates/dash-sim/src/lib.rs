//! `dash-sim` — the vehicle state machine and its action surface.
//!
//! # One transaction per operation
//!
//! ```text
//! accelerate ─┐
//! brake       ├─► validate ─► mutate SimulationState ─► publish Update
//! refuel      │   (only accelerate can fail validation)
//! tick        ─┘
//! ```
//!
//! [`VehicleController`] owns the single [`SimulationState`] record and the
//! notification bus.  Each operation is a finite synchronous transaction:
//! it validates its precondition, applies the transition, then publishes
//! exactly one update carrying the post-mutation snapshot — or zero if the
//! precondition failed.  Everything runs to completion on the caller's
//! thread, so a tick and a user action can never interleave mid-mutation.
//!
//! The periodic tick is driven externally (reference cadence: once per
//! second); the controller only exposes the `tick` operation.

pub mod controller;
pub mod error;
pub mod params;
pub mod state;

#[cfg(test)]
mod tests;

pub use controller::VehicleController;
pub use error::{ControlError, ControlResult};
pub use state::SimulationState;
