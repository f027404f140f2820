//! The action surface: accelerate, brake, refuel, and the periodic tick.

use dash_bus::{EventKind, Listener, NotificationBus, SubscriberId};
use dash_core::{Snapshot, Tick};

use crate::{ControlError, ControlResult, SimulationState};

/// Owns the vehicle state and the notification bus, and exposes the four
/// operations allowed to mutate the state.
///
/// Every operation is a finite synchronous transaction: validate, mutate,
/// then publish exactly one [`EventKind::Update`] carrying the
/// post-mutation snapshot.  A failed precondition aborts before mutating
/// and publishes nothing.  There are no suspension points — each method
/// completes before the caller regains control, which is what makes a tick
/// and a user action atomic relative to each other.
pub struct VehicleController {
    state:   SimulationState,
    bus:     NotificationBus,
    elapsed: Tick,
}

impl VehicleController {
    /// A controller for a fresh vehicle: at rest, full tank, cold engine.
    ///
    /// The state record is created here, owned here, and mutated nowhere
    /// else — there is no ambient/global instance.
    pub fn new() -> Self {
        Self {
            state:   SimulationState::new(),
            bus:     NotificationBus::new(),
            elapsed: Tick::ZERO,
        }
    }

    // ── Subscription ──────────────────────────────────────────────────────

    /// Register a listener for update events.  Listeners are notified in
    /// registration order.
    pub fn subscribe(&mut self, listener: Box<dyn Listener>) -> SubscriberId {
        self.bus.subscribe(EventKind::Update, listener)
    }

    /// Drop a previously registered listener.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.bus.unsubscribe(id)
    }

    // ── Read accessors ────────────────────────────────────────────────────

    /// Current gauge values.
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// The vehicle state, read-only.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// How many ticks this controller has processed.  Elapsed time is
    /// observability, not part of the resettable record: refuel leaves it
    /// untouched.
    pub fn elapsed(&self) -> Tick {
        self.elapsed
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Speed up by one step.
    ///
    /// Precondition: the tank is not empty.  On an empty tank this returns
    /// [`ControlError::FuelEmpty`] with no mutation and no notification,
    /// and is never retried internally.
    pub fn accelerate(&mut self) -> ControlResult<Snapshot> {
        if !self.state.has_fuel() {
            return Err(ControlError::FuelEmpty);
        }
        self.state.raise_speed();
        self.publish()
    }

    /// Slow down by one step, stopping at 0.  No fuel precondition.
    pub fn brake(&mut self) -> ControlResult<Snapshot> {
        self.state.lower_speed();
        self.publish()
    }

    /// Restore the initial record: at rest, full tank, cold engine,
    /// odometer zeroed.  Total — there is no state in which this fails
    /// short of a failing listener.
    pub fn refuel(&mut self) -> ControlResult<Snapshot> {
        self.state.reset();
        self.publish()
    }

    /// One discrete time step.  The caller owns the cadence (reference:
    /// once per second); the controller only applies the transition.
    ///
    /// Always publishes, even when the vehicle is at rest and cold — the
    /// update stream carries one event per tick regardless of change.
    pub fn tick(&mut self) -> ControlResult<Snapshot> {
        self.state.advance_tick();
        self.elapsed = self.elapsed.offset(1);
        self.publish()
    }

    /// Publish the post-mutation snapshot.
    ///
    /// The mutation has already committed by the time this runs: a failing
    /// listener surfaces as [`ControlError::Notify`] but rolls nothing
    /// back.
    fn publish(&mut self) -> ControlResult<Snapshot> {
        let snapshot = self.state.snapshot();
        self.bus.publish(EventKind::Update, &snapshot)?;
        Ok(snapshot)
    }
}

impl Default for VehicleController {
    fn default() -> Self {
        Self::new()
    }
}
