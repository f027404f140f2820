//! Tuning constants for the vehicle state machine.

/// Speed change per accelerate or brake action (km/h).
pub const SPEED_STEP_KMH: u32 = 10;

/// Engine speed per unit of road speed (rpm per km/h).
pub const RPM_PER_KMH: u32 = 50;

/// Rev limiter — reported rpm is clamped here regardless of speed.
pub const RPM_REDLINE: u32 = 7_000;

/// Tank level of a freshly refueled vehicle (percent).
pub const FULL_TANK_PCT: f64 = 100.0;

/// Tank percent burned per km/h of speed on every moving tick.
///
/// At 100 km/h this drains 1% per tick, emptying a full tank in 100 ticks.
// TODO: revisit the burn rate — it reads like a 0.1 consumption factor
// discounted by another 0.1 where a single 0.1 was meant.  Changing it
// alters every drain-timing property, so it stays until that is settled.
pub const FUEL_BURN_PCT_PER_KMH: f64 = 0.01;

/// Odometer km added per km/h of speed on every moving tick.
pub const KM_PER_KMH_TICK: f64 = 0.1;

/// Engine heating per moving tick, and cooling per resting tick (°C).
pub const TEMP_STEP_C: u32 = 5;

/// Temperature ceiling (°C) — the gauge never reads hotter than this.
pub const TEMP_MAX_C: u32 = 100;
