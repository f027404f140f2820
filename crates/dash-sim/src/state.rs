//! The vehicle's numeric state and its transition functions.

use dash_core::Snapshot;

use crate::params::{
    FUEL_BURN_PCT_PER_KMH, FULL_TANK_PCT, KM_PER_KMH_TICK, RPM_PER_KMH, RPM_REDLINE,
    SPEED_STEP_KMH, TEMP_MAX_C, TEMP_STEP_C,
};

/// The single mutable record behind the dashboard: road speed, tank level,
/// engine temperature, odometer.  Engine rpm is a pure function of speed,
/// computed on read and never stored.
///
/// Fields are private and the transitions are crate-internal: external code
/// reads through the accessors (or [`snapshot`][Self::snapshot]) and
/// mutates only through [`VehicleController`][crate::VehicleController].
/// Created once per controller; `reset` re-initializes in place.
pub struct SimulationState {
    speed_kmh:     u32,
    fuel_pct:      f64,
    temperature_c: u32,
    distance_km:   f64,
}

impl SimulationState {
    /// A vehicle at rest with a full tank and a cold engine.
    pub(crate) fn new() -> Self {
        Self {
            speed_kmh:     0,
            fuel_pct:      FULL_TANK_PCT,
            temperature_c: 0,
            distance_km:   0.0,
        }
    }

    // ── Read accessors ────────────────────────────────────────────────────

    /// Road speed in km/h.
    #[inline]
    pub fn speed(&self) -> u32 {
        self.speed_kmh
    }

    /// Engine speed: min(speed × 50, 7000).
    #[inline]
    pub fn rpm(&self) -> u32 {
        self.speed_kmh.saturating_mul(RPM_PER_KMH).min(RPM_REDLINE)
    }

    /// Raw tank level in percent.  May be slightly negative right after
    /// running dry; clamping to 0 is a display concern.
    #[inline]
    pub fn fuel(&self) -> f64 {
        self.fuel_pct
    }

    /// Engine temperature in °C, always within [0, 100].
    #[inline]
    pub fn temperature(&self) -> u32 {
        self.temperature_c
    }

    /// Odometer in km.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance_km
    }

    /// Whether the tank still has fuel to burn.
    #[inline]
    pub fn has_fuel(&self) -> bool {
        self.fuel_pct > 0.0
    }

    /// Copy of all five gauges at this instant.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            speed:       self.speed_kmh,
            rpm:         self.rpm(),
            fuel:        self.fuel_pct,
            temperature: self.temperature_c,
            distance:    self.distance_km,
        }
    }

    // ── Transitions (controller-only) ─────────────────────────────────────

    /// One discrete time step under the current speed.
    ///
    /// Moving: burn fuel, advance the odometer, heat the engine one step
    /// toward its ceiling.  At rest: cool a warm engine one step toward 0.
    /// Runs to completion — there is no partially-applied tick.
    pub(crate) fn advance_tick(&mut self) {
        if self.speed_kmh > 0 {
            self.fuel_pct -= f64::from(self.speed_kmh) * FUEL_BURN_PCT_PER_KMH;
            self.distance_km += f64::from(self.speed_kmh) * KM_PER_KMH_TICK;
            self.temperature_c = (self.temperature_c + TEMP_STEP_C).min(TEMP_MAX_C);
        } else if self.temperature_c > 0 {
            self.temperature_c = self.temperature_c.saturating_sub(TEMP_STEP_C);
        }
    }

    /// Speed up one step.  Deliberately unclamped above: the rev limiter
    /// caps the rpm gauge and the overspeed warning is a presentation
    /// concern, so nothing here stops the speed itself.
    pub(crate) fn raise_speed(&mut self) {
        self.speed_kmh += SPEED_STEP_KMH;
    }

    /// Slow down one step, stopping at 0.
    pub(crate) fn lower_speed(&mut self) {
        self.speed_kmh = self.speed_kmh.saturating_sub(SPEED_STEP_KMH);
    }

    /// Restore the initial record in place: at rest, full tank, cold
    /// engine, odometer zeroed.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}
