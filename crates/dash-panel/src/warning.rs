//! Threshold warnings with per-light hysteresis.
//!
//! Each warning behaves like an indicator light: it fires when its metric
//! crosses the threshold, then stays quiet while the condition holds, and
//! re-arms only once the metric returns across the threshold.  Without
//! this, a vehicle cruising at 90 km/h would raise the same overspeed
//! warning on every tick.

use std::fmt;

use dash_core::Snapshot;

/// Warn above this road speed (km/h).
pub const OVERSPEED_KMH: u32 = 80;

/// Warn below this tank level (percent).
pub const LOW_FUEL_PCT: f64 = 20.0;

/// Warn above this engine temperature (°C).
pub const OVERHEAT_C: u32 = 90;

/// A user-facing warning raised by a threshold crossing.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Warning {
    /// Speed above [`OVERSPEED_KMH`].
    Overspeed,
    /// Fuel below [`LOW_FUEL_PCT`] but not yet empty.
    LowFuel,
    /// Fuel at or below zero.  Independent of [`Warning::LowFuel`].
    FuelEmpty,
    /// Temperature above [`OVERHEAT_C`].
    Overheat,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Warning::Overspeed => "Speed limit exceeded! Reduce speed immediately.",
            Warning::LowFuel   => "Fuel is almost empty!",
            Warning::FuelEmpty => "Fuel is empty! Refuel now.",
            Warning::Overheat  => "Engine is overheating! Stop and cool down.",
        };
        f.write_str(message)
    }
}

/// Tracks which warning lights are currently lit.
///
/// [`scan`][Self::scan] compares a snapshot against the thresholds and
/// returns only the warnings whose light just came on.
#[derive(Default, Debug)]
pub struct WarningLights {
    overspeed:  bool,
    low_fuel:   bool,
    fuel_empty: bool,
    overheat:   bool,
}

impl WarningLights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare `snapshot` against the thresholds, returning the warnings
    /// that fired on this scan in gauge order.
    pub fn scan(&mut self, snapshot: &Snapshot) -> Vec<Warning> {
        let mut fired = Vec::new();
        edge(&mut self.overspeed, snapshot.speed > OVERSPEED_KMH, Warning::Overspeed, &mut fired);
        edge(&mut self.low_fuel, snapshot.fuel < LOW_FUEL_PCT, Warning::LowFuel, &mut fired);
        edge(&mut self.fuel_empty, snapshot.fuel <= 0.0, Warning::FuelEmpty, &mut fired);
        edge(&mut self.overheat, snapshot.temperature > OVERHEAT_C, Warning::Overheat, &mut fired);
        fired
    }

    /// Whether `warning`'s light is currently lit.
    pub fn is_lit(&self, warning: Warning) -> bool {
        match warning {
            Warning::Overspeed => self.overspeed,
            Warning::LowFuel   => self.low_fuel,
            Warning::FuelEmpty => self.fuel_empty,
            Warning::Overheat  => self.overheat,
        }
    }
}

/// Rising-edge detector: fire when the condition turns on while the light
/// is unlit; re-arm as soon as the condition clears.
fn edge(lit: &mut bool, active: bool, warning: Warning, fired: &mut Vec<Warning>) {
    if active && !*lit {
        *lit = true;
        fired.push(warning);
    } else if !active {
        *lit = false;
    }
}
