//! Display rounding and clamping for gauge values.
//!
//! The stored fuel value may dip below zero right after the tank runs dry;
//! it is clamped to 0 here, at render time, never inside the simulation.

use dash_core::Snapshot;

/// Tank level as rendered: rounded to a whole percent, never below 0.
pub fn fuel_display_pct(fuel: f64) -> i64 {
    (fuel.round() as i64).max(0)
}

/// Odometer as rendered: whole kilometers.
pub fn distance_display_km(distance: f64) -> u64 {
    distance.round() as u64
}

/// One-line gauge readout.
pub fn gauge_line(snapshot: &Snapshot) -> String {
    format!(
        "{:>4} km/h | {:>5} rpm | fuel {:>3}% | {:>3} °C | {:>6} km",
        snapshot.speed,
        snapshot.rpm,
        fuel_display_pct(snapshot.fuel),
        snapshot.temperature,
        distance_display_km(snapshot.distance),
    )
}
