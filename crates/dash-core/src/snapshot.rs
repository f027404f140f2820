//! The five-gauge snapshot published to listeners.

/// An immutable copy of all five gauge values at a point in time.
///
/// Every state change publishes one `Snapshot`, passed to listeners
/// unchanged.  The `fuel` field is the raw stored value and may be slightly
/// negative right after the tank runs dry — clamping to 0 is a display
/// concern and happens in the presentation layer, never here.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Road speed in km/h.  Changes only in ±10 steps; no upper bound.
    pub speed: u32,
    /// Engine speed in rpm: min(speed × 50, 7000), derived from speed.
    pub rpm: u32,
    /// Tank level as a percentage of a full tank.
    pub fuel: f64,
    /// Engine temperature in °C, held to [0, 100].
    pub temperature: u32,
    /// Odometer in km.  Never decreases except on refuel, which zeroes it.
    pub distance: f64,
}

impl Snapshot {
    /// The record a vehicle starts with and returns to on refuel: at rest,
    /// full tank, cold engine, odometer zeroed.
    pub const INITIAL: Snapshot = Snapshot {
        speed:       0,
        rpm:         0,
        fuel:        100.0,
        temperature: 0,
        distance:    0.0,
    };
}
