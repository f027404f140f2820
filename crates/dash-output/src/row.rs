//! Plain data rows written by recorder backends.

/// One dashboard update as written to disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateRow {
    /// Position of this update in the event stream (0-based).
    pub seq:           u64,
    pub speed_kmh:     u32,
    pub rpm:           u32,
    /// Raw tank level — negative values are written as-is; clamping is the
    /// reader's choice.
    pub fuel_pct:      f64,
    pub temperature_c: u32,
    pub distance_km:   f64,
}
