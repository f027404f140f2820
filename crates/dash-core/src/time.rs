//! Elapsed-time accounting.
//!
//! # Design
//!
//! The simulation core never owns a timer.  An external driver calls the
//! controller's `tick` operation on whatever cadence it likes (reference:
//! once per second) and [`Tick`] just counts how many times that has
//! happened.  [`Cadence`] carries the driver's period as a value so demo
//! drivers and tests agree on how much real time a tick stands for without
//! the core ever scheduling anything itself.

use std::fmt;
use std::time::Duration;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Number of tick invocations processed since the controller was created.
///
/// Stored as `u64`: at the reference cadence of one tick per second a u64
/// lasts ~585 billion years.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Cadence ──────────────────────────────────────────────────────────────────

/// The external driver's tick period.
///
/// Cheap to copy; holds no scheduling machinery.  Whoever drives the
/// controller sleeps (or doesn't) between `tick` calls — the core only sees
/// the calls.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cadence {
    /// Real time between two consecutive `tick` calls.
    pub period: Duration,
}

impl Cadence {
    /// The reference cadence: one tick per second.
    pub const fn per_second() -> Cadence {
        Cadence { period: Duration::from_secs(1) }
    }

    /// A cadence with an arbitrary period.
    pub const fn every(period: Duration) -> Cadence {
        Cadence { period }
    }

    /// How much real time `ticks` cover at this cadence.
    pub fn span(self, ticks: Tick) -> Duration {
        Duration::from_secs_f64(self.period.as_secs_f64() * ticks.0 as f64)
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Cadence::per_second()
    }
}
