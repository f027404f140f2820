//! `dash-core` — foundational types for the dash vehicle simulation.
//!
//! This crate is a dependency of every other `dash-*` crate.  It has no
//! `dash-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                    |
//! |--------------|---------------------------------------------|
//! | [`snapshot`] | `Snapshot` — the five-gauge payload         |
//! | [`time`]     | `Tick` counter, `Cadence` of the driver     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod snapshot;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use snapshot::Snapshot;
pub use time::{Cadence, Tick};
