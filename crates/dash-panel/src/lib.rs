//! `dash-panel` — the presentation layer of the dash vehicle simulation.
//!
//! Consumes the core's update stream through the bus and owns everything
//! user-facing: display rounding, clamping a transiently negative tank
//! reading to 0, and the four threshold warnings with per-light hysteresis
//! so a warning fires once per crossing instead of once per tick.
//!
//! | Module      | Contents                                        |
//! |-------------|-------------------------------------------------|
//! | [`format`]  | Display rounding/clamping, the gauge line       |
//! | [`warning`] | `Warning`, `WarningLights`, thresholds          |
//! | [`panel`]   | `TextPanel` — a `Listener` rendering to a sink  |

pub mod format;
pub mod panel;
pub mod warning;


pub use panel::TextPanel;
pub use warning::{Warning, WarningLights};
