//! `TextPanel<W>` — a listener that renders updates to a text sink.

use std::io::Write;

use dash_bus::{EventKind, Listener, ListenerResult};
use dash_core::Snapshot;

use crate::format::gauge_line;
use crate::warning::WarningLights;

/// A [`Listener`] that renders each update as one gauge line plus any
/// newly-fired warnings.
///
/// I/O errors propagate through the bus to whoever published the update —
/// a dead terminal is a delivery failure the publisher should see.
pub struct TextPanel<W: Write> {
    out:    W,
    lights: WarningLights,
}

impl<W: Write> TextPanel<W> {
    pub fn new(out: W) -> Self {
        Self { out, lights: WarningLights::new() }
    }

    /// The warning lights, read-only — e.g. to check what is lit after a
    /// scripted drive.
    pub fn lights(&self) -> &WarningLights {
        &self.lights
    }

    /// Unwrap the inner sink (e.g. to inspect a buffer in tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Listener for TextPanel<W> {
    fn on_event(&mut self, _kind: EventKind, snapshot: &Snapshot) -> ListenerResult {
        writeln!(self.out, "{}", gauge_line(snapshot))?;
        for warning in self.lights.scan(snapshot) {
            writeln!(self.out, "  !! {warning}")?;
        }
        Ok(())
    }
}
