//! `TripRecorder<W>` — bridges the update stream to an `OutputWriter`.

use dash_bus::{EventKind, Listener, ListenerResult};
use dash_core::Snapshot;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, UpdateRow};

/// A [`Listener`] that writes one row per update to any [`OutputWriter`]
/// backend.
///
/// Write errors are stored internally rather than returned through the bus
/// so a full disk does not halt the drive; check
/// [`take_error`][Self::take_error] after the run.  Only the first error is
/// kept.
pub struct TripRecorder<W: OutputWriter> {
    writer:     W,
    seq:        u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TripRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, seq: 0, last_error: None }
    }

    /// Take the stored write error (if any) after the drive.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Updates seen so far, including any whose write failed.
    pub fn updates_seen(&self) -> u64 {
        self.seq
    }

    /// Flush the backend and return it for inspection.
    ///
    /// An error buffered during the drive is returned here if the caller
    /// never collected it with `take_error`.
    pub fn finish(mut self) -> OutputResult<W> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()?;
        Ok(self.writer)
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> Listener for TripRecorder<W> {
    fn on_event(&mut self, _kind: EventKind, snapshot: &Snapshot) -> ListenerResult {
        let row = UpdateRow {
            seq:           self.seq,
            speed_kmh:     snapshot.speed,
            rpm:           snapshot.rpm,
            fuel_pct:      snapshot.fuel,
            temperature_c: snapshot.temperature,
            distance_km:   snapshot.distance,
        };
        self.seq += 1;

        let result = self.writer.write_update(&row);
        self.store_err(result);
        Ok(())
    }
}
