//! CSV recorder backend.
//!
//! Creates one file in the configured output directory:
//! - `dashboard_updates.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, UpdateRow};

/// Writes dashboard updates to a single CSV file.
pub struct CsvWriter {
    updates:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `dashboard_updates.csv` in `dir` and write the
    /// header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut updates = Writer::from_path(dir.join("dashboard_updates.csv"))?;
        updates.write_record(["seq", "speed_kmh", "rpm", "fuel_pct", "temperature_c", "distance_km"])?;

        Ok(Self { updates, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_update(&mut self, row: &UpdateRow) -> OutputResult<()> {
        self.updates.write_record(&[
            row.seq.to_string(),
            row.speed_kmh.to_string(),
            row.rpm.to_string(),
            row.fuel_pct.to_string(),
            row.temperature_c.to_string(),
            row.distance_km.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.updates.flush()?;
        Ok(())
    }
}
