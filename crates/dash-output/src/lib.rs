//! `dash-output` — trip recording for the dash vehicle simulation.
//!
//! A [`TripRecorder`] subscribes to the update stream and writes one row
//! per event to an [`OutputWriter`] backend:
//!
//! | Backend       | Files created            |
//! |---------------|--------------------------|
//! | [`CsvWriter`] | `dashboard_updates.csv`  |
//!
//! # Usage
//!
//! ```rust,ignore
//! use dash_output::{CsvWriter, TripRecorder};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let recorder = Rc::new(RefCell::new(TripRecorder::new(writer)));
//! vehicle.subscribe(Box::new(Rc::clone(&recorder)));
//! // ... drive ...
//! recorder.borrow_mut().take_error().map(|e| eprintln!("recorder error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod recorder;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use recorder::TripRecorder;
pub use row::UpdateRow;
pub use writer::OutputWriter;
