//! The `OutputWriter` trait implemented by recorder backends.

use crate::{OutputResult, UpdateRow};

/// Trait implemented by recorder backends.
pub trait OutputWriter {
    /// Write one update row.
    fn write_update(&mut self, row: &UpdateRow) -> OutputResult<()>;

    /// Flush and close the underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
