//! CSV export backend.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::error::OutputResult;
use crate::row::SnapshotRow;

/// Writes the flattened history to one CSV file, headers included.
pub struct CsvWriter {
    writer:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the CSV file at `path`.  The header row comes from
    /// the first serialized record.
    pub fn new(path: &Path) -> OutputResult<Self> {
        Ok(Self {
            writer:   Writer::from_path(path)?,
            finished: false,
        })
    }

    /// Append a batch of rows.
    pub fn write_rows(&mut self, rows: &[SnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.writer.serialize(row)?;
        }
        Ok(())
    }

    /// Flush the underlying file.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}
