//! `court-output` — exports and reporting for courtsim runs.
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`row`]    | `SnapshotRow` — flat audit record, one per history row  |
//! | [`csv`]    | `CsvWriter` — serializes the row sequence to one file   |
//! | [`table`]  | `render_history` — console table, first N + last 2 rows |
//! | [`report`] | `RunReport` — end-of-run per-class statistics           |
//! | [`error`]  | `OutputError`, `OutputResult`                           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use court_output::{CsvWriter, RunReport, SnapshotRow, render_history};
//!
//! println!("{}", render_history(sim.history(), 10));
//! println!("{}", RunReport::new(sim.summary()));
//! let mut w = CsvWriter::new(Path::new("history.csv"))?;
//! w.write_rows(&SnapshotRow::from_history(sim.history()))?;
//! w.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod report;
pub mod row;
pub mod table;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use report::RunReport;
pub use row::SnapshotRow;
pub use table::render_history;
