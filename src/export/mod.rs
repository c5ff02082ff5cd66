//! Export Module
//!
//! Renders the roster into alternate text formats.
//!
//! ## Formats
//! - CSV: `ID,Name,Department,Salary` header, quoted text fields
//! - Report: fixed-width table with a summary footer and timestamp
//!
//! Renderers write to any `io::Write`; the store opens the destination file.

mod csv;
mod report;
mod summary;

pub use csv::{write_csv, CSV_HEADER};
pub use report::{write_report, REPORT_TITLE, TIMESTAMP_FORMAT};
pub use summary::RosterSummary;
