//! Text report export
//!
//! ## Layout
//! ```text
//! ====================================
//!     EMPLOYEE PAYROLL REPORT
//! ====================================
//!
//! ID         Name                      Department           Salary
//! ------------------------------------------------------------------------
//! 1          Alice                     Eng                  $75000.00
//! ------------------------------------------------------------------------
//!
//! Total Employees: 1
//! Total Salary: $75000.00
//! Average Salary: $75000.00
//!
//! Report generated on: Sun Oct 18 09:30:00 UTC 2026
//! ```
//! Columns are left-justified at widths 10/25/20/15 and never truncated.
//! Amounts are rounded from their exact binary value, so `1.005` prints as
//! `1.00`.

use std::fmt::Display;
use std::io::Write;

use chrono::{DateTime, TimeZone};

use crate::error::Result;
use crate::record::EmployeeRecord;

use super::RosterSummary;

/// Title line inside the banner
pub const REPORT_TITLE: &str = "    EMPLOYEE PAYROLL REPORT";

/// `strftime` format of the trailing timestamp
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Z %Y";

const BANNER: &str = "====================================";
const RULE: &str = "------------------------------------------------------------------------";

/// Write the full report and return its summary
pub fn write_report<'a, W, I, Tz>(
    writer: &mut W,
    records: I,
    generated_at: &DateTime<Tz>,
) -> Result<RosterSummary>
where
    W: Write,
    I: IntoIterator<Item = &'a EmployeeRecord> + Copy,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    writeln!(writer, "{}", BANNER)?;
    writeln!(writer, "{}", REPORT_TITLE)?;
    writeln!(writer, "{}", BANNER)?;
    writeln!(writer)?;

    writeln!(writer, "{:<10} {:<25} {:<20} {:<15}", "ID", "Name", "Department", "Salary")?;
    writeln!(writer, "{}", RULE)?;

    for record in records {
        writeln!(
            writer,
            "{:<10} {:<25} {:<20} ${:<14.2}",
            record.id, record.name, record.department, record.salary
        )?;
    }

    let summary = RosterSummary::from_records(records);

    writeln!(writer, "{}", RULE)?;
    writeln!(writer)?;
    writeln!(writer, "Total Employees: {}", summary.count)?;
    writeln!(writer, "Total Salary: ${:.2}", summary.total_salary)?;
    writeln!(writer, "Average Salary: ${:.2}", summary.average_salary)?;
    writeln!(writer)?;
    writeln!(writer, "Report generated on: {}", generated_at.format(TIMESTAMP_FORMAT))?;
    writer.flush()?;

    Ok(summary)
}
