//! CSV export
//!
//! Name and department are wrapped in double quotes with no escaping, so a
//! value containing `"` or a line break produces a malformed row.

use std::io::Write;

use crate::error::Result;
use crate::record::EmployeeRecord;

/// Header row of the CSV export
pub const CSV_HEADER: &str = "ID,Name,Department,Salary";

/// Write the header followed by one row per record
///
/// Returns the number of data rows written.
pub fn write_csv<'a, W, I>(writer: &mut W, records: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a EmployeeRecord>,
{
    writeln!(writer, "{}", CSV_HEADER)?;

    let mut rows = 0;
    for record in records {
        writeln!(
            writer,
            "{},\"{}\",\"{}\",{}",
            record.id,
            record.name,
            record.department,
            record.salary_text()
        )?;
        rows += 1;
    }
    writer.flush()?;

    Ok(rows)
}
