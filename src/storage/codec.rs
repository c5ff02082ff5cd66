//! Line codec
//!
//! Encoding and decoding of a single backing-file line.

use crate::record::{is_valid_salary, EmployeeId, EmployeeRecord};

/// Separator between the four fields of a line
pub const FIELD_SEPARATOR: char = '|';

/// Number of fields in a well-formed line
pub const FIELD_COUNT: usize = 4;

/// Encode a record as `id|name|department|salary` (no trailing newline)
pub fn encode_line(record: &EmployeeRecord) -> String {
    format!(
        "{id}{sep}{name}{sep}{department}{sep}{salary}",
        id = record.id,
        name = record.name,
        department = record.department,
        salary = record.salary_text(),
        sep = FIELD_SEPARATOR,
    )
}

/// Decode one line
///
/// Returns `None` for a malformed line: wrong field count, an id that is not
/// a positive integer, or a salary that is not a finite, non-negative number.
pub fn decode_line(line: &str) -> Option<EmployeeRecord> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return None;
    }

    let id: EmployeeId = fields[0].trim().parse().ok()?;
    if id == 0 {
        return None;
    }
    let salary: f64 = fields[3].trim().parse().ok()?;
    if !is_valid_salary(salary) {
        return None;
    }

    Some(EmployeeRecord {
        id,
        name: fields[1].to_string(),
        department: fields[2].to_string(),
        salary,
    })
}
