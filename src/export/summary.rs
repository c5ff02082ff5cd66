//! Roster totals

use serde::Serialize;

use crate::record::EmployeeRecord;

/// Count, total and average salary of a roster
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RosterSummary {
    pub count: usize,
    pub total_salary: f64,
    pub average_salary: f64,
}

impl RosterSummary {
    /// Summarize the given records (average is 0 for an empty roster)
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a EmployeeRecord>,
    {
        let (count, total_salary) = records
            .into_iter()
            .fold((0usize, 0.0f64), |(count, total), record| (count + 1, total + record.salary));

        let average_salary = if count > 0 {
            total_salary / count as f64
        } else {
            0.0
        };

        Self {
            count,
            total_salary,
            average_salary,
        }
    }
}
