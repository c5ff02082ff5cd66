//! Record Module
//!
//! The employee record and the validation applied before a record is
//! created or replaced.
//!
//! ## Invariants
//! - `id` is positive and unique among live records
//! - `name` is non-empty (after trimming)
//! - `name` and `department` hold no control characters
//! - `salary` is finite and non-negative

mod input;

pub use input::EmployeeInput;
pub(crate) use input::is_valid_salary;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store, starting at 1
pub type EmployeeId = u32;

/// A single employee on the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    pub salary: f64,
}

impl EmployeeRecord {
    /// Build a record from validated input
    pub fn new(id: EmployeeId, input: EmployeeInput) -> Self {
        Self {
            id,
            name: input.name,
            department: input.department,
            salary: input.salary,
        }
    }

    /// Salary in its default decimal text form (`75000.0`, `1234.5`)
    ///
    /// Used by both the backing file and the CSV export.
    pub fn salary_text(&self) -> String {
        format!("{:?}", self.salary)
    }
}
