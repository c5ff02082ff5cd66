//! Validated employee input
//!
//! Field text as captured by a presentation layer, trimmed and checked.

use crate::error::{PayrollError, Result};

/// Name, department and salary that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeInput {
    pub name: String,
    pub department: String,
    pub salary: f64,
}

impl EmployeeInput {
    /// Validate raw field text
    ///
    /// All three fields are trimmed. Fails with `Validation` when the name is
    /// empty, a text field contains a control character, or the salary is
    /// not a finite, non-negative number.
    pub fn parse(name: &str, department: &str, salary: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PayrollError::validation("name cannot be empty"));
        }
        check_text("name", name)?;

        let department = department.trim();
        check_text("department", department)?;

        let salary_text = salary.trim();
        let salary: f64 = salary_text
            .parse()
            .map_err(|_| PayrollError::validation(format!("invalid salary format: {:?}", salary_text)))?;
        if !is_valid_salary(salary) {
            return Err(PayrollError::validation(format!(
                "salary must be a finite, non-negative number, got {}",
                salary_text
            )));
        }

        Ok(Self {
            name: name.to_string(),
            department: department.to_string(),
            salary,
        })
    }
}

/// Whether `salary` may be stored on a record
pub(crate) fn is_valid_salary(salary: f64) -> bool {
    salary.is_finite() && salary >= 0.0
}

// Line breaks would split a record across lines of the backing file
fn check_text(field: &str, value: &str) -> Result<()> {
    if value.chars().any(char::is_control) {
        return Err(PayrollError::validation(format!(
            "{} cannot contain control characters",
            field
        )));
    }
    Ok(())
}
