//! Command definitions
//!
//! The call interface a presentation layer uses to drive the store. Each
//! `Command` is routed by `EmployeeStore::execute` and answered with an
//! `Outcome` or a `PayrollError`.

use std::path::PathBuf;

use crate::export::RosterSummary;
use crate::record::{EmployeeId, EmployeeRecord};
use crate::store::RosterSnapshot;

/// A request against the store
///
/// Field values are raw text, exactly as captured from the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add an employee
    Add {
        name: String,
        department: String,
        salary: String,
    },

    /// Replace every field but the id
    Update {
        id: EmployeeId,
        name: String,
        department: String,
        salary: String,
    },

    /// Remove an employee
    Delete { id: EmployeeId },

    /// Look up one employee
    Get { id: EmployeeId },

    /// Snapshot the roster
    List,

    /// Export CSV (`None` uses the configured path)
    ExportCsv { destination: Option<PathBuf> },

    /// Export the text report (`None` uses the configured path)
    ExportReport { destination: Option<PathBuf> },
}

/// The result of a successful command
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Added, updated or looked-up record
    Record(EmployeeRecord),

    /// Id of the removed record
    Deleted(EmployeeId),

    /// Roster snapshot
    Roster(RosterSnapshot),

    /// An export was written
    Exported {
        path: PathBuf,
        rows: usize,
        summary: RosterSummary,
    },
}

impl Command {
    /// Whether the command rewrites the backing file on success
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Add { .. } | Command::Update { .. } | Command::Delete { .. }
        )
    }
}
