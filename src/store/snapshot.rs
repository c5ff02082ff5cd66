//! Roster snapshots
//!
//! A read-only view of the roster as it was when `list()` was called.

use std::slice;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::record::{EmployeeId, EmployeeRecord};

/// Immutable, restartable view of the roster in insertion order
///
/// Shares the store's collection until the store next mutates; the store
/// copies on write, so a snapshot never observes later changes.
#[derive(Debug, Clone)]
pub struct RosterSnapshot {
    records: Arc<Vec<EmployeeRecord>>,
}

impl RosterSnapshot {
    pub(crate) fn new(records: Arc<Vec<EmployeeRecord>>) -> Self {
        Self { records }
    }

    /// Iterate over the records; can be called any number of times
    pub fn iter(&self) -> slice::Iter<'_, EmployeeRecord> {
        self.records.iter()
    }

    /// Find a record by id
    pub fn get(&self, id: EmployeeId) -> Option<&EmployeeRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Copy the records out
    pub fn to_vec(&self) -> Vec<EmployeeRecord> {
        self.records.as_ref().clone()
    }
}

impl<'a> IntoIterator for &'a RosterSnapshot {
    type Item = &'a EmployeeRecord;
    type IntoIter = slice::Iter<'a, EmployeeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for RosterSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.records.as_slice().serialize(serializer)
    }
}
