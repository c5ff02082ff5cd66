//! Store Module
//!
//! The employee record store: the single owner of the roster.
//!
//! ## Responsibilities
//! - Assign identifiers and validate input
//! - Keep the roster in insertion order
//! - Rewrite the backing file after every successful mutation
//! - Hand out snapshots and render exports

mod snapshot;

pub use snapshot::RosterSnapshot;

use std::fs::{self, File};
use std::io::BufWriter;
use std::iter;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};

use crate::command::{Command, Outcome};
use crate::config::Config;
use crate::error::{PayrollError, Result};
use crate::export::{self, RosterSummary};
use crate::record::{EmployeeId, EmployeeInput, EmployeeRecord};
use crate::storage::{LoadResult, RosterFile};

/// The employee record store
///
/// ## Persistence
/// Every successful `add`/`update`/`delete` rewrites the whole backing file.
/// The file is written from the candidate roster *before* the in-memory
/// state changes, so a failed write returns `Io` and leaves the store as it
/// was.
///
/// ## Access
/// Mutations take `&mut self`; the store is meant to have a single owner.
/// Readers get a `RosterSnapshot`, which is detached from later mutations.
#[derive(Debug)]
pub struct EmployeeStore {
    /// Store configuration
    config: Config,

    /// Roster in insertion order (copy-on-write, shared with snapshots)
    records: Arc<Vec<EmployeeRecord>>,

    /// Identifier handed to the next `add`
    next_id: EmployeeId,
}

impl EmployeeStore {
    /// Open the store described by `config`
    ///
    /// Creates the data file's parent directory if needed, then loads the
    /// data file. A missing data file yields an empty roster.
    pub fn open(config: Config) -> Result<Self> {
        if let Some(parent) = config.data_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut store = Self {
            config,
            records: Arc::new(Vec::new()),
            next_id: 1,
        };
        let data_file = store.config.data_file.clone();
        store.load(&data_file)?;

        Ok(store)
    }

    /// Open with a data file path (convenience method)
    ///
    /// Uses default config with the specified data file
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_file(path).build())
    }

    /// Replace the in-memory roster with the contents of `source`
    ///
    /// Malformed lines are skipped. The id counter becomes `max(id) + 1`, or
    /// 1 for an empty roster. On error the current roster is kept.
    pub fn load(&mut self, source: &Path) -> Result<LoadResult> {
        let (records, result) = RosterFile::load(source)?;

        self.next_id = records
            .iter()
            .map(|record| record.id)
            .max()
            .map(|id| id.saturating_add(1))
            .unwrap_or(1);
        self.records = Arc::new(records);

        if result.lines_skipped > 0 || result.duplicates_skipped > 0 {
            tracing::warn!(
                path = %source.display(),
                skipped = result.lines_skipped,
                duplicates = result.duplicates_skipped,
                "Ignored unreadable roster lines"
            );
        }
        tracing::info!(
            path = %source.display(),
            records = result.records_loaded,
            next_id = self.next_id,
            "Loaded roster"
        );

        Ok(result)
    }

    /// Reload from the configured data file
    pub fn reload(&mut self) -> Result<LoadResult> {
        let data_file = self.config.data_file.clone();
        self.load(&data_file)
    }

    /// Execute a command
    ///
    /// Routes commands to the matching operation
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        if command.is_mutation() {
            tracing::debug!(?command, "Executing mutation");
        }

        match command {
            Command::Add {
                name,
                department,
                salary,
            } => self.add(&name, &department, &salary).map(Outcome::Record),
            Command::Update {
                id,
                name,
                department,
                salary,
            } => self
                .update(id, &name, &department, &salary)
                .map(Outcome::Record),
            Command::Delete { id } => {
                self.delete(id)?;
                Ok(Outcome::Deleted(id))
            }
            Command::Get { id } => self
                .get(id)
                .cloned()
                .map(Outcome::Record)
                .ok_or(PayrollError::NotFound { id }),
            Command::List => Ok(Outcome::Roster(self.list())),
            Command::ExportCsv { destination } => {
                let path = destination.unwrap_or_else(|| self.config.csv_path.clone());
                let rows = self.export_csv(&path)?;
                Ok(Outcome::Exported {
                    path,
                    summary: RosterSummary::from_records(self.records.iter()),
                    rows,
                })
            }
            Command::ExportReport { destination } => {
                let path = destination.unwrap_or_else(|| self.config.report_path.clone());
                let summary = self.export_report(&path)?;
                Ok(Outcome::Exported {
                    path,
                    rows: summary.count,
                    summary,
                })
            }
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add an employee from raw field text and return the new record
    pub fn add(&mut self, name: &str, department: &str, salary: &str) -> Result<EmployeeRecord> {
        let input = EmployeeInput::parse(name, department, salary)?;
        self.insert(input)
    }

    /// Add an employee from already-validated input
    pub fn insert(&mut self, input: EmployeeInput) -> Result<EmployeeRecord> {
        let id = self.next_id;
        let next_id = id
            .checked_add(1)
            .ok_or_else(|| PayrollError::validation("no identifiers left to assign"))?;
        let record = EmployeeRecord::new(id, input);

        RosterFile::save(
            &self.config.data_file,
            self.records.iter().chain(iter::once(&record)),
        )?;

        Arc::make_mut(&mut self.records).push(record.clone());
        self.next_id = next_id;

        tracing::debug!(id, name = %record.name, "Added employee");
        Ok(record)
    }

    /// Replace every field but the id of employee `id`
    pub fn update(
        &mut self,
        id: EmployeeId,
        name: &str,
        department: &str,
        salary: &str,
    ) -> Result<EmployeeRecord> {
        let input = EmployeeInput::parse(name, department, salary)?;
        self.replace(id, input)
    }

    /// Replace employee `id` with already-validated input
    pub fn replace(&mut self, id: EmployeeId, input: EmployeeInput) -> Result<EmployeeRecord> {
        let index = self.position(id)?;
        let updated = EmployeeRecord::new(id, input);

        RosterFile::save(
            &self.config.data_file,
            self.records
                .iter()
                .enumerate()
                .map(|(i, record)| if i == index { &updated } else { record }),
        )?;

        Arc::make_mut(&mut self.records)[index] = updated.clone();

        tracing::debug!(id, "Updated employee");
        Ok(updated)
    }

    /// Remove employee `id`
    pub fn delete(&mut self, id: EmployeeId) -> Result<()> {
        let index = self.position(id)?;

        RosterFile::save(
            &self.config.data_file,
            self.records
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, record)| record),
        )?;

        Arc::make_mut(&mut self.records).remove(index);

        tracing::debug!(id, "Deleted employee");
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Snapshot of all records in insertion order
    pub fn list(&self) -> RosterSnapshot {
        RosterSnapshot::new(Arc::clone(&self.records))
    }

    /// Look up one record
    pub fn get(&self, id: EmployeeId) -> Option<&EmployeeRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Count, total and average salary
    pub fn summary(&self) -> RosterSummary {
        RosterSummary::from_records(self.records.iter())
    }

    // =========================================================================
    // Exports
    // =========================================================================

    /// Write the roster as CSV to `destination`, returning the row count
    pub fn export_csv(&self, destination: &Path) -> Result<usize> {
        let mut writer = BufWriter::new(File::create(destination)?);
        let rows = export::write_csv(&mut writer, self.records.iter())?;

        tracing::info!(path = %destination.display(), rows, "Exported CSV");
        Ok(rows)
    }

    /// Write the text report to `destination`, stamped with the local time
    pub fn export_report(&self, destination: &Path) -> Result<RosterSummary> {
        self.export_report_at(destination, &Local::now())
    }

    /// Write the text report with an explicit generation time
    pub fn export_report_at<Tz>(
        &self,
        destination: &Path,
        generated_at: &DateTime<Tz>,
    ) -> Result<RosterSummary>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let mut writer = BufWriter::new(File::create(destination)?);
        let summary = export::write_report(&mut writer, self.records.as_slice(), generated_at)?;

        tracing::info!(path = %destination.display(), employees = summary.count, "Exported report");
        Ok(summary)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of live records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Identifier the next `add` will assign
    pub fn next_id(&self) -> EmployeeId {
        self.next_id
    }

    /// Path of the backing file
    pub fn data_file(&self) -> &Path {
        &self.config.data_file
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn position(&self, id: EmployeeId) -> Result<usize> {
        self.records
            .iter()
            .position(|record| record.id == id)
            .ok_or(PayrollError::NotFound { id })
    }
}
