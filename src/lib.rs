//! # Payroll
//!
//! A small employee record store with:
//! - An in-memory roster kept in insertion order
//! - Monotonic identifier assignment
//! - Full rewrite of a pipe-delimited backing file after every change
//! - CSV and fixed-width text report export
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Presentation layer (payroll-cli)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command / Outcome
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    EmployeeStore                             │
//! │        (validation, id assignment, snapshots)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Storage   │          │   Export    │
//!   │ (id|name|…) │          │ (CSV/text)  │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use payroll::EmployeeStore;
//! use std::path::Path;
//!
//! let mut store = EmployeeStore::open_path(Path::new("employees.dat"))?;
//! let alice = store.add("Alice", "Eng", "75000")?;
//! assert_eq!(alice.id, 1);
//! store.export_csv(Path::new("employees.csv"))?;
//! # Ok::<(), payroll::PayrollError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod storage;
pub mod export;
pub mod command;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{PayrollError, Result};
pub use config::Config;
pub use command::{Command, Outcome};
pub use record::{EmployeeId, EmployeeInput, EmployeeRecord};
pub use store::{EmployeeStore, RosterSnapshot};
pub use export::RosterSummary;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the payroll crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
