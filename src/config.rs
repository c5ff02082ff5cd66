//! Configuration for the payroll store
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for an `EmployeeStore`
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Backing file holding one `id|name|department|salary` line per record.
    /// Its parent directory is created on open.
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Export Configuration
    // -------------------------------------------------------------------------
    /// Default destination for the CSV export
    pub csv_path: PathBuf,

    /// Default destination for the text report
    pub report_path: PathBuf,
}

impl Config {
    pub const DEFAULT_DATA_FILE: &'static str = "employees.dat";
    pub const DEFAULT_CSV_FILE: &'static str = "employees.csv";
    pub const DEFAULT_REPORT_FILE: &'static str = "employees.txt";

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(Self::DEFAULT_DATA_FILE),
            csv_path: PathBuf::from(Self::DEFAULT_CSV_FILE),
            report_path: PathBuf::from(Self::DEFAULT_REPORT_FILE),
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing data file
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the default CSV export destination
    pub fn csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.csv_path = path.into();
        self
    }

    /// Set the default report export destination
    pub fn report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.report_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
