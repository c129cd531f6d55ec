//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the statutory
//! tax schedule from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::{ResidencySettings, ScheduleConfig, TaxConfig};

/// Loads and provides access to the statutory tax configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides access to the bracket table, flat residency rates, and
/// policy flags.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/gh_paye/
/// ├── schedule.yaml   # Schedule metadata and graduated brackets
/// └── residency.yaml  # Flat residency rates and SSNIT fallback policy
/// ```
///
/// # Example
///
/// ```no_run
/// use paye_engine::config::ConfigLoader;
/// use paye_engine::models::ResidencyStatus;
///
/// let loader = ConfigLoader::load("./config/gh_paye").unwrap();
/// let brackets = loader.config().brackets();
/// println!("Schedule has {} brackets", brackets.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TaxConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/gh_paye")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use paye_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/gh_paye")?;
    /// # Ok::<(), paye_engine::error::PayrollError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        // Load schedule.yaml
        let schedule_path = path.join("schedule.yaml");
        let schedule = Self::load_yaml::<ScheduleConfig>(&schedule_path)?;

        // Load residency.yaml
        let residency_path = path.join("residency.yaml");
        let residency = Self::load_yaml::<ResidencySettings>(&residency_path)?;

        let config = TaxConfig::new(schedule.metadata, schedule.brackets, residency);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded tax configuration.
    pub fn config(&self) -> &TaxConfig {
        &self.config
    }
}
