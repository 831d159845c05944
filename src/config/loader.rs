//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the agreement
//! metadata and salary table from YAML files.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::SalaryTable;
use super::types::{AgreementConfig, AgreementMetadata, CompensationDefaults, SalaryTableConfig};

const EMBEDDED_AGREEMENT: &str = include_str!("../../config/cao_rijk/agreement.yaml");
const EMBEDDED_SALARY_TABLE: &str = include_str!("../../config/cao_rijk/salary_table.yaml");

static PUBLISHED: OnceLock<EngineResult<ConfigLoader>> = OnceLock::new();

/// Loads and provides access to the agreement configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// (or from the copy compiled into the crate) and provides methods to
/// query the salary table.
///
/// # Directory Structure
///
/// ```text
/// config/cao_rijk/
/// ├── agreement.yaml      # Agreement metadata and input defaults
/// └── salary_table.yaml   # Monthly base per scale and step
/// ```
///
/// # Example
///
/// ```
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::embedded().unwrap();
/// let base = loader.monthly_base(11, 5).unwrap();
/// println!("Scale 11, step 5: {}", base);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AgreementConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/cao_rijk")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The salary table is empty or holds a non-positive amount
    /// - The defaults point outside the salary table
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let agreement_path = path.join("agreement.yaml");
        let agreement = Self::read_file(&agreement_path)?;

        let table_path = path.join("salary_table.yaml");
        let table = Self::read_file(&table_path)?;

        Self::from_yaml(
            (&agreement_path.display().to_string(), &agreement),
            (&table_path.display().to_string(), &table),
        )
    }

    /// Loads the configuration compiled into the crate.
    pub fn embedded() -> EngineResult<Self> {
        Self::from_yaml(
            ("<embedded>/agreement.yaml", EMBEDDED_AGREEMENT),
            ("<embedded>/salary_table.yaml", EMBEDDED_SALARY_TABLE),
        )
    }

    /// Returns the embedded configuration, parsed once per process.
    pub fn published() -> EngineResult<&'static ConfigLoader> {
        PUBLISHED
            .get_or_init(Self::embedded)
            .as_ref()
            .map_err(Clone::clone)
    }

    fn from_yaml(agreement: (&str, &str), table: (&str, &str)) -> EngineResult<Self> {
        let metadata = Self::parse_yaml::<AgreementMetadata>(agreement.0, agreement.1)?;
        let table_config = Self::parse_yaml::<SalaryTableConfig>(table.0, table.1)?;
        let salary_table = SalaryTable::new(table_config.scales)?;

        Self::validate_defaults(&metadata.defaults, &salary_table)?;

        debug!(
            agreement = %metadata.code,
            version = %metadata.version,
            scales = salary_table.available_scales().len(),
            "Loaded agreement configuration"
        );

        Ok(Self {
            config: AgreementConfig::new(metadata, salary_table),
        })
    }

    fn read_file(path: &Path) -> EngineResult<String> {
        fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })
    }

    /// Parses a YAML document, attributing errors to `path`.
    fn parse_yaml<T: serde::de::DeserializeOwned>(path: &str, content: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    fn validate_defaults(defaults: &CompensationDefaults, table: &SalaryTable) -> EngineResult<()> {
        if table.contains(defaults.scale, defaults.step) {
            Ok(())
        } else {
            Err(EngineError::InvalidSalaryTable {
                message: format!(
                    "default scale {}, step {} is not in the table",
                    defaults.scale, defaults.step
                ),
            })
        }
    }

    /// Returns the underlying agreement configuration.
    pub fn config(&self) -> &AgreementConfig {
        &self.config
    }

    /// Returns the agreement metadata.
    pub fn agreement(&self) -> &AgreementMetadata {
        self.config.agreement()
    }

    /// Returns the salary table.
    pub fn salary_table(&self) -> &SalaryTable {
        self.config.salary_table()
    }

    /// Gets the monthly base salary for a scale and step.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::config::ConfigLoader;
    /// use salary_engine::error::EngineError;
    ///
    /// let loader = ConfigLoader::embedded()?;
    /// assert!(loader.monthly_base(11, 5).is_ok());
    /// assert!(matches!(
    ///     loader.monthly_base(99, 0),
    ///     Err(EngineError::SalaryNotFound { scale: 99, step: 0 })
    /// ));
    /// # Ok::<(), EngineError>(())
    /// ```
    pub fn monthly_base(&self, scale: u32, step: u32) -> EngineResult<Decimal> {
        self.salary_table().monthly_base(scale, step)
    }
}
