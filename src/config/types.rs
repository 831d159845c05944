//! Configuration types for the collective agreement.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ContractedHours;

use super::SalaryTable;

/// Metadata about the collective agreement.
///
/// Identifies the agreement and the version of its salary table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgreementMetadata {
    /// Short code for the agreement (e.g., "cao_rijk").
    pub code: String,
    /// The human-readable name of the agreement.
    pub name: String,
    /// The version of the agreement the table was taken from.
    pub version: String,
    /// The date from which the salary table applies.
    pub effective_date: NaiveDate,
    /// URL to the published agreement.
    pub source_url: String,
    /// Values used when a caller leaves the input unspecified.
    pub defaults: CompensationDefaults,
}

/// Fallback input values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationDefaults {
    /// Default salary scale.
    pub scale: u32,
    /// Default step within the scale.
    pub step: u32,
    /// Default weekly contracted hours.
    #[serde(default)]
    pub hours: ContractedHours,
}

/// Salary table file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryTableConfig {
    /// Map of scale to (map of step to monthly base amount).
    pub scales: BTreeMap<u32, BTreeMap<u32, Decimal>>,
}

/// The complete agreement configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct AgreementConfig {
    /// Agreement metadata.
    metadata: AgreementMetadata,
    /// The validated salary table.
    salary_table: SalaryTable,
}

impl AgreementConfig {
    /// Creates a new AgreementConfig from its component parts.
    pub fn new(metadata: AgreementMetadata, salary_table: SalaryTable) -> Self {
        Self {
            metadata,
            salary_table,
        }
    }

    /// Returns the agreement metadata.
    pub fn agreement(&self) -> &AgreementMetadata {
        &self.metadata
    }

    /// Returns the salary table.
    pub fn salary_table(&self) -> &SalaryTable {
        &self.salary_table
    }

    /// Returns the fallback input values.
    pub fn defaults(&self) -> CompensationDefaults {
        self.metadata.defaults
    }
}
