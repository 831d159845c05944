//! Configuration loading and management for the Salary Engine.
//!
//! This module provides functionality to load the collective agreement from
//! YAML files: its metadata, input defaults and the salary table.
//!
//! # Example
//!
//! ```
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::embedded().unwrap();
//! println!("Loaded agreement: {}", config.agreement().name);
//! ```

mod loader;
mod salary_table;
mod types;

pub use loader::ConfigLoader;
pub use salary_table::SalaryTable;
pub use types::{AgreementConfig, AgreementMetadata, CompensationDefaults, SalaryTableConfig};
