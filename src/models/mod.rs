//! Core data models for the Salary Engine.
//!
//! This module contains the domain models used throughout the engine.

mod calculation_result;
mod compensation;
mod hours;

pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CompensationResult};
pub use compensation::{CompensationBreakdown, CompensationInput};
pub use hours::ContractedHours;
