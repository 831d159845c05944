//! Request types for the Salary Engine API.
//!
//! This module defines the query parameters of the `/compensation` endpoint
//! and how missing or unparsable values fall back to the agreement defaults.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CompensationDefaults;
use crate::error::EngineResult;
use crate::models::{CompensationInput, ContractedHours};

/// Query parameters for `GET /compensation`.
///
/// Values are kept as raw strings so that a malformed value falls back to
/// the default instead of rejecting the request. `trede` and `uren` are
/// accepted as aliases for `step` and `hours`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompensationQuery {
    /// The salary scale.
    #[serde(default, alias = "schaal")]
    pub scale: Option<String>,
    /// The step within the scale.
    #[serde(default, alias = "trede")]
    pub step: Option<String>,
    /// Weekly contracted hours.
    #[serde(default, alias = "uren")]
    pub hours: Option<String>,
}

impl CompensationQuery {
    /// Resolves the query into a calculation input.
    ///
    /// Missing or unparsable values take the default. Hours that parse as a
    /// number but are zero, negative or above a full week fail with
    /// `InvalidHours`.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::api::CompensationQuery;
    /// use salary_engine::config::CompensationDefaults;
    /// use salary_engine::models::ContractedHours;
    ///
    /// let defaults = CompensationDefaults { scale: 11, step: 5, hours: ContractedHours::REFERENCE };
    /// let query = CompensationQuery { scale: Some("8".into()), step: None, hours: Some("x".into()) };
    ///
    /// let input = query.resolve(&defaults).unwrap();
    /// assert_eq!((input.scale, input.step), (8, 5));
    /// assert_eq!(input.contracted_hours, ContractedHours::REFERENCE);
    /// ```
    pub fn resolve(&self, defaults: &CompensationDefaults) -> EngineResult<CompensationInput> {
        let scale = parse_or(self.scale.as_deref(), defaults.scale);
        let step = parse_or(self.step.as_deref(), defaults.step);

        let contracted_hours = match self
            .hours
            .as_deref()
            .and_then(|h| Decimal::from_str(h.trim()).ok())
        {
            Some(hours) => ContractedHours::new(hours)?,
            None => defaults.hours,
        };

        Ok(CompensationInput {
            scale,
            step,
            contracted_hours,
        })
    }
}

fn parse_or(value: Option<&str>, default: u32) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}
