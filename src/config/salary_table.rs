//! The salary table.
//!
//! Maps every (scale, step) combination of the agreement to a monthly base
//! salary for the 36-hour reference week. Scales and steps are kept in
//! ordered maps, so enumeration is always ascending and a lookup outside
//! the table fails instead of yielding a default.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// An immutable scale/step salary table.
///
/// Bounds: scales and steps are exactly the keys present in the source
/// table. Step sets differ per scale, so step enumeration takes a scale.
/// Every amount is strictly positive.
///
/// # Example
///
/// ```
/// use salary_engine::config::SalaryTable;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let mut scales = BTreeMap::new();
/// scales.insert(1, BTreeMap::from([(0, Decimal::from(2100)), (1, Decimal::from(2150))]));
/// let table = SalaryTable::new(scales).unwrap();
///
/// assert_eq!(table.monthly_base(1, 1).unwrap(), Decimal::from(2150));
/// assert_eq!(table.available_scales(), vec![1]);
/// assert!(table.monthly_base(1, 2).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryTable {
    scales: BTreeMap<u32, BTreeMap<u32, Decimal>>,
}

impl SalaryTable {
    /// Builds a table, validating that it is non-empty and every amount is positive.
    pub fn new(scales: BTreeMap<u32, BTreeMap<u32, Decimal>>) -> EngineResult<Self> {
        if scales.is_empty() {
            return Err(EngineError::InvalidSalaryTable {
                message: "table contains no scales".to_string(),
            });
        }

        for (scale, steps) in &scales {
            if steps.is_empty() {
                return Err(EngineError::InvalidSalaryTable {
                    message: format!("scale {} contains no steps", scale),
                });
            }
            if let Some((step, amount)) = steps
                .iter()
                .find(|(_, amount)| **amount <= Decimal::ZERO)
            {
                return Err(EngineError::InvalidSalaryTable {
                    message: format!(
                        "scale {}, step {} has non-positive amount {}",
                        scale, step, amount
                    ),
                });
            }
        }

        Ok(Self { scales })
    }

    /// Returns the monthly base salary for a scale and step.
    ///
    /// Fails with `SalaryNotFound` when either the scale or the step is
    /// absent from the table.
    pub fn monthly_base(&self, scale: u32, step: u32) -> EngineResult<Decimal> {
        self.scales
            .get(&scale)
            .and_then(|steps| steps.get(&step))
            .copied()
            .ok_or(EngineError::SalaryNotFound { scale, step })
    }

    /// Returns all scales, ascending.
    pub fn available_scales(&self) -> Vec<u32> {
        self.scales.keys().copied().collect()
    }

    /// Returns the steps of a scale, ascending.
    pub fn available_steps(&self, scale: u32) -> EngineResult<Vec<u32>> {
        self.scales
            .get(&scale)
            .map(|steps| steps.keys().copied().collect())
            .ok_or(EngineError::ScaleNotFound { scale })
    }

    /// Returns true if the table has an entry for the scale and step.
    pub fn contains(&self, scale: u32, step: u32) -> bool {
        self.monthly_base(scale, step).is_ok()
    }

    /// Iterates over every `(scale, step, monthly_base)` entry in ascending order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, u32, Decimal)> + '_ {
        self.scales.iter().flat_map(|(scale, steps)| {
            steps
                .iter()
                .map(move |(step, amount)| (*scale, *step, *amount))
        })
    }
}
