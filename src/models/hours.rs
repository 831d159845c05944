//! Contracted working hours.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Weekly hours in an employment contract.
///
/// Always strictly positive and at most [`ContractedHours::MAX_WEEKLY`]:
/// every constructor goes through [`ContractedHours::new`].
///
/// # Example
///
/// ```
/// use salary_engine::models::ContractedHours;
/// use rust_decimal::Decimal;
///
/// let hours = ContractedHours::new(Decimal::from(32)).unwrap();
/// assert_eq!(hours.value(), Decimal::from(32));
/// assert!(!hours.is_reference());
/// assert!(ContractedHours::new(Decimal::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct ContractedHours(Decimal);

impl ContractedHours {
    /// The full-time reference week: 36 hours over four days.
    pub const REFERENCE: ContractedHours = ContractedHours(Decimal::from_parts(36, 0, 0, false, 0));

    /// Hour options offered by the agreement.
    pub const COMMON_OPTIONS: [u32; 4] = [27, 36, 38, 40];

    /// Upper bound: the number of hours in a week.
    pub const MAX_WEEKLY: u32 = 168;

    /// Creates contracted hours, failing with `InvalidHours` unless the
    /// value lies in `(0, MAX_WEEKLY]`.
    pub fn new(hours: Decimal) -> EngineResult<Self> {
        if hours > Decimal::ZERO && hours <= Decimal::from(Self::MAX_WEEKLY) {
            Ok(Self(hours))
        } else {
            Err(EngineError::InvalidHours {
                hours: hours.normalize().to_string(),
            })
        }
    }

    /// Creates contracted hours from a whole number of hours.
    pub fn from_whole(hours: u32) -> EngineResult<Self> {
        Self::new(Decimal::from(hours))
    }

    /// Returns the number of hours.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true for the 36-hour, four-day reference pattern.
    pub fn is_reference(&self) -> bool {
        self.0 == Self::REFERENCE.0
    }
}

impl Default for ContractedHours {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl TryFrom<Decimal> for ContractedHours {
    type Error = EngineError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContractedHours> for Decimal {
    fn from(value: ContractedHours) -> Self {
        value.0
    }
}

impl FromStr for ContractedHours {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hours = Decimal::from_str(s.trim()).map_err(|_| EngineError::InvalidHours {
            hours: s.to_string(),
        })?;
        Self::new(hours)
    }
}

impl fmt::Display for ContractedHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
