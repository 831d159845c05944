//! Compensation input and breakdown models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ContractedHours;

/// The parameters of a compensation calculation.
///
/// # Example
///
/// ```
/// use salary_engine::models::{CompensationInput, ContractedHours};
///
/// let input = CompensationInput {
///     scale: 11,
///     step: 5,
///     contracted_hours: ContractedHours::REFERENCE,
/// };
/// assert_eq!(input.scale, 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationInput {
    /// The salary scale (schaal).
    pub scale: u32,
    /// The step within the scale (trede).
    pub step: u32,
    /// Weekly contracted hours.
    #[serde(default)]
    pub contracted_hours: ContractedHours,
}

/// Monthly and yearly compensation components for one input.
///
/// Every amount is derived from `monthly_base` and `scale_factor`;
/// nothing is rounded. Rounding to whole currency units is left to
/// whoever renders the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationBreakdown {
    /// Full-time (36 hour) monthly base salary from the table.
    pub monthly_base: Decimal,
    /// Months per year adjusted for contracted hours: `12 * hours / 36`.
    pub scale_factor: Decimal,
    /// Yearly gross salary.
    pub yearly_gross: Decimal,
    /// Pension premium paid by the employee.
    pub employee_pension: Decimal,
    /// Pension premium paid by the employer.
    pub employer_pension: Decimal,
    /// Employee and employer pension combined.
    pub total_pension: Decimal,
    /// Individual choice budget (IKB).
    pub individual_choice_budget: Decimal,
    /// Yearly gross plus choice budget, minus the employee pension premium.
    pub gross_incl_benefits: Decimal,
    /// Everything the employer spends, pension included.
    pub total_compensation: Decimal,
    /// Total compensation of a five-day week at the same hourly pattern.
    /// Only present for the 36-hour, four-day reference week.
    pub five_day_equivalent: Option<Decimal>,
    /// Whether gross plus choice budget exceeds the high-income threshold,
    /// above which pension accrual follows different rules.
    pub high_income_caveat: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_input_defaults_to_reference_hours() {
        let input: CompensationInput = serde_json::from_str(r#"{"scale": 8, "step": 2}"#).unwrap();
        assert_eq!(input.contracted_hours, ContractedHours::REFERENCE);
    }

    #[test]
    fn test_input_rejects_zero_hours() {
        let result: Result<CompensationInput, _> =
            serde_json::from_str(r#"{"scale": 8, "step": 2, "contracted_hours": "0"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_breakdown_serializes_amounts_as_strings() {
        let breakdown = CompensationBreakdown {
            monthly_base: dec("4000.00"),
            scale_factor: dec("12"),
            yearly_gross: dec("48000.00"),
            employee_pension: dec("3888.000"),
            employer_pension: dec("9072.000"),
            total_pension: dec("12960.000"),
            individual_choice_budget: dec("7920.000"),
            gross_incl_benefits: dec("52032.000"),
            total_compensation: dec("64992.000"),
            five_day_equivalent: None,
            high_income_caveat: false,
        };

        let json = serde_json::to_string(&breakdown).unwrap();
        assert!(json.contains("\"monthly_base\":\"4000.00\""));
        assert!(json.contains("\"five_day_equivalent\":null"));
        assert!(json.contains("\"high_income_caveat\":false"));
    }
}
