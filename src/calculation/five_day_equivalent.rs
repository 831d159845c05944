//! Five-day week comparison.
//!
//! The 36-hour reference week is worked over four days. For comparison with
//! a five-day schedule at the same daily hours, the total is scaled by 5/4.
//! The figure is informational and never part of the total itself.

use rust_decimal::Decimal;

use crate::models::{AuditStep, ContractedHours};

/// Returns the five-day over four-day multiplier (1.25).
pub fn five_day_multiplier() -> Decimal {
    Decimal::new(125, 2)
}

/// Returns the five-day equivalent of a total, or `None` unless the
/// hours are the 36-hour four-day reference week.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::five_day_equivalent;
/// use salary_engine::models::ContractedHours;
/// use rust_decimal::Decimal;
///
/// let total = Decimal::from(64992);
/// assert_eq!(
///     five_day_equivalent(total, ContractedHours::REFERENCE),
///     Some(Decimal::from(81240))
/// );
/// assert_eq!(five_day_equivalent(total, ContractedHours::from_whole(38).unwrap()), None);
/// ```
pub fn five_day_equivalent(
    total_compensation: Decimal,
    hours: ContractedHours,
) -> Option<Decimal> {
    hours
        .is_reference()
        .then(|| total_compensation * five_day_multiplier())
}

/// The result of the five-day comparison, including the audit step.
#[derive(Debug, Clone)]
pub struct FiveDayEquivalentResult {
    /// The five-day equivalent total, if meaningful for the hours.
    pub five_day_equivalent: Option<Decimal>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the five-day comparison figure with its audit step.
pub fn calculate_five_day_equivalent(
    total_compensation: Decimal,
    hours: ContractedHours,
    step_number: u32,
) -> FiveDayEquivalentResult {
    let equivalent = five_day_equivalent(total_compensation, hours);

    let reasoning = match equivalent {
        Some(amount) => format!(
            "€{} x 5/4 = €{} for a five-day week",
            total_compensation.normalize(),
            amount.normalize()
        ),
        None => format!(
            "Not applicable - {} hours is not the 36-hour four-day week",
            hours
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "five_day_equivalent".to_string(),
        rule_name: "Five-day Week Equivalent".to_string(),
        clause_ref: "working_hours".to_string(),
        input: serde_json::json!({
            "total_compensation": total_compensation.normalize().to_string(),
            "contracted_hours": hours.to_string()
        }),
        output: serde_json::json!({
            "applicable": equivalent.is_some(),
            "five_day_equivalent": equivalent.map(|a| a.normalize().to_string())
        }),
        reasoning,
    };

    FiveDayEquivalentResult {
        five_day_equivalent: equivalent,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_multiplier_is_exactly_1_25() {
        assert_eq!(five_day_multiplier(), dec("1.25"));
    }

    #[test]
    fn test_reference_week_scaled_by_five_fourths() {
        let result = five_day_equivalent(dec("50000"), ContractedHours::REFERENCE);
        assert_eq!(result, Some(dec("62500")));
    }

    #[test]
    fn test_other_hours_not_applicable() {
        for hours in [27, 38, 40] {
            let hours = ContractedHours::from_whole(hours).unwrap();
            assert_eq!(five_day_equivalent(dec("50000"), hours), None);
        }
    }

    #[test]
    fn test_audit_step_when_applicable() {
        let result = calculate_five_day_equivalent(dec("64992"), ContractedHours::REFERENCE, 8);

        assert_eq!(result.five_day_equivalent, Some(dec("81240")));
        assert_eq!(result.audit_step.step_number, 8);
        assert_eq!(
            result.audit_step.output["applicable"].as_bool().unwrap(),
            true
        );
        assert_eq!(
            result.audit_step.output["five_day_equivalent"]
                .as_str()
                .unwrap(),
            "81240"
        );
    }

    #[test]
    fn test_audit_step_when_not_applicable() {
        let hours = ContractedHours::from_whole(40).unwrap();
        let result = calculate_five_day_equivalent(dec("64992"), hours, 8);

        assert_eq!(result.five_day_equivalent, None);
        assert!(result.audit_step.output["five_day_equivalent"].is_null());
        assert!(result.audit_step.reasoning.contains("Not applicable"));
    }
}
