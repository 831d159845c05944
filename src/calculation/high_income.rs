//! High-income pension threshold detection.
//!
//! Pension accrual is capped above a fixed yearly income. The engine does
//! not change any formula for incomes above the cap; it only flags the
//! result so the reader knows the pension figures follow different rules.

use rust_decimal::Decimal;

use crate::models::{AuditStep, AuditWarning};

/// Warning code attached to results above the threshold.
pub const HIGH_INCOME_WARNING_CODE: &str = "HIGH_INCOME_THRESHOLD";

/// Returns the yearly income above which pension accrual rules differ.
pub fn high_income_threshold() -> Decimal {
    Decimal::from(130_000)
}

/// Returns true when `yearly_gross + individual_choice_budget` is strictly
/// above the threshold.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::exceeds_high_income_threshold;
/// use rust_decimal::Decimal;
///
/// assert!(!exceeds_high_income_threshold(Decimal::from(110_000), Decimal::from(20_000)));
/// assert!(exceeds_high_income_threshold(Decimal::from(110_000), Decimal::from(20_001)));
/// ```
pub fn exceeds_high_income_threshold(
    yearly_gross: Decimal,
    individual_choice_budget: Decimal,
) -> bool {
    yearly_gross + individual_choice_budget > high_income_threshold()
}

/// The result of the threshold check.
#[derive(Debug, Clone)]
pub struct HighIncomeCheckResult {
    /// Whether the caveat applies.
    pub applies: bool,
    /// A warning to surface with the result, when the caveat applies.
    pub warning: Option<AuditWarning>,
    /// The audit step recording this check.
    pub audit_step: AuditStep,
}

/// Checks whether the high-income pension caveat applies.
pub fn check_high_income(
    yearly_gross: Decimal,
    individual_choice_budget: Decimal,
    step_number: u32,
) -> HighIncomeCheckResult {
    let income = yearly_gross + individual_choice_budget;
    let threshold = high_income_threshold();
    let applies = exceeds_high_income_threshold(yearly_gross, individual_choice_budget);

    let reasoning = if applies {
        format!(
            "€{} exceeds €{}; pension accrual rules differ above this income",
            income.normalize(),
            threshold
        )
    } else {
        format!(
            "€{} does not exceed €{}; standard pension accrual applies",
            income.normalize(),
            threshold
        )
    };

    let warning = applies.then(|| AuditWarning {
        code: HIGH_INCOME_WARNING_CODE.to_string(),
        message: format!(
            "Yearly gross plus choice budget (€{}) exceeds €{}. Pension accrual rules differ above this threshold; pension amounts are indicative.",
            income.round_dp(2),
            threshold
        ),
        severity: "medium".to_string(),
    });

    let audit_step = AuditStep {
        step_number,
        rule_id: "high_income_threshold".to_string(),
        rule_name: "High-income Pension Threshold".to_string(),
        clause_ref: "pension".to_string(),
        input: serde_json::json!({
            "yearly_gross": yearly_gross.normalize().to_string(),
            "individual_choice_budget": individual_choice_budget.normalize().to_string(),
            "threshold": threshold.to_string()
        }),
        output: serde_json::json!({
            "caveat_applies": applies
        }),
        reasoning,
    };

    HighIncomeCheckResult {
        applies,
        warning,
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
    fn test_threshold_is_130000() {
        assert_eq!(high_income_threshold(), dec("130000"));
    }

    #[test]
    fn test_exactly_at_threshold_does_not_apply() {
        assert!(!exceeds_high_income_threshold(dec("110000"), dec("20000")));
    }

    #[test]
    fn test_just_below_threshold_does_not_apply() {
        assert!(!exceeds_high_income_threshold(dec("110000"), dec("19999.99")));
    }

    #[test]
    fn test_just_above_threshold_applies() {
        assert!(exceeds_high_income_threshold(dec("110000"), dec("20000.01")));
    }

    #[test]
    fn test_check_below_threshold_has_no_warning() {
        let result = check_high_income(dec("48000"), dec("7920"), 9);

        assert!(!result.applies);
        assert!(result.warning.is_none());
        assert_eq!(result.audit_step.step_number, 9);
        assert_eq!(
            result.audit_step.output["caveat_applies"].as_bool().unwrap(),
            false
        );
        assert!(result.audit_step.reasoning.contains("does not exceed"));
    }

    #[test]
    fn test_check_above_threshold_warns() {
        let result = check_high_income(dec("127548"), dec("21045.42"), 9);

        assert!(result.applies);
        let warning = result.warning.unwrap();
        assert_eq!(warning.code, HIGH_INCOME_WARNING_CODE);
        assert_eq!(warning.severity, "medium");
        assert!(warning.message.contains("148593.42"));
        assert_eq!(
            result.audit_step.output["caveat_applies"].as_bool().unwrap(),
            true
        );
    }
}
