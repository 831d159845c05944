//! Part-time scaling.
//!
//! Salary table amounts are monthly figures for the 36-hour reference week.
//! This module converts them into yearly figures for the actual contracted
//! hours using the scale factor `12 * hours / 36`.

use rust_decimal::Decimal;

use crate::models::{AuditStep, ContractedHours};

/// Number of monthly salary payments in a year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Weekly hours the salary table amounts are based on.
pub const REFERENCE_WEEKLY_HOURS: u32 = 36;

/// Returns the annualisation factor for the contracted hours.
///
/// Exactly 12 for the 36-hour reference week.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::scale_factor;
/// use salary_engine::models::ContractedHours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(scale_factor(ContractedHours::REFERENCE), Decimal::from(12));
/// assert_eq!(scale_factor(ContractedHours::from_whole(27).unwrap()), Decimal::from(9));
/// ```
pub fn scale_factor(hours: ContractedHours) -> Decimal {
    Decimal::from(MONTHS_PER_YEAR) * hours.value() / Decimal::from(REFERENCE_WEEKLY_HOURS)
}

/// Returns the yearly gross salary for a monthly base and scale factor.
pub fn yearly_gross(monthly_base: Decimal, scale_factor: Decimal) -> Decimal {
    monthly_base * scale_factor
}

/// The result of part-time scaling, including the audit step.
#[derive(Debug, Clone)]
pub struct PartTimeScalingResult {
    /// Months per year adjusted for the contracted hours.
    pub scale_factor: Decimal,
    /// The yearly gross salary.
    pub yearly_gross: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Scales a full-time monthly base to a yearly gross for the contracted hours.
///
/// # Arguments
///
/// * `monthly_base` - The monthly base salary for the reference week
/// * `hours` - The weekly contracted hours
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_part_time_scaling(
    monthly_base: Decimal,
    hours: ContractedHours,
    step_number: u32,
) -> PartTimeScalingResult {
    let factor = scale_factor(hours);
    let gross = yearly_gross(monthly_base, factor);

    let reasoning = if hours.is_reference() {
        format!(
            "€{} x {} months = €{} (full-time reference week)",
            monthly_base,
            MONTHS_PER_YEAR,
            gross.normalize()
        )
    } else {
        format!(
            "€{} x {} months x {}/{} hours = €{}",
            monthly_base,
            MONTHS_PER_YEAR,
            hours,
            REFERENCE_WEEKLY_HOURS,
            gross.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "part_time_scaling".to_string(),
        rule_name: "Part-time Scaling".to_string(),
        clause_ref: "working_hours".to_string(),
        input: serde_json::json!({
            "monthly_base": monthly_base.to_string(),
            "contracted_hours": hours.to_string(),
            "reference_hours": REFERENCE_WEEKLY_HOURS
        }),
        output: serde_json::json!({
            "scale_factor": factor.normalize().to_string(),
            "yearly_gross": gross.normalize().to_string()
        }),
        reasoning,
    };

    PartTimeScalingResult {
        scale_factor: factor,
        yearly_gross: gross,
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

    fn hours(h: u32) -> ContractedHours {
        ContractedHours::from_whole(h).unwrap()
    }

    #[test]
    fn test_scale_factor_reference_week_is_12() {
        assert_eq!(scale_factor(ContractedHours::REFERENCE), dec("12"));
    }

    #[test]
    fn test_scale_factor_27_hours_is_9() {
        assert_eq!(scale_factor(hours(27)), dec("9"));
    }

    #[test]
    fn test_scale_factor_40_hours() {
        assert_eq!(scale_factor(hours(40)).round_dp(6), dec("13.333333"));
    }

    #[test]
    fn test_scale_factor_fractional_hours() {
        let h = ContractedHours::new(dec("18")).unwrap();
        assert_eq!(scale_factor(h), dec("6"));
    }

    #[test]
    fn test_yearly_gross_reference_week() {
        assert_eq!(yearly_gross(dec("4000"), dec("12")), dec("48000"));
    }

    #[test]
    fn test_calculate_part_time_scaling_full_time() {
        let result = calculate_part_time_scaling(dec("4000.00"), ContractedHours::REFERENCE, 2);

        assert_eq!(result.scale_factor, dec("12"));
        assert_eq!(result.yearly_gross, dec("48000"));
        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "part_time_scaling");
        assert_eq!(
            result.audit_step.output["yearly_gross"].as_str().unwrap(),
            "48000"
        );
        assert!(result.audit_step.reasoning.contains("full-time"));
    }

    #[test]
    fn test_calculate_part_time_scaling_part_time() {
        let result = calculate_part_time_scaling(dec("4000.00"), hours(27), 2);

        assert_eq!(result.scale_factor, dec("9"));
        assert_eq!(result.yearly_gross, dec("36000"));
        assert_eq!(
            result.audit_step.input["contracted_hours"].as_str().unwrap(),
            "27"
        );
        assert!(result.audit_step.reasoning.contains("27/36 hours"));
    }
}
