//! Pension premium calculation.
//!
//! The pension fund charges a total premium of 27% of the base salary.
//! The employee pays 8.1%; the employer pays the remaining 18.9%.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Returns the total pension premium rate (27%).
pub fn total_pension_rate() -> Decimal {
    Decimal::new(27, 2)
}

/// Returns the employee share of the pension premium (8.1%).
pub fn employee_pension_rate() -> Decimal {
    Decimal::new(81, 3)
}

/// Returns the employer share of the pension premium (27% - 8.1% = 18.9%).
pub fn employer_pension_rate() -> Decimal {
    total_pension_rate() - employee_pension_rate()
}

/// Yearly employee pension premium: `monthly_base * 0.081 * scale_factor`.
pub fn employee_pension(monthly_base: Decimal, scale_factor: Decimal) -> Decimal {
    monthly_base * employee_pension_rate() * scale_factor
}

/// Yearly employer pension premium: `monthly_base * 0.189 * scale_factor`.
pub fn employer_pension(monthly_base: Decimal, scale_factor: Decimal) -> Decimal {
    monthly_base * employer_pension_rate() * scale_factor
}

/// The result of the pension calculation, including audit steps.
#[derive(Debug, Clone)]
pub struct PensionResult {
    /// Yearly premium paid by the employee.
    pub employee_pension: Decimal,
    /// Yearly premium paid by the employer.
    pub employer_pension: Decimal,
    /// Employee and employer premium combined.
    pub total_pension: Decimal,
    /// Audit step for the employee share.
    pub employee_audit_step: AuditStep,
    /// Audit step for the employer share.
    pub employer_audit_step: AuditStep,
}

/// Splits the yearly pension premium into employee and employer shares.
///
/// Records two audit steps, numbered `step_number` and `step_number + 1`.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_pension;
/// use rust_decimal::Decimal;
///
/// let result = calculate_pension(Decimal::from(4000), Decimal::from(12), 1);
/// assert_eq!(result.employee_pension, Decimal::from(3888));
/// assert_eq!(result.employer_pension, Decimal::from(9072));
/// assert_eq!(result.total_pension, Decimal::from(12960));
/// ```
pub fn calculate_pension(
    monthly_base: Decimal,
    scale_factor: Decimal,
    step_number: u32,
) -> PensionResult {
    let employee = employee_pension(monthly_base, scale_factor);
    let employer = employer_pension(monthly_base, scale_factor);
    let total = employee + employer;

    let employee_audit_step = AuditStep {
        step_number,
        rule_id: "employee_pension".to_string(),
        rule_name: "Employee Pension Premium".to_string(),
        clause_ref: "pension".to_string(),
        input: serde_json::json!({
            "monthly_base": monthly_base.to_string(),
            "scale_factor": scale_factor.normalize().to_string()
        }),
        output: serde_json::json!({
            "rate": employee_pension_rate().to_string(),
            "employee_pension": employee.normalize().to_string()
        }),
        reasoning: format!(
            "€{} x {} x {} = €{}",
            monthly_base,
            employee_pension_rate(),
            scale_factor.normalize(),
            employee.normalize()
        ),
    };

    let employer_audit_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "employer_pension".to_string(),
        rule_name: "Employer Pension Premium".to_string(),
        clause_ref: "pension".to_string(),
        input: serde_json::json!({
            "monthly_base": monthly_base.to_string(),
            "scale_factor": scale_factor.normalize().to_string()
        }),
        output: serde_json::json!({
            "rate": employer_pension_rate().to_string(),
            "employer_pension": employer.normalize().to_string(),
            "total_pension": total.normalize().to_string()
        }),
        reasoning: format!(
            "€{} x ({} - {}) x {} = €{}",
            monthly_base,
            total_pension_rate(),
            employee_pension_rate(),
            scale_factor.normalize(),
            employer.normalize()
        ),
    };

    PensionResult {
        employee_pension: employee,
        employer_pension: employer,
        total_pension: total,
        employee_audit_step,
        employer_audit_step,
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
    fn test_rates_are_exact() {
        assert_eq!(total_pension_rate(), dec("0.27"));
        assert_eq!(employee_pension_rate(), dec("0.081"));
        assert_eq!(employer_pension_rate(), dec("0.189"));
    }

    #[test]
    fn test_shares_add_up_to_total_rate() {
        let base = dec("3716.00");
        let factor = dec("12");
        let result = calculate_pension(base, factor, 1);

        assert_eq!(result.total_pension, base * total_pension_rate() * factor);
    }

    #[test]
    fn test_employee_pension_reference_week() {
        assert_eq!(employee_pension(dec("4000"), dec("12")), dec("3888"));
    }

    #[test]
    fn test_employer_pension_reference_week() {
        assert_eq!(employer_pension(dec("4000"), dec("12")), dec("9072"));
    }

    #[test]
    fn test_pension_scales_with_hours() {
        // 27 hours -> scale factor 9
        let result = calculate_pension(dec("4000"), dec("9"), 1);
        assert_eq!(result.employee_pension, dec("2916"));
        assert_eq!(result.employer_pension, dec("6804"));
    }

    #[test]
    fn test_audit_steps_are_sequential() {
        let result = calculate_pension(dec("4000"), dec("12"), 4);

        assert_eq!(result.employee_audit_step.step_number, 4);
        assert_eq!(result.employee_audit_step.rule_id, "employee_pension");
        assert_eq!(result.employer_audit_step.step_number, 5);
        assert_eq!(result.employer_audit_step.rule_id, "employer_pension");
    }

    #[test]
    fn test_audit_reasoning_shows_rates() {
        let result = calculate_pension(dec("4000"), dec("12"), 1);

        assert!(result.employee_audit_step.reasoning.contains("0.081"));
        assert!(result.employee_audit_step.reasoning.contains("€3888"));
        assert!(result.employer_audit_step.reasoning.contains("(0.27 - 0.081)"));
        assert!(result.employer_audit_step.reasoning.contains("€9072"));
        assert_eq!(
            result.employer_audit_step.output["total_pension"]
                .as_str()
                .unwrap(),
            "12960"
        );
    }
}
