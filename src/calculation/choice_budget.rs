//! Individual choice budget (IKB) calculation.
//!
//! Employees accrue a budget of 16.5% of their base salary that they may
//! spend at their own discretion. It scales with contracted hours like the
//! salary itself.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Returns the individual choice budget rate (16.5%).
pub fn choice_budget_rate() -> Decimal {
    Decimal::new(165, 3)
}

/// Yearly individual choice budget: `monthly_base * 0.165 * scale_factor`.
pub fn individual_choice_budget(monthly_base: Decimal, scale_factor: Decimal) -> Decimal {
    monthly_base * choice_budget_rate() * scale_factor
}

/// The result of the choice budget calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct ChoiceBudgetResult {
    /// The yearly individual choice budget.
    pub individual_choice_budget: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the yearly individual choice budget.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_choice_budget;
/// use rust_decimal::Decimal;
///
/// let result = calculate_choice_budget(Decimal::from(4000), Decimal::from(12), 1);
/// assert_eq!(result.individual_choice_budget, Decimal::from(7920));
/// ```
pub fn calculate_choice_budget(
    monthly_base: Decimal,
    scale_factor: Decimal,
    step_number: u32,
) -> ChoiceBudgetResult {
    let budget = individual_choice_budget(monthly_base, scale_factor);

    let audit_step = AuditStep {
        step_number,
        rule_id: "individual_choice_budget".to_string(),
        rule_name: "Individual Choice Budget".to_string(),
        clause_ref: "ikb".to_string(),
        input: serde_json::json!({
            "monthly_base": monthly_base.to_string(),
            "scale_factor": scale_factor.normalize().to_string()
        }),
        output: serde_json::json!({
            "rate": choice_budget_rate().to_string(),
            "individual_choice_budget": budget.normalize().to_string()
        }),
        reasoning: format!(
            "€{} x {} x {} = €{}",
            monthly_base,
            choice_budget_rate(),
            scale_factor.normalize(),
            budget.normalize()
        ),
    };

    ChoiceBudgetResult {
        individual_choice_budget: budget,
        audit_step,
    }
}
