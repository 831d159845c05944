//! Total compensation calculation.
//!
//! Combines the individual rules into a [`CompensationBreakdown`]:
//!
//! ```text
//! scale_factor          = 12 * hours / 36
//! yearly_gross          = base * scale_factor
//! employee_pension      = base * 0.081 * scale_factor
//! choice_budget         = base * 0.165 * scale_factor
//! gross_incl_benefits   = yearly_gross + choice_budget - employee_pension
//! employer_pension      = base * (0.27 - 0.081) * scale_factor
//! total_compensation    = gross_incl_benefits + employee_pension + employer_pension
//! ```

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::{ConfigLoader, SalaryTable};
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, CompensationBreakdown, CompensationInput, CompensationResult,
    ContractedHours,
};

use super::choice_budget::{calculate_choice_budget, individual_choice_budget};
use super::five_day_equivalent::{calculate_five_day_equivalent, five_day_equivalent};
use super::high_income::{check_high_income, exceeds_high_income_threshold};
use super::monthly_base::get_monthly_base;
use super::part_time_scaling::{calculate_part_time_scaling, scale_factor, yearly_gross};
use super::pension::{calculate_pension, employee_pension, employer_pension};

/// Computes the breakdown for a monthly base amount and contracted hours.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_from_base;
/// use salary_engine::models::ContractedHours;
/// use rust_decimal::Decimal;
///
/// let breakdown = compute_from_base(Decimal::from(4000), ContractedHours::REFERENCE);
/// assert_eq!(breakdown.yearly_gross, Decimal::from(48000));
/// assert_eq!(breakdown.total_compensation, Decimal::from(64992));
/// ```
pub fn compute_from_base(monthly_base: Decimal, hours: ContractedHours) -> CompensationBreakdown {
    let factor = scale_factor(hours);
    let gross = yearly_gross(monthly_base, factor);
    let employee = employee_pension(monthly_base, factor);
    let budget = individual_choice_budget(monthly_base, factor);
    let employer = employer_pension(monthly_base, factor);

    assemble(monthly_base, factor, gross, employee, employer, budget, hours)
}

/// Computes the breakdown for a scale, step and contracted hours.
///
/// Fails with `SalaryNotFound` when the table has no entry for the scale
/// and step.
pub fn compute(
    table: &SalaryTable,
    scale: u32,
    step: u32,
    hours: ContractedHours,
) -> EngineResult<CompensationBreakdown> {
    let monthly_base = table.monthly_base(scale, step)?;
    Ok(compute_from_base(monthly_base, hours))
}

fn assemble(
    monthly_base: Decimal,
    scale_factor: Decimal,
    yearly_gross: Decimal,
    employee_pension: Decimal,
    employer_pension: Decimal,
    individual_choice_budget: Decimal,
    hours: ContractedHours,
) -> CompensationBreakdown {
    let gross_incl_benefits = yearly_gross + individual_choice_budget - employee_pension;
    let total_pension = employee_pension + employer_pension;
    let total_compensation = gross_incl_benefits + total_pension;

    CompensationBreakdown {
        monthly_base,
        scale_factor,
        yearly_gross,
        employee_pension,
        employer_pension,
        total_pension,
        individual_choice_budget,
        gross_incl_benefits,
        total_compensation,
        five_day_equivalent: five_day_equivalent(total_compensation, hours),
        high_income_caveat: exceeds_high_income_threshold(yearly_gross, individual_choice_budget),
    }
}

/// Calculates compensation with a full audit trace.
///
/// Applies the same formulas as [`compute`], one rule at a time, recording
/// an audit step per rule and a warning when the high-income caveat applies.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_compensation;
/// use salary_engine::config::ConfigLoader;
/// use salary_engine::models::{CompensationInput, ContractedHours};
///
/// let loader = ConfigLoader::embedded().unwrap();
/// let input = CompensationInput { scale: 11, step: 5, contracted_hours: ContractedHours::REFERENCE };
/// let result = calculate_compensation(&loader, &input).unwrap();
/// assert_eq!(result.audit_trace.steps.len(), 8);
/// ```
pub fn calculate_compensation(
    config: &ConfigLoader,
    input: &CompensationInput,
) -> EngineResult<CompensationResult> {
    let start_time = Instant::now();
    let hours = input.contracted_hours;
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings = Vec::new();
    let mut step_number: u32 = 1;

    let lookup = get_monthly_base(config.salary_table(), input.scale, input.step, step_number)?;
    let monthly_base = lookup.monthly_base;
    steps.push(lookup.audit_step);
    step_number += 1;

    let scaling = calculate_part_time_scaling(monthly_base, hours, step_number);
    steps.push(scaling.audit_step);
    step_number += 1;

    let pension = calculate_pension(monthly_base, scaling.scale_factor, step_number);
    steps.push(pension.employee_audit_step);
    steps.push(pension.employer_audit_step);
    step_number += 2;

    let budget = calculate_choice_budget(monthly_base, scaling.scale_factor, step_number);
    steps.push(budget.audit_step);
    step_number += 1;

    let breakdown = assemble(
        monthly_base,
        scaling.scale_factor,
        scaling.yearly_gross,
        pension.employee_pension,
        pension.employer_pension,
        budget.individual_choice_budget,
        hours,
    );

    steps.push(total_compensation_step(&breakdown, step_number));
    step_number += 1;

    let five_day = calculate_five_day_equivalent(breakdown.total_compensation, hours, step_number);
    steps.push(five_day.audit_step);
    step_number += 1;

    let high_income = check_high_income(
        breakdown.yearly_gross,
        breakdown.individual_choice_budget,
        step_number,
    );
    steps.push(high_income.audit_step);
    warnings.extend(high_income.warning);

    let duration_us = start_time.elapsed().as_micros() as u64;
    debug!(
        scale = input.scale,
        step = input.step,
        hours = %hours,
        total_compensation = %breakdown.total_compensation.round_dp(2),
        high_income_caveat = breakdown.high_income_caveat,
        duration_us,
        "Compensation calculated"
    );

    let agreement = config.agreement();
    Ok(CompensationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        agreement_code: agreement.code.clone(),
        agreement_version: agreement.version.clone(),
        input: *input,
        breakdown,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

fn total_compensation_step(breakdown: &CompensationBreakdown, step_number: u32) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "total_compensation".to_string(),
        rule_name: "Total Compensation".to_string(),
        clause_ref: "total".to_string(),
        input: serde_json::json!({
            "yearly_gross": breakdown.yearly_gross.normalize().to_string(),
            "individual_choice_budget": breakdown.individual_choice_budget.normalize().to_string(),
            "employee_pension": breakdown.employee_pension.normalize().to_string(),
            "employer_pension": breakdown.employer_pension.normalize().to_string()
        }),
        output: serde_json::json!({
            "gross_incl_benefits": breakdown.gross_incl_benefits.normalize().to_string(),
            "total_pension": breakdown.total_pension.normalize().to_string(),
            "total_compensation": breakdown.total_compensation.normalize().to_string()
        }),
        reasoning: format!(
            "€{} + €{} - €{} + €{} = €{}",
            breakdown.yearly_gross.normalize(),
            breakdown.individual_choice_budget.normalize(),
            breakdown.employee_pension.normalize(),
            breakdown.total_pension.normalize(),
            breakdown.total_compensation.normalize()
        ),
    }
}
