//! Calculation logic for the Salary Engine.
//!
//! This module contains the calculation functions for determining yearly
//! compensation: the monthly base lookup, part-time scaling, the pension
//! premium split, the individual choice budget, the five-day week comparison
//! and the high-income pension threshold check. [`compute`] combines them
//! into a breakdown; [`calculate_compensation`] does the same while recording
//! an audit trace.

mod choice_budget;
mod compensation;
mod five_day_equivalent;
mod high_income;
mod monthly_base;
mod part_time_scaling;
mod pension;

pub use choice_budget::{
    ChoiceBudgetResult, calculate_choice_budget, choice_budget_rate, individual_choice_budget,
};
pub use compensation::{calculate_compensation, compute, compute_from_base};
pub use five_day_equivalent::{
    FiveDayEquivalentResult, calculate_five_day_equivalent, five_day_equivalent,
    five_day_multiplier,
};
pub use high_income::{
    HIGH_INCOME_WARNING_CODE, HighIncomeCheckResult, check_high_income,
    exceeds_high_income_threshold, high_income_threshold,
};
pub use monthly_base::{MonthlyBaseLookupResult, get_monthly_base};
pub use part_time_scaling::{
    MONTHS_PER_YEAR, PartTimeScalingResult, REFERENCE_WEEKLY_HOURS, calculate_part_time_scaling,
    scale_factor, yearly_gross,
};
pub use pension::{
    PensionResult, calculate_pension, employee_pension, employee_pension_rate, employer_pension,
    employer_pension_rate, total_pension_rate,
};
