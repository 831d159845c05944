//! Monthly base salary lookup.
//!
//! This module looks up the full-time monthly base salary for a scale and
//! step in the salary table, recording the lookup in the audit trail.

use rust_decimal::Decimal;

use crate::config::SalaryTable;
use crate::error::EngineResult;
use crate::models::AuditStep;

/// The result of a monthly base lookup, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct MonthlyBaseLookupResult {
    /// The monthly base salary for the 36-hour reference week.
    pub monthly_base: Decimal,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Looks up the monthly base salary for a scale and step.
///
/// # Arguments
///
/// * `table` - The salary table
/// * `scale` - The salary scale
/// * `step` - The step within the scale
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `MonthlyBaseLookupResult`, or `SalaryNotFound` when the
/// combination is absent from the table. No default amount is substituted.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::get_monthly_base;
/// use salary_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::embedded().unwrap();
/// let result = get_monthly_base(loader.salary_table(), 11, 5, 1).unwrap();
/// assert_eq!(result.monthly_base, Decimal::new(400000, 2));
/// ```
pub fn get_monthly_base(
    table: &SalaryTable,
    scale: u32,
    step: u32,
    step_number: u32,
) -> EngineResult<MonthlyBaseLookupResult> {
    let monthly_base = table.monthly_base(scale, step)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_base_lookup".to_string(),
        rule_name: "Monthly Base Lookup".to_string(),
        clause_ref: "salary_table".to_string(),
        input: serde_json::json!({
            "scale": scale,
            "step": step
        }),
        output: serde_json::json!({
            "monthly_base": monthly_base.to_string()
        }),
        reasoning: format!(
            "Salary table: scale {}, step {} = €{} per month (36 hours)",
            scale, step, monthly_base
        ),
    };

    Ok(MonthlyBaseLookupResult {
        monthly_base,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::collections::BTreeMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_table() -> SalaryTable {
        SalaryTable::new(BTreeMap::from([
            (8, BTreeMap::from([(0, dec("2777.00")), (1, dec("2872.00"))])),
            (11, BTreeMap::from([(5, dec("4000.00"))])),
        ]))
        .unwrap()
    }

    #[test]
    fn test_lookup_returns_table_amount() {
        let table = create_test_table();
        let result = get_monthly_base(&table, 8, 1, 1).unwrap();

        assert_eq!(result.monthly_base, dec("2872.00"));
    }

    #[test]
    fn test_lookup_records_audit_step() {
        let table = create_test_table();
        let result = get_monthly_base(&table, 11, 5, 3).unwrap();

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "monthly_base_lookup");
        assert_eq!(result.audit_step.clause_ref, "salary_table");
        assert_eq!(result.audit_step.input["scale"], 11);
        assert_eq!(result.audit_step.input["step"], 5);
        assert_eq!(
            result.audit_step.output["monthly_base"].as_str().unwrap(),
            "4000.00"
        );
        assert!(result.audit_step.reasoning.contains("€4000.00"));
    }

    #[test]
    fn test_lookup_missing_pair_fails() {
        let table = create_test_table();
        let result = get_monthly_base(&table, 11, 6, 1);

        match result {
            Err(EngineError::SalaryNotFound { scale, step }) => {
                assert_eq!(scale, 11);
                assert_eq!(step, 6);
            }
            other => panic!("Expected SalaryNotFound error, got {:?}", other),
        }
    }
}
