//! Financial summary derivations.
//!
//! Computes the dashboard-facing numbers: income and expense totals, the
//! balance between them, the three-level health indicator, and the
//! per-category breakdown of active expenses.

use crate::models::{Expense, ExpenseCategory, ExpenseWithCategory, HealthIndicator, Income};

/// Share of the active expenses attributed to one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    /// The category, or `None` when the expense's reference dangles
    pub category: Option<ExpenseCategory>,
    /// Sum of active expense values in this category
    pub total: f64,
    /// This category's share of all active expenses, 0-100
    pub percent: f64,
}

/// Everything the dashboard needs in one structure.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialSummary {
    /// Sum of all income components
    pub total_income: f64,
    /// Sum of active expense values
    pub total_expenses: f64,
    /// Income minus expenses
    pub balance: f64,
    /// Share of income already committed to expenses, 0 when there is no
    /// income
    pub percent_committed: f64,
    /// Three-level classification of the balance
    pub health: HealthIndicator,
    /// Active expenses grouped by category, largest first
    pub by_category: Vec<CategoryBreakdown>,
}

/// Sum of salary, benefit, and extra income.
#[must_use]
pub fn total_income(income: &Income) -> f64 {
    income.salary + income.benefit + income.extras
}

/// Sum of `current_value` over active expenses. Inactive expenses
/// contribute nothing.
#[must_use]
pub fn total_expenses(expenses: &[Expense]) -> f64 {
    expenses
        .iter()
        .filter(|e| e.active)
        .map(|e| e.current_value)
        .sum()
}

/// Income minus active expenses.
#[must_use]
pub fn balance(income: &Income, expenses: &[Expense]) -> f64 {
    total_income(income) - total_expenses(expenses)
}

/// Classifies a balance relative to total income.
///
/// With no income at all the situation is critical regardless of balance;
/// the division-by-zero guard takes precedence. Otherwise a balance of at
/// least 10% of income is healthy, a non-negative one is a caution, and a
/// negative one is critical.
#[must_use]
pub fn health_indicator(balance: f64, total_income: f64) -> HealthIndicator {
    if total_income == 0.0 {
        return HealthIndicator::Critical;
    }
    let percent = balance / total_income * 100.0;
    if percent >= 10.0 {
        HealthIndicator::Healthy
    } else if percent >= 0.0 {
        HealthIndicator::Caution
    } else {
        HealthIndicator::Critical
    }
}

/// Groups active expenses by category and computes each category's share of
/// the active total, sorted descending by total.
///
/// The percentage is of total active expenses, not of income. An empty or
/// all-inactive collection yields an empty list; there is no
/// division-by-zero case because shares are only computed against a
/// positive total.
#[must_use]
pub fn expenses_by_category(expenses: &[ExpenseWithCategory]) -> Vec<CategoryBreakdown> {
    let active: Vec<&ExpenseWithCategory> =
        expenses.iter().filter(|e| e.expense.active).collect();
    let active_total: f64 = active.iter().map(|e| e.expense.current_value).sum();

    let mut grouped: Vec<CategoryBreakdown> = Vec::new();
    for entry in active {
        let key = entry.expense.category_id;
        let existing = grouped.iter_mut().find(|b| {
            b.category.as_ref().map_or_else(
                || entry.category.is_none(),
                |c| c.id == key && entry.category.is_some(),
            )
        });
        match existing {
            Some(bucket) => bucket.total += entry.expense.current_value,
            None => grouped.push(CategoryBreakdown {
                category: entry.category.clone(),
                total: entry.expense.current_value,
                percent: 0.0,
            }),
        }
    }

    for bucket in &mut grouped {
        bucket.percent = if active_total > 0.0 {
            bucket.total / active_total * 100.0
        } else {
            0.0
        };
    }

    grouped.sort_by(|a, b| b.total.total_cmp(&a.total));
    grouped
}

/// Aggregates totals, balance, health, and the category breakdown for
/// dashboard consumption.
#[must_use]
pub fn financial_summary(income: &Income, expenses: &[ExpenseWithCategory]) -> FinancialSummary {
    let plain: Vec<Expense> = expenses.iter().map(|e| e.expense.clone()).collect();
    let total_income = total_income(income);
    let total_expenses = total_expenses(&plain);
    let balance = total_income - total_expenses;
    let percent_committed = if total_income > 0.0 {
        total_expenses / total_income * 100.0
    } else {
        0.0
    };

    FinancialSummary {
        total_income,
        total_expenses,
        balance,
        percent_committed,
        health: health_indicator(balance, total_income),
        by_category: expenses_by_category(expenses),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::models::{ExpenseKind, ExpenseSource, Mode, Visibility};

    fn income(salary: f64, benefit: f64, extras: f64) -> Income {
        Income {
            id: 1,
            mode: Mode::Preparation,
            salary,
            benefit,
            extras,
            reference_month: "2026-08".to_string(),
        }
    }

    fn expense(id: i64, category_id: i64, value: f64, active: bool) -> Expense {
        Expense {
            id,
            category_id,
            name: format!("expense-{id}"),
            min_price: None,
            max_price: None,
            current_value: value,
            kind: ExpenseKind::Variable,
            source: ExpenseSource::Salary,
            active,
            visibility: Visibility::Both,
            note: None,
            sort_order: id as i32,
        }
    }

    fn category(id: i64, name: &str) -> ExpenseCategory {
        ExpenseCategory {
            id,
            name: name.to_string(),
            icon: "🏠".to_string(),
            sort_order: id as i32,
        }
    }

    fn with_category(expense: Expense, category: Option<ExpenseCategory>) -> ExpenseWithCategory {
        ExpenseWithCategory { expense, category }
    }

    #[test]
    fn test_total_income_sums_components() {
        assert_eq!(total_income(&income(3000.0, 500.0, 120.0)), 3620.0);
        assert_eq!(total_income(&income(0.0, 0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_total_expenses_counts_only_active() {
        let expenses = vec![
            expense(1, 1, 900.0, true),
            expense(2, 1, 250.0, false),
            expense(3, 2, 80.0, true),
        ];
        assert_eq!(total_expenses(&expenses), 980.0);
    }

    #[test]
    fn test_toggling_active_removes_exactly_that_contribution() {
        let mut expenses = vec![
            expense(1, 1, 900.0, true),
            expense(2, 1, 250.0, true),
            expense(3, 2, 80.0, true),
        ];
        let before = total_expenses(&expenses);
        expenses[1].active = false;
        let after = total_expenses(&expenses);
        assert_eq!(before - after, 250.0);
    }

    #[test]
    fn test_balance_is_income_minus_expenses() {
        let inc = income(2000.0, 0.0, 0.0);
        let expenses = vec![expense(1, 1, 1500.0, true)];
        assert_eq!(balance(&inc, &expenses), 500.0);

        // zero income, all-inactive expenses
        let inc = income(0.0, 0.0, 0.0);
        let expenses = vec![expense(1, 1, 1500.0, false)];
        assert_eq!(balance(&inc, &expenses), 0.0);
    }

    #[test]
    fn test_health_indicator_boundaries() {
        // pct exactly 10 -> healthy
        assert_eq!(health_indicator(100.0, 1000.0), HealthIndicator::Healthy);
        // pct exactly 0 -> caution
        assert_eq!(health_indicator(0.0, 1000.0), HealthIndicator::Caution);
        // just below 0 -> critical
        assert_eq!(health_indicator(-0.01, 1000.0), HealthIndicator::Critical);
        // just below 10 -> caution
        assert_eq!(health_indicator(99.0, 1000.0), HealthIndicator::Caution);
    }

    #[test]
    fn test_health_indicator_zero_income_is_critical() {
        assert_eq!(health_indicator(0.0, 0.0), HealthIndicator::Critical);
        assert_eq!(health_indicator(500.0, 0.0), HealthIndicator::Critical);
    }

    #[test]
    fn test_expenses_by_category_groups_and_sorts() {
        let housing = category(1, "Housing");
        let leisure = category(2, "Leisure");
        let expenses = vec![
            with_category(expense(1, 1, 900.0, true), Some(housing.clone())),
            with_category(expense(2, 2, 80.0, true), Some(leisure.clone())),
            with_category(expense(3, 1, 100.0, true), Some(housing.clone())),
        ];

        let breakdown = expenses_by_category(&expenses);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category.as_ref().unwrap().id, 1);
        assert_eq!(breakdown[0].total, 1000.0);
        assert!((breakdown[0].percent - 1000.0 / 1080.0 * 100.0).abs() < 1e-9);
        assert_eq!(breakdown[1].total, 80.0);
    }

    #[test]
    fn test_expenses_by_category_empty_input() {
        let breakdown = expenses_by_category(&[]);
        assert!(breakdown.is_empty());
    }

    #[test]
    fn test_expenses_by_category_skips_inactive() {
        let housing = category(1, "Housing");
        let expenses = vec![
            with_category(expense(1, 1, 900.0, false), Some(housing.clone())),
            with_category(expense(2, 1, 100.0, true), Some(housing)),
        ];
        let breakdown = expenses_by_category(&expenses);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].total, 100.0);
        assert_eq!(breakdown[0].percent, 100.0);
    }

    #[test]
    fn test_expenses_by_category_surfaces_dangling_reference() {
        let expenses = vec![with_category(expense(1, 99, 50.0, true), None)];
        let breakdown = expenses_by_category(&expenses);
        assert_eq!(breakdown.len(), 1);
        assert!(breakdown[0].category.is_none());
        assert_eq!(breakdown[0].total, 50.0);
    }

    #[test]
    fn test_financial_summary_aggregates() {
        let inc = income(2000.0, 400.0, 0.0);
        let housing = category(1, "Housing");
        let expenses = vec![
            with_category(expense(1, 1, 1200.0, true), Some(housing)),
            with_category(expense(2, 1, 300.0, false), None),
        ];

        let summary = financial_summary(&inc, &expenses);
        assert_eq!(summary.total_income, 2400.0);
        assert_eq!(summary.total_expenses, 1200.0);
        assert_eq!(summary.balance, 1200.0);
        assert_eq!(summary.percent_committed, 50.0);
        assert_eq!(summary.health, HealthIndicator::Healthy);
        assert_eq!(summary.by_category.len(), 1);
    }

    #[test]
    fn test_financial_summary_zero_income() {
        let inc = income(0.0, 0.0, 0.0);
        let summary = financial_summary(&inc, &[]);
        assert_eq!(summary.percent_committed, 0.0);
        assert_eq!(summary.health, HealthIndicator::Critical);
    }
}
