//! The immutable application-state snapshot.
//!
//! One [`AppState`] value holds every collection plus the settings singleton
//! and the timeline. The store never mutates a snapshot in place: each
//! mutation clones the current snapshot, edits the clone, and swaps it in,
//! so earlier snapshots handed out to callers stay valid and inspectable.

use serde::{Deserialize, Serialize};

use crate::models::{
    ChecklistItem, Expense, ExpenseCategory, ExpenseWithCategory, Income, Mode, Scenario,
    Settings, ShoppingItem, TimelineEvent,
};
use crate::policy;

/// Snapshot of all canonical collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Shopping list
    pub items: Vec<ShoppingItem>,
    /// Recurring monthly costs
    pub expenses: Vec<Expense>,
    /// Expense grouping buckets
    pub categories: Vec<ExpenseCategory>,
    /// One income record per lifecycle mode
    pub incomes: Vec<Income>,
    /// Move-readiness tasks
    pub checklist: Vec<ChecklistItem>,
    /// Saved budget simulations
    pub scenarios: Vec<Scenario>,
    /// Process-wide settings singleton
    pub settings: Settings,
    /// Append-only event log, most recent first
    pub timeline: Vec<TimelineEvent>,
}

impl AppState {
    /// Next free item id.
    #[must_use]
    pub fn next_item_id(&self) -> i64 {
        next_id(self.items.iter().map(|i| i.id))
    }

    /// Next free expense id.
    #[must_use]
    pub fn next_expense_id(&self) -> i64 {
        next_id(self.expenses.iter().map(|e| e.id))
    }

    /// Next free income id.
    #[must_use]
    pub fn next_income_id(&self) -> i64 {
        next_id(self.incomes.iter().map(|i| i.id))
    }

    /// Next free checklist id.
    #[must_use]
    pub fn next_checklist_id(&self) -> i64 {
        next_id(self.checklist.iter().map(|c| c.id))
    }

    /// Next free scenario id.
    #[must_use]
    pub fn next_scenario_id(&self) -> i64 {
        next_id(self.scenarios.iter().map(|s| s.id))
    }

    /// Next free timeline event id.
    #[must_use]
    pub fn next_event_id(&self) -> i64 {
        next_id(self.timeline.iter().map(|e| e.id))
    }

    /// The income record for `mode`, if one exists.
    #[must_use]
    pub fn income_for_mode(&self, mode: Mode) -> Option<&Income> {
        self.incomes.iter().find(|i| i.mode == mode)
    }

    /// Expenses visible in the currently active mode.
    #[must_use]
    pub fn active_expenses(&self) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| policy::expense_visible_in(e, self.settings.current_mode))
            .cloned()
            .collect()
    }

    /// Active expenses left-joined with their category. A dangling category
    /// reference yields `category: None` rather than a substitute.
    #[must_use]
    pub fn expenses_with_category(&self) -> Vec<ExpenseWithCategory> {
        self.active_expenses()
            .into_iter()
            .map(|expense| {
                let category = self
                    .categories
                    .iter()
                    .find(|c| c.id == expense.category_id)
                    .cloned();
                ExpenseWithCategory { expense, category }
            })
            .collect()
    }
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::models::{ExpenseKind, ExpenseSource, Visibility};

    fn expense(id: i64, category_id: i64, visibility: Visibility) -> Expense {
        Expense {
            id,
            category_id,
            name: format!("expense-{id}"),
            min_price: None,
            max_price: None,
            current_value: 100.0,
            kind: ExpenseKind::Variable,
            source: ExpenseSource::Salary,
            active: true,
            visibility,
            note: None,
            sort_order: id as i32,
        }
    }

    #[test]
    fn test_next_ids_start_at_one() {
        let state = AppState::default();
        assert_eq!(state.next_item_id(), 1);
        assert_eq!(state.next_event_id(), 1);
    }

    #[test]
    fn test_next_id_is_max_plus_one() {
        let mut state = AppState::default();
        state.expenses.push(expense(7, 1, Visibility::Both));
        state.expenses.push(expense(3, 1, Visibility::Both));
        assert_eq!(state.next_expense_id(), 8);
    }

    #[test]
    fn test_active_expenses_filters_by_mode_visibility() {
        let mut state = AppState::default();
        state.expenses.push(expense(1, 1, Visibility::Preparation));
        state.expenses.push(expense(2, 1, Visibility::Living));
        state.expenses.push(expense(3, 1, Visibility::Both));

        state.settings.current_mode = Mode::Preparation;
        let ids: Vec<i64> = state.active_expenses().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);

        state.settings.current_mode = Mode::Living;
        let ids: Vec<i64> = state.active_expenses().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_expenses_with_category_surfaces_dangling_reference() {
        let mut state = AppState::default();
        state.categories.push(ExpenseCategory {
            id: 1,
            name: "Housing".to_string(),
            icon: "🏠".to_string(),
            sort_order: 1,
        });
        state.expenses.push(expense(1, 1, Visibility::Both));
        state.expenses.push(expense(2, 42, Visibility::Both));

        let joined = state.expenses_with_category();
        assert_eq!(joined.len(), 2);
        assert!(joined[0].category.is_some());
        assert!(joined[1].category.is_none());
    }
}
